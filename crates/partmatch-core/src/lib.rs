//! PartMatch client core.
//!
//! Everything the UI decides is computed here: the wire types the
//! part-matching backend speaks, the HTTP client behind the
//! [`api::PartMatchApi`] seam, the [`state::AppState`] container whose
//! pure transitions encode the tab/toast/busy rules, and the
//! [`flows`] drivers that tie one user action to one backend call.
//!
//! The crate is rendering-free on purpose: all of the behavior that
//! matters can be unit tested without a UI runtime, and the app crate
//! only has to wire signals and components on top.
//!
//! # Examples
//!
//! ```ignore
//! use partmatch_core::api::{HttpApi, PartMatchApi};
//! use partmatch_core::flows;
//! use partmatch_core::state::AppState;
//!
//! let api = HttpApi::from_config();
//! let mut state = AppState::new();
//! flows::refresh_documents(&api, &mut state).await;
//! assert!(!state.documents().is_empty());
//! ```

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod flows;
pub mod state;
pub mod types;

pub use error::ApiError;
