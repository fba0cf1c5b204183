//! PartMatch - invoice and purchase-order part matching client.
//!
//! A single-page application for matching invoice line items against a
//! parts catalog. Users upload PDF documents, run batch matching over
//! their extracted line items, and look up individual part descriptions
//! with a free-text search. All parsing, embedding, and scoring happens
//! in the backend; this crate is the UI over `partmatch-core`, which
//! owns the state machine and the HTTP calls.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: Runs in browser, talking to the backend via fetch
//! - **Desktop**: macOS/Windows/Linux via the Dioxus desktop renderer

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
pub mod signal_state;
pub mod utils;
