//! Backend endpoint configuration.
//!
//! Resolution order:
//! 1. `PARTMATCH_API_BASE` in the process environment (native builds)
//! 2. `PARTMATCH_API_BASE` at compile time (the only override that can
//!    reach a WASM bundle)
//! 3. the production backend

/// Environment variable naming the backend base URL.
pub const API_BASE_ENV: &str = "PARTMATCH_API_BASE";

/// Production backend address.
pub const DEFAULT_API_BASE: &str = "https://part-match-backend.vercel.app";

/// Resolves the backend base URL for this build.
pub fn api_base() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    let runtime_override = std::env::var(API_BASE_ENV).ok();
    #[cfg(target_arch = "wasm32")]
    let runtime_override: Option<String> = None;

    resolve(runtime_override)
}

/// Applies the resolution order to an already-read runtime override.
/// A variable that is set but blank does not count as an override.
fn resolve(runtime_override: Option<String>) -> String {
    if let Some(base) = runtime_override {
        if !base.trim().is_empty() {
            return base;
        }
    }

    option_env!("PARTMATCH_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}
