//! Tracing/logging setup shared by the storefront frontend and test harnesses.

/// Initialize browser-side observability (tracing to the console).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    tracing::init();
}

/// Initialize human-readable logging (local development, test output).
pub fn init_pretty() {
    tracing::init_pretty();
}

/// Tracing configuration (filters, layers, writers).
pub mod tracing;
