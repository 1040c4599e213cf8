//! `storefront-client`
//!
//! **Responsibility:** the browser-side shell around the storefront flows.
//!
//! This crate provides:
//! - The HTTP collaborator for basket and review mutations
//! - CSRF token handling for every mutating request
//! - Configuration loading
//! - The Leptos frontend (wasm32 only) that mounts the catalog, basket and
//!   review views
//!
//! The server stays the authority; this shell only applies confirmed replies.

pub mod client;
pub mod config;
pub mod csrf;
pub mod wire;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use client::{ClientError, StorefrontClient};
pub use config::StorefrontConfig;
pub use csrf::CsrfToken;
