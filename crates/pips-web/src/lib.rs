#![forbid(unsafe_code)]

//! `pips-web` is the product detail overlay for the storefront's catalog
//! pages.
//!
//! Design goals:
//! - **Host-driven I/O**: the page script pushes normalized input events and
//!   applies the [`HostCommand`]s that come back.
//! - **Deterministic time**: the host advances a monotonic clock explicitly;
//!   debounce timers are virtual.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! The state machine, gesture routing and rendering are plain Rust and test
//! natively. The `wasm32` build adds a `wasm-bindgen` class,
//! `ProductOverlay`, over [`OverlayProgram`].

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod overlay;
pub mod program;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::ProductOverlay;

pub use command::{Cmd, FocusTarget, HostCommand};
pub use config::OverlayConfig;
pub use controller::{OverlayController, TimerKind};
pub use error::WebError;
pub use overlay::{OverlayState, Visibility};
pub use program::{OverlayOutputs, OverlayProgram, StepResult};
pub use render::{escape_html, render_product, render_shell};
