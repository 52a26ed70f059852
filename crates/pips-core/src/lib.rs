#![forbid(unsafe_code)]

//! Core: input events, deterministic time, debounce timers, and gesture
//! classification for the product detail overlay.

pub mod clock;
pub mod config;
pub mod event;
pub mod gesture;
pub mod logging;
pub mod timer;
