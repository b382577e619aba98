//! Flappy - a terminal side-scroller.
//!
//! The library holds the simulation and rendering so they can be tested
//! without a terminal; `main.rs` only owns the event loop.

pub mod assets;
pub mod audio;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod ui;
