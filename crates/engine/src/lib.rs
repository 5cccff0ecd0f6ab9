//! Engine layer for tracescope
//!
//! This crate turns a [`TraceStore`](tracescope_storage::TraceStore) and a
//! [`Window`](tracescope_core::Window) into what the UI draws:
//! - WindowController: scroll/zoom/focus/reset arithmetic with clamping
//! - projector: the visible roots of the call forest for a window
//! - EngineConfig: default gesture magnitudes and store sizing, from TOML

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod controller;
pub mod projector;

pub use config::{ConfigError, EngineConfig, MAX_INITIAL_CAPACITY};
pub use controller::{ScrollDirection, WindowController, ZoomDirection};
pub use projector::{children_for, visible_roots};
