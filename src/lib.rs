//! scrolly-rs: data model behind a three-scene case-count story.
//!
//! The crate turns a wide time-series CSV (one row per country, one column
//! per date) into the derived views each scene needs, and owns the
//! navigation state that decides which slice a renderer draws next.
//! Drawing itself stays behind the [`render::Renderer`] contract.

pub mod core;
pub mod error;
pub mod render;
pub mod scene;
pub mod telemetry;

pub use error::{SceneError, SceneResult};
pub use scene::{SceneConfig, SceneController};
