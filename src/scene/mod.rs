//! Scene state and per-scene data selection.
//!
//! Navigation is a pure reducer over [`NavigationState`]; the
//! [`SceneController`] owns one state instance and re-renders after every
//! transition.

mod config;
mod controller;
mod descriptor;
mod navigation;
mod slice;
mod snapshot;

pub use config::SceneConfig;
pub use controller::SceneController;
pub use descriptor::SceneDescriptor;
pub use navigation::{NavigationEvent, NavigationState, Scene, reduce};
pub use slice::{
    Annotation, AnnotationAnchor, RankedSlice, SceneSlice, Tooltip, TrendSlice, select_slice,
};
pub use snapshot::{SCENE_SNAPSHOT_JSON_SCHEMA_V1, SceneSnapshot, SceneSnapshotJsonContractV1};
