use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::render::Renderer;

use super::{Scene, SceneController, SceneSlice};

pub const SCENE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of the controller for hosts and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub scene: Scene,
    pub scene_index: usize,
    pub date_index: usize,
    pub date_count: usize,
    pub active_date: String,
    pub title: String,
    pub subtitle: String,
    pub date_controls_visible: bool,
    pub slice: SceneSlice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SceneSnapshot,
}

impl SceneSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SceneResult<String> {
        let payload = SceneSnapshotJsonContractV1 {
            schema_version: SCENE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| SceneError::Json(format!("failed to serialize snapshot contract v1: {e}")))
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> SceneResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SceneSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SceneSnapshotJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| SceneError::Json(format!("failed to parse snapshot json payload: {e}")))?;
        if payload.schema_version != SCENE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(SceneError::Json(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> SceneController<R> {
    pub fn snapshot(&self) -> SceneResult<SceneSnapshot> {
        let state = self.state();
        let descriptor = self.descriptor();
        Ok(SceneSnapshot {
            scene: state.scene(),
            scene_index: state.scene().index(),
            date_index: state.date_index(),
            date_count: state.date_count(),
            active_date: self.active_date().to_owned(),
            title: descriptor.title.to_owned(),
            subtitle: descriptor.subtitle.to_owned(),
            date_controls_visible: descriptor.date_controls_visible,
            slice: self.current_slice()?,
        })
    }

    pub fn snapshot_json_pretty(&self) -> SceneResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
