use serde::{Deserialize, Serialize};

use crate::core::{Margins, Viewport};
use crate::error::{SceneError, SceneResult};

use super::Scene;

/// Scene bootstrap configuration.
///
/// Serializable so hosts can ship chart setup as JSON next to the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_top_countries_limit")]
    pub top_countries_limit: usize,
    #[serde(default = "default_explore_limit")]
    pub explore_limit: usize,
    /// Margins for the trend and top-countries scenes; the tall top leaves
    /// room for callouts.
    #[serde(default = "default_narrative_margins")]
    pub narrative_margins: Margins,
    #[serde(default = "default_explore_margins")]
    pub explore_margins: Margins,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            top_countries_limit: default_top_countries_limit(),
            explore_limit: default_explore_limit(),
            narrative_margins: default_narrative_margins(),
            explore_margins: default_explore_margins(),
        }
    }
}

impl SceneConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, top_countries_limit: usize, explore_limit: usize) -> Self {
        self.top_countries_limit = top_countries_limit;
        self.explore_limit = explore_limit;
        self
    }

    #[must_use]
    pub fn margins_for(&self, scene: Scene) -> Margins {
        match scene {
            Scene::Trend | Scene::TopCountries => self.narrative_margins,
            Scene::Explore => self.explore_margins,
        }
    }

    /// Ranking limit for the bar scenes; the trend scene is not ranked.
    #[must_use]
    pub fn ranking_limit(&self, scene: Scene) -> Option<usize> {
        match scene {
            Scene::Trend => None,
            Scene::TopCountries => Some(self.top_countries_limit),
            Scene::Explore => Some(self.explore_limit),
        }
    }

    pub fn validate(&self) -> SceneResult<()> {
        self.viewport.validate()?;
        if self.top_countries_limit == 0 || self.explore_limit == 0 {
            return Err(SceneError::InvalidConfig(
                "ranking limits must be > 0".to_owned(),
            ));
        }
        for scene in Scene::ALL {
            if self.margins_for(scene).plot_area(self.viewport).is_none() {
                return Err(SceneError::InvalidConfig(format!(
                    "margins leave no plot area for {scene:?}"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> SceneResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| SceneError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> SceneResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SceneError::Json(format!("failed to serialize config: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(1000, 800)
}

fn default_top_countries_limit() -> usize {
    10
}

fn default_explore_limit() -> usize {
    15
}

fn default_narrative_margins() -> Margins {
    Margins::new(150, 20, 40, 140)
}

fn default_explore_margins() -> Margins {
    Margins::new(40, 20, 40, 140)
}
