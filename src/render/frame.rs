use chrono::NaiveDate;

use crate::core::{Aggregates, Margins, Viewport, date_extent};
use crate::error::{SceneError, SceneResult};
use crate::render::Color;
use crate::scene::{NavigationState, Scene, SceneConfig, SceneDescriptor, SceneSlice, select_slice};

const TREND_LINE: Color = Color::rgb(230.0 / 255.0, 85.0 / 255.0, 13.0 / 255.0);
const TOP_BARS: Color = Color::rgb(49.0 / 255.0, 130.0 / 255.0, 189.0 / 255.0);
const EXPLORE_BARS: Color = Color::rgb(0.0, 0.0, 0.0);

/// Everything a backend needs to draw one scene.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub margins: Margins,
    pub descriptor: SceneDescriptor,
    pub slice: SceneSlice,
    pub mark_color: Color,
    /// `[0, max]` of the plotted values; `None` when nothing is positive.
    pub value_domain: Option<(f64, f64)>,
    /// Time axis extent for the trend scene when every date label parses.
    pub date_extent: Option<(NaiveDate, NaiveDate)>,
}

impl RenderFrame {
    pub fn compose(
        state: NavigationState,
        aggregates: &Aggregates,
        config: &SceneConfig,
    ) -> SceneResult<Self> {
        let scene = state.scene();
        let slice = select_slice(state, aggregates, config)?;
        let value_domain = slice.value_domain();
        let extent = match scene {
            Scene::Trend => date_extent(aggregates.axis()),
            Scene::TopCountries | Scene::Explore => None,
        };

        Ok(Self {
            viewport: config.viewport,
            margins: config.margins_for(scene),
            descriptor: scene.descriptor(),
            slice,
            mark_color: mark_color(scene),
            value_domain,
            date_extent: extent,
        })
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        self.slice.scene()
    }

    /// Drawable area inside the margins.
    pub fn plot_area(&self) -> SceneResult<Viewport> {
        self.margins.plot_area(self.viewport).ok_or_else(|| {
            SceneError::InvalidConfig(format!(
                "margins {:?} leave no plot area in {}x{}",
                self.margins, self.viewport.width, self.viewport.height
            ))
        })
    }

    pub fn validate(&self) -> SceneResult<()> {
        self.viewport.validate()?;
        self.plot_area()?;
        self.mark_color.validate()?;
        if let Some((min, max)) = self.value_domain {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(SceneError::InvalidData(format!(
                    "value domain [{min}, {max}] must be finite and non-empty"
                )));
            }
        }
        Ok(())
    }
}

#[must_use]
pub fn mark_color(scene: Scene) -> Color {
    match scene {
        Scene::Trend => TREND_LINE,
        Scene::TopCountries => TOP_BARS,
        Scene::Explore => EXPLORE_BARS,
    }
}
