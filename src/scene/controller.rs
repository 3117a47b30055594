use tracing::{debug, trace, warn};

use crate::core::{Aggregates, Dataset};
use crate::error::SceneResult;
use crate::render::{RenderFrame, Renderer};

use super::{
    NavigationEvent, NavigationState, Scene, SceneConfig, SceneDescriptor, SceneSlice, reduce,
    select_slice,
};

/// Owns navigation state and hands the active scene's slice to a renderer.
///
/// A controller only exists once data has loaded, so navigation can never
/// run against an empty dataset.
pub struct SceneController<R: Renderer> {
    renderer: R,
    aggregates: Aggregates,
    config: SceneConfig,
    state: NavigationState,
}

impl<R: Renderer> SceneController<R> {
    pub fn new(aggregates: Aggregates, config: SceneConfig, renderer: R) -> SceneResult<Self> {
        config.validate()?;
        aggregates.ensure_loaded()?;
        let state = NavigationState::new(aggregates.date_count())?;
        debug!(
            dates = aggregates.date_count(),
            top_countries_limit = config.top_countries_limit,
            explore_limit = config.explore_limit,
            "scene controller ready"
        );
        Ok(Self {
            renderer,
            aggregates,
            config,
            state,
        })
    }

    /// Aggregates `dataset` and builds a controller over the result.
    pub fn from_dataset(dataset: &Dataset, config: SceneConfig, renderer: R) -> SceneResult<Self> {
        Self::new(Aggregates::compute(dataset), config, renderer)
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        self.state.scene()
    }

    #[must_use]
    pub fn date_index(&self) -> usize {
        self.state.date_index()
    }

    /// Label of the explore date cursor.
    #[must_use]
    pub fn active_date(&self) -> &str {
        self.aggregates
            .axis()
            .label(self.state.date_index())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn descriptor(&self) -> SceneDescriptor {
        self.state.scene().descriptor()
    }

    #[must_use]
    pub fn aggregates(&self) -> &Aggregates {
        &self.aggregates
    }

    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn current_slice(&self) -> SceneResult<SceneSlice> {
        select_slice(self.state, &self.aggregates, &self.config)
    }

    pub fn current_frame(&self) -> SceneResult<RenderFrame> {
        RenderFrame::compose(self.state, &self.aggregates, &self.config)
    }

    /// Draws the active scene.
    pub fn render(&mut self) -> SceneResult<()> {
        let frame = self.current_frame()?;
        trace!(
            scene = ?frame.scene(),
            marks = frame.slice.len(),
            "render scene"
        );
        self.renderer.render(&frame).inspect_err(|err| {
            warn!(error = %err, scene = ?frame.scene(), "renderer rejected frame");
        })
    }

    /// Applies `event` and re-renders synchronously.
    ///
    /// The state change sticks even when rendering fails.
    pub fn dispatch(&mut self, event: NavigationEvent) -> SceneResult<()> {
        let previous = self.state;
        self.state = reduce(previous, event);
        debug!(
            ?event,
            from_scene = ?previous.scene(),
            to_scene = ?self.state.scene(),
            date_index = self.state.date_index(),
            "navigation"
        );
        self.render()
    }

    pub fn advance(&mut self) -> SceneResult<()> {
        self.dispatch(NavigationEvent::Advance)
    }

    pub fn retreat(&mut self) -> SceneResult<()> {
        self.dispatch(NavigationEvent::Retreat)
    }

    /// Moves the explore date cursor, clamping into the date range.
    pub fn set_date(&mut self, index: i64) -> SceneResult<()> {
        self.dispatch(NavigationEvent::SetDate(index))
    }
}
