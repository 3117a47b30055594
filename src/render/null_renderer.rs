use crate::error::SceneResult;
use crate::render::{RenderFrame, Renderer};
use crate::scene::Scene;

/// Headless renderer for tests and embedding without a drawing backend.
///
/// Frames are still validated and the last one is kept for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_scene(&self) -> Option<Scene> {
        self.last_frame.as_ref().map(RenderFrame::scene)
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SceneResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
