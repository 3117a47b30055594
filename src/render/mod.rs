mod color;
mod frame;
mod null_renderer;

pub use color::Color;
pub use frame::{RenderFrame, mark_color};
pub use null_renderer::NullRenderer;

use crate::error::SceneResult;

/// Contract implemented by the drawing collaborator.
///
/// Backends receive a fully selected `RenderFrame`; axes, shapes, tooltips
/// and callout placement are theirs to draw.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> SceneResult<()>;
}
