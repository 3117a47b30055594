use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Chart surface size in pixels handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> SceneResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SceneError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Space reserved around the plot area for axes and callouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Plot area left after subtracting margins, or `None` if nothing remains.
    #[must_use]
    pub fn plot_area(self, viewport: Viewport) -> Option<Viewport> {
        let width = viewport
            .width
            .checked_sub(self.left.saturating_add(self.right))?;
        let height = viewport
            .height
            .checked_sub(self.top.saturating_add(self.bottom))?;
        let area = Viewport::new(width, height);
        area.is_valid().then_some(area)
    }
}

/// Sum of every row's value for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalTotalPoint {
    pub date: String,
    pub total: f64,
}

impl GlobalTotalPoint {
    #[must_use]
    pub fn new(date: impl Into<String>, total: f64) -> Self {
        Self {
            date: date.into(),
            total,
        }
    }
}

/// One country's value at a fixed date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryValue {
    pub country: String,
    pub value: f64,
}

impl CountryValue {
    #[must_use]
    pub fn new(country: impl Into<String>, value: f64) -> Self {
        Self {
            country: country.into(),
            value,
        }
    }
}

/// Every row's value for one date, in row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSnapshot {
    pub date: String,
    pub values: Vec<CountryValue>,
}

impl DateSnapshot {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
