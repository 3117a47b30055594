//! Numeric parsing boundary for raw CSV cells.
//!
//! Cells arrive as text. The policy for anything that is not a finite number
//! lives here so it can be tested on its own: [`CellValue::or_zero`] maps
//! empty, missing, and malformed cells to `0.0`.

use serde::{Deserialize, Serialize};

/// Outcome of reading one cell as a case count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Number(f64),
    /// Cell absent (short record) or blank.
    Empty,
    /// Text present but not a finite number.
    Invalid,
}

impl CellValue {
    /// Documented default: non-numbers count as zero.
    #[must_use]
    pub fn or_zero(self) -> f64 {
        match self {
            Self::Number(value) => value,
            Self::Empty | Self::Invalid => 0.0,
        }
    }
}

/// Parses a cell's text. Surrounding whitespace is ignored.
#[must_use]
pub fn parse_count(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => CellValue::Number(value),
        _ => CellValue::Invalid,
    }
}

/// Parses an optional cell; `None` means the record had no such field.
#[must_use]
pub fn parse_cell(raw: Option<&str>) -> CellValue {
    raw.map_or(CellValue::Empty, parse_count)
}
