use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{
    Aggregates, CountryValue, GlobalTotalPoint, display_date_label, format_cases, format_count,
    peak_total, rank_snapshot,
};
use crate::error::{SceneError, SceneResult};

use super::{NavigationState, Scene, SceneConfig};

/// Where a callout points, in data terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationAnchor {
    TrendPoint { date: String, total: f64 },
    Bar { country: String, value: f64 },
}

/// Overlay callout drawn next to a data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub title: String,
    /// May contain `\n` line breaks.
    pub label: String,
    pub anchor: AnnotationAnchor,
    /// Label offset from the anchor in pixels.
    pub dx: f64,
    pub dy: f64,
    pub wrap_px: f64,
}

/// Text shown when hovering one mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSlice {
    pub points: Vec<GlobalTotalPoint>,
    pub peak: Option<Annotation>,
}

/// Ranked bars for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSlice {
    pub date: String,
    pub date_index: usize,
    pub limit: usize,
    pub entries: Vec<CountryValue>,
    pub annotation: Option<Annotation>,
}

/// Data handed to the renderer for the active scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneSlice {
    Trend(TrendSlice),
    TopCountries(RankedSlice),
    Explore(RankedSlice),
}

impl SceneSlice {
    #[must_use]
    pub fn scene(&self) -> Scene {
        match self {
            Self::Trend(_) => Scene::Trend,
            Self::TopCountries(_) => Scene::TopCountries,
            Self::Explore(_) => Scene::Explore,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Trend(trend) => trend.points.len(),
            Self::TopCountries(ranked) | Self::Explore(ranked) => ranked.entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn annotation(&self) -> Option<&Annotation> {
        match self {
            Self::Trend(trend) => trend.peak.as_ref(),
            Self::TopCountries(ranked) | Self::Explore(ranked) => ranked.annotation.as_ref(),
        }
    }

    /// Value axis domain `[0, max]`, or `None` when there is no positive value.
    #[must_use]
    pub fn value_domain(&self) -> Option<(f64, f64)> {
        let max = match self {
            Self::Trend(trend) => trend
                .points
                .iter()
                .map(|point| point.total)
                .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v)))),
            Self::TopCountries(ranked) | Self::Explore(ranked) => {
                ranked.entries.first().map(|entry| entry.value)
            }
        }?;
        (max > 0.0).then_some((0.0, max))
    }

    /// Date readout shown beside the slider; explore scene only.
    #[must_use]
    pub fn date_readout(&self) -> Option<&str> {
        match self {
            Self::Explore(ranked) => Some(ranked.date.as_str()),
            Self::Trend(_) | Self::TopCountries(_) => None,
        }
    }

    /// Hover text for the mark at `index` in slice order.
    #[must_use]
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        match self {
            Self::Trend(trend) => trend.points.get(index).map(|point| Tooltip {
                heading: display_date_label(&point.date),
                body: format_cases(point.total),
            }),
            Self::TopCountries(ranked) => ranked.entries.get(index).map(|entry| Tooltip {
                heading: entry.country.clone(),
                body: format_cases(entry.value),
            }),
            Self::Explore(ranked) => ranked.entries.get(index).map(|entry| Tooltip {
                heading: entry.country.clone(),
                body: format_count(entry.value),
            }),
        }
    }
}

/// Picks the data slice the active scene renders.
pub fn select_slice(
    state: NavigationState,
    aggregates: &Aggregates,
    config: &SceneConfig,
) -> SceneResult<SceneSlice> {
    let scene = state.scene();
    let slice = match (scene, config.ranking_limit(scene)) {
        (Scene::Trend, _) => SceneSlice::Trend(trend_slice(aggregates)),
        (Scene::TopCountries, Some(limit)) => {
            let ranked = ranked_slice(aggregates, state.last_date_index(), limit)?;
            SceneSlice::TopCountries(RankedSlice {
                annotation: top_bar_annotation(&ranked.entries),
                ..ranked
            })
        }
        (Scene::Explore, Some(limit)) => {
            SceneSlice::Explore(ranked_slice(aggregates, state.date_index(), limit)?)
        }
        (scene, None) => {
            return Err(SceneError::InvalidConfig(format!(
                "no ranking limit configured for {scene:?}"
            )));
        }
    };

    if slice.value_domain().is_none() {
        warn!(
            scene = ?slice.scene(),
            marks = slice.len(),
            "slice has no positive values; value axis left undefined"
        );
    }
    Ok(slice)
}

fn trend_slice(aggregates: &Aggregates) -> TrendSlice {
    let points = aggregates.global_totals().to_vec();
    let peak = peak_total(&points).map(|peak| Annotation {
        title: "Global peak".to_owned(),
        label: format!(
            "{}\n{}",
            display_date_label(&peak.date),
            format_cases(peak.total)
        ),
        anchor: AnnotationAnchor::TrendPoint {
            date: peak.date.clone(),
            total: peak.total,
        },
        dx: -80.0,
        dy: -50.0,
        wrap_px: 120.0,
    });
    TrendSlice { points, peak }
}

fn ranked_slice(
    aggregates: &Aggregates,
    date_index: usize,
    limit: usize,
) -> SceneResult<RankedSlice> {
    let snapshot = aggregates.snapshot(date_index).ok_or_else(|| {
        SceneError::InvalidData(format!(
            "no snapshot for date index {date_index} (dates: {})",
            aggregates.date_count()
        ))
    })?;
    Ok(RankedSlice {
        date: snapshot.date.clone(),
        date_index,
        limit,
        entries: rank_snapshot(snapshot, limit),
        annotation: None,
    })
}

fn top_bar_annotation(entries: &[CountryValue]) -> Option<Annotation> {
    entries.first().map(|top| Annotation {
        title: top.country.clone(),
        label: format_cases(top.value),
        anchor: AnnotationAnchor::Bar {
            country: top.country.clone(),
            value: top.value,
        },
        dx: -100.0,
        dy: -20.0,
        wrap_px: 80.0,
    })
}
