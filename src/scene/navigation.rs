use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// The three views, in story order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scene {
    /// Global cumulative total over time.
    #[default]
    Trend,
    /// Top countries at the latest date.
    TopCountries,
    /// Top countries at a user-chosen date.
    Explore,
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::Trend, Scene::TopCountries, Scene::Explore];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Trend => 0,
            Self::TopCountries => 1,
            Self::Explore => 2,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Following scene, staying on the last one.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Preceding scene, staying on the first one.
    #[must_use]
    pub fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }
}

/// User input that moves navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    Advance,
    Retreat,
    /// Raw slider value; clamped into the date range on apply.
    SetDate(i64),
}

/// Active scene plus the explore date cursor.
///
/// `date_index` always lies in `0..date_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    scene: Scene,
    date_index: usize,
    date_count: usize,
}

impl NavigationState {
    /// Starts on the trend scene with the date cursor at the first date.
    pub fn new(date_count: usize) -> SceneResult<Self> {
        if date_count == 0 {
            return Err(SceneError::NoData(
                "navigation needs at least one date".to_owned(),
            ));
        }
        Ok(Self {
            scene: Scene::Trend,
            date_index: 0,
            date_count,
        })
    }

    #[must_use]
    pub fn scene(self) -> Scene {
        self.scene
    }

    #[must_use]
    pub fn date_index(self) -> usize {
        self.date_index
    }

    #[must_use]
    pub fn date_count(self) -> usize {
        self.date_count
    }

    #[must_use]
    pub fn last_date_index(self) -> usize {
        self.date_count - 1
    }

    #[must_use]
    pub fn apply(self, event: NavigationEvent) -> Self {
        reduce(self, event)
    }
}

/// Pure transition function over navigation state.
///
/// Scene moves clamp at both ends; date requests clamp into
/// `[0, date_count - 1]`. The date cursor is kept in every scene but only the
/// explore scene reads it.
#[must_use]
pub fn reduce(state: NavigationState, event: NavigationEvent) -> NavigationState {
    match event {
        NavigationEvent::Advance => NavigationState {
            scene: state.scene.next(),
            ..state
        },
        NavigationEvent::Retreat => NavigationState {
            scene: state.scene.previous(),
            ..state
        },
        NavigationEvent::SetDate(requested) => NavigationState {
            date_index: clamp_date_index(requested, state.date_count),
            ..state
        },
    }
}

fn clamp_date_index(requested: i64, date_count: usize) -> usize {
    if requested < 0 {
        return 0;
    }
    usize::try_from(requested)
        .unwrap_or(usize::MAX)
        .min(date_count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_steps_clamp_at_ends() {
        assert_eq!(Scene::Trend.previous(), Scene::Trend);
        assert_eq!(Scene::Trend.next(), Scene::TopCountries);
        assert_eq!(Scene::Explore.next(), Scene::Explore);
        assert_eq!(Scene::Explore.previous(), Scene::TopCountries);
    }

    #[test]
    fn date_clamp_handles_negative_and_huge_values() {
        assert_eq!(clamp_date_index(-5, 4), 0);
        assert_eq!(clamp_date_index(9_999, 4), 3);
        assert_eq!(clamp_date_index(i64::MAX, 4), 3);
        assert_eq!(clamp_date_index(2, 4), 2);
    }

    #[test]
    fn zero_dates_is_no_data() {
        assert!(matches!(
            NavigationState::new(0),
            Err(SceneError::NoData(_))
        ));
    }
}
