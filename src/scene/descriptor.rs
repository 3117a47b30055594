use serde::Serialize;

use super::Scene;

/// Static text and control visibility shown alongside a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SceneDescriptor {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Whether the date slider and its readout are shown.
    pub date_controls_visible: bool,
}

const TREND: SceneDescriptor = SceneDescriptor {
    title: "Global Trend: Total Confirmed Cases",
    subtitle: "This line graph shows the cumulative global confirmed cases over time. \
               Hover over any point on the line for the exact date & confirmed cases count.",
    date_controls_visible: false,
};

const TOP_COUNTRIES: SceneDescriptor = SceneDescriptor {
    title: "Snapshot: Top 10 Countries (Latest)",
    subtitle: "This horizontal bar graph shows the top 10 countries by total latest confirmed \
               cases. Hover over the bars for exact counts.",
    date_controls_visible: false,
};

const EXPLORE: SceneDescriptor = SceneDescriptor {
    title: "Explore by Date",
    subtitle: "For this graph, slide to choose a date, then hover over the bars for details!",
    date_controls_visible: true,
};

impl Scene {
    #[must_use]
    pub fn descriptor(self) -> SceneDescriptor {
        match self {
            Self::Trend => TREND,
            Self::TopCountries => TOP_COUNTRIES,
            Self::Explore => EXPLORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explore_shows_date_controls() {
        for scene in Scene::ALL {
            assert_eq!(
                scene.descriptor().date_controls_visible,
                scene == Scene::Explore
            );
        }
    }
}
