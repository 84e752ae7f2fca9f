//! Location filtering and viewport visibility.
//!
//! Everything here is a pure function of `(dataset, criteria, bounds)`.
//! The UI owns the criteria and the viewport and recomputes on every change.

use gpm_core::location::Location;

/// Gallery contents: the filtered records currently on screen, editor's
/// choice first.
pub fn gallery_locations(filtered: &[Location], visible: &viewport::VisibleSet) -> Vec<Location> {
    let mut on_screen = visible.select(filtered);
    ordering::sort_editors_choice_first(&mut on_screen);
    on_screen
}

/// User-selected filter criteria and the predicate pipeline.
pub mod filter {
    use gpm_core::difficulty::Difficulty;
    use gpm_core::i18n::{difficulty_label, Language};
    use gpm_core::location::{Location, GRAUBUNDEN, SWITZERLAND};
    use serde::{Deserialize, Serialize};

    /// Lower end of the height slider in meters
    pub const HEIGHT_MIN: f64 = 100.0;
    /// Upper end of the height slider in meters
    pub const HEIGHT_MAX: f64 = 4000.0;
    /// Height slider step in meters
    pub const HEIGHT_STEP: f64 = 50.0;
    /// Smallest allowed span between the two height handles
    pub const HEIGHT_MIN_SPAN: f64 = 200.0;

    /// Inclusive range of difficulty indices.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DifficultyRange {
        pub min: usize,
        pub max: usize,
    }

    impl Default for DifficultyRange {
        fn default() -> Self {
            Self {
                min: 0,
                max: Difficulty::MAX_INDEX,
            }
        }
    }

    impl DifficultyRange {
        /// Build a range from slider positions, clamped to the known levels.
        /// Inverted bounds are swapped.
        pub fn new(min: usize, max: usize) -> Self {
            let (min, max) = if min <= max { (min, max) } else { (max, min) };
            Self {
                min: min.min(Difficulty::MAX_INDEX),
                max: max.min(Difficulty::MAX_INDEX),
            }
        }

        pub fn set(&mut self, min: usize, max: usize) {
            *self = DifficultyRange::new(min, max);
        }

        pub fn contains_index(&self, index: usize) -> bool {
            index >= self.min && index <= self.max
        }

        /// Localized labels for the two handle positions.
        pub fn labels(&self, language: Language) -> (&'static str, &'static str) {
            let label = |index: usize| {
                Difficulty::from_index(index)
                    .map(|d| difficulty_label(d, language))
                    .unwrap_or("?")
            };
            (label(self.min), label(self.max))
        }
    }

    /// Inclusive height range in meters.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct HeightRange {
        pub min: f64,
        pub max: f64,
    }

    impl Default for HeightRange {
        fn default() -> Self {
            Self {
                min: HEIGHT_MIN,
                max: HEIGHT_MAX,
            }
        }
    }

    impl HeightRange {
        pub fn new(min: f64, max: f64) -> Self {
            Self { min, max }
        }

        pub fn contains(&self, height: f64) -> bool {
            height >= self.min && height <= self.max
        }

        /// Move the lower handle.
        ///
        /// The value snaps to the slider step and stays inside the slider
        /// domain. It stops `HEIGHT_MIN_SPAN` below the upper handle.
        pub fn set_min(&mut self, value: f64) {
            let limit = self.max - HEIGHT_MIN_SPAN;
            let min = snap_height(value);
            if min > limit {
                log::debug!("Height minimum {} held at {}", min, limit);
            }
            self.min = min.min(limit);
        }

        /// Move the upper handle; it stops `HEIGHT_MIN_SPAN` above the lower one.
        pub fn set_max(&mut self, value: f64) {
            let limit = self.min + HEIGHT_MIN_SPAN;
            let max = snap_height(value);
            if max < limit {
                log::debug!("Height maximum {} held at {}", max, limit);
            }
            self.max = max.max(limit);
        }
    }

    fn snap_height(value: f64) -> f64 {
        let steps = ((value - HEIGHT_MIN) / HEIGHT_STEP).round();
        (HEIGHT_MIN + steps * HEIGHT_STEP).clamp(HEIGHT_MIN, HEIGHT_MAX)
    }

    /// Filter state owned by the UI.
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct FilterCriteria {
        pub editors_choice_only: bool,
        pub switzerland_only: bool,
        pub graubunden_only: bool,
        pub difficulty_range: DifficultyRange,
        pub height_range: HeightRange,
    }

    impl FilterCriteria {
        /// True when nothing differs from the defaults.
        pub fn is_default(&self) -> bool {
            *self == FilterCriteria::default()
        }

        pub fn reset(&mut self) {
            *self = FilterCriteria::default();
        }

        /// Whether a single record passes every active predicate.
        ///
        /// Records with no height (absent or 0), or with a missing or
        /// unrecognized difficulty, are never excluded by the corresponding
        /// range.
        pub fn matches(&self, location: &Location) -> bool {
            if self.editors_choice_only && !location.is_recommended() {
                return false;
            }
            if self.switzerland_only && location.country != SWITZERLAND {
                return false;
            }
            if self.graubunden_only && location.province != GRAUBUNDEN {
                return false;
            }
            if let Some(level) = location.difficulty_level() {
                if !self.difficulty_range.contains_index(level.index()) {
                    return false;
                }
            }
            if let Some(height) = location.height.filter(|h| *h != 0.0) {
                if !self.height_range.contains(height) {
                    return false;
                }
            }
            true
        }
    }

    /// Records passing `criteria`, in dataset order.
    pub fn filter_locations(all: &[Location], criteria: &FilterCriteria) -> Vec<Location> {
        all.iter()
            .filter(|location| criteria.matches(location))
            .cloned()
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::test_support::location;

        fn scenario() -> Vec<Location> {
            vec![
                location("A", Some(true), "Switzerland", "Graubünden", Some(500.0), Some("hiking")),
                location("B", Some(false), "Italy", "Lombardia", Some(2000.0), Some("alpine_hiking")),
                location(
                    "C",
                    Some(true),
                    "Switzerland",
                    "Graubünden",
                    Some(4500.0),
                    Some("difficult_alpine_hiking"),
                ),
            ]
        }

        fn names(locations: &[Location]) -> Vec<&str> {
            locations.iter().map(|l| l.filename.as_str()).collect()
        }

        #[test]
        fn test_default_criteria_scenario() {
            let result = filter_locations(&scenario(), &FilterCriteria::default());
            assert_eq!(names(&result), vec!["A", "B"]);
        }

        #[test]
        fn test_switzerland_only_scenario() {
            let criteria = FilterCriteria {
                switzerland_only: true,
                ..Default::default()
            };
            let result = filter_locations(&scenario(), &criteria);
            assert_eq!(names(&result), vec!["A"]);
        }

        #[test]
        fn test_editors_choice_requires_explicit_true() {
            let mut all = scenario();
            all.push(location("D", None, "Switzerland", "Graubünden", None, None));
            let criteria = FilterCriteria {
                editors_choice_only: true,
                ..Default::default()
            };
            let result = filter_locations(&all, &criteria);
            assert_eq!(names(&result), vec!["A"]);
        }

        #[test]
        fn test_graubunden_only() {
            let all = vec![
                location("A", None, "Switzerland", "Graubünden", None, None),
                location("B", None, "Switzerland", "Ticino", None, None),
                location("C", None, "Switzerland", "Graubunden", None, None),
            ];
            let criteria = FilterCriteria {
                graubunden_only: true,
                ..Default::default()
            };
            assert_eq!(names(&filter_locations(&all, &criteria)), vec!["A"]);
        }

        #[test]
        fn test_difficulty_range_inclusive() {
            let all: Vec<Location> = Difficulty::ALL
                .iter()
                .map(|d| location(d.key(), None, "Switzerland", "Graubünden", None, Some(d.key())))
                .collect();
            let criteria = FilterCriteria {
                difficulty_range: DifficultyRange::new(1, 3),
                ..Default::default()
            };
            let result = filter_locations(&all, &criteria);
            assert_eq!(
                names(&result),
                vec!["mountain_hiking", "demanding_mountain_hiking", "alpine_hiking"]
            );
        }

        #[test]
        fn test_unknown_or_absent_difficulty_always_passes() {
            let all = vec![
                location("none", None, "Italy", "Veneto", None, None),
                location("ferrata", None, "Italy", "Veneto", None, Some("via_ferrata")),
                location("empty", None, "Italy", "Veneto", None, Some("")),
            ];
            for min in 0..=Difficulty::MAX_INDEX {
                for max in min..=Difficulty::MAX_INDEX {
                    let criteria = FilterCriteria {
                        difficulty_range: DifficultyRange { min, max },
                        ..Default::default()
                    };
                    assert_eq!(filter_locations(&all, &criteria).len(), 3);
                }
            }
            // Even an empty range lets unknown data through.
            let criteria = FilterCriteria {
                difficulty_range: DifficultyRange { min: 3, max: 1 },
                ..Default::default()
            };
            assert_eq!(filter_locations(&all, &criteria).len(), 3);
        }

        #[test]
        fn test_absent_height_always_passes() {
            let all = vec![location("X", None, "Austria", "Tirol", None, None)];
            for (min, max) in [(100.0, 4000.0), (3000.0, 3200.0), (5000.0, 100.0)] {
                let criteria = FilterCriteria {
                    height_range: HeightRange::new(min, max),
                    ..Default::default()
                };
                assert_eq!(filter_locations(&all, &criteria).len(), 1);
            }
        }

        #[test]
        fn test_height_range_inclusive_edges() {
            let all = vec![
                location("low", None, "Switzerland", "Graubünden", Some(100.0), None),
                location("high", None, "Switzerland", "Graubünden", Some(4000.0), None),
                location("below", None, "Switzerland", "Graubünden", Some(99.9), None),
                location("sea", None, "Switzerland", "Graubünden", Some(0.0), None),
            ];
            let result = filter_locations(&all, &FilterCriteria::default());
            assert_eq!(names(&result), vec!["low", "high", "sea"]);
        }

        #[test]
        fn test_zero_height_is_unknown_height() {
            let json = r#"[{"filename":"lake.jpg","coordinates":[46.0,9.0],"height":0}]"#;
            let all = Location::parse_locations_json(json).unwrap();
            for (min, max) in [(100.0, 4000.0), (2000.0, 2500.0)] {
                let criteria = FilterCriteria {
                    height_range: HeightRange::new(min, max),
                    ..Default::default()
                };
                assert_eq!(filter_locations(&all, &criteria).len(), 1);
            }
        }

        #[test]
        fn test_filter_is_idempotent() {
            let mut all = scenario();
            all.push(location("D", None, "Switzerland", "Ticino", Some(1200.0), Some("mountain_hiking")));
            all.push(location("E", Some(true), "Austria", "Tirol", None, Some("unknown")));
            let criteria_list = [
                FilterCriteria::default(),
                FilterCriteria {
                    editors_choice_only: true,
                    ..Default::default()
                },
                FilterCriteria {
                    switzerland_only: true,
                    graubunden_only: true,
                    difficulty_range: DifficultyRange::new(0, 2),
                    height_range: HeightRange::new(400.0, 1500.0),
                    ..Default::default()
                },
            ];
            for criteria in criteria_list {
                let once = filter_locations(&all, &criteria);
                let twice = filter_locations(&once, &criteria);
                assert_eq!(once, twice);
            }
        }

        #[test]
        fn test_empty_dataset() {
            assert!(filter_locations(&[], &FilterCriteria::default()).is_empty());
        }

        #[test]
        fn test_is_default_and_reset() {
            let mut criteria = FilterCriteria::default();
            assert!(criteria.is_default());
            criteria.graubunden_only = true;
            criteria.height_range.set_min(500.0);
            criteria.height_range.set_max(3000.0);
            assert!(!criteria.is_default());
            criteria.reset();
            assert!(criteria.is_default());
        }

        #[test]
        fn test_height_slider_rules() {
            let mut range = HeightRange::default();
            range.set_min(1020.0);
            range.set_max(2980.0);
            assert_eq!(range, HeightRange::new(1000.0, 3000.0));

            // A handle dragged past the other stops 200 m short of it.
            range.set_max(1150.0);
            assert_eq!(range, HeightRange::new(1000.0, 1200.0));
            range.set_min(3900.0);
            assert_eq!(range, HeightRange::new(1000.0, 1200.0));
            range.set_min(1100.0);
            assert_eq!(range, HeightRange::new(1000.0, 1200.0));

            range.set_min(-500.0);
            range.set_max(9000.0);
            assert_eq!(range, HeightRange::default());
        }

        #[test]
        fn test_difficulty_range_clamps_and_labels() {
            let range = DifficultyRange::new(7, 2);
            assert_eq!(range, DifficultyRange { min: 2, max: 4 });
            assert_eq!(
                DifficultyRange::default().labels(Language::En),
                ("Hiking", "Difficult alpine hiking")
            );
        }
    }
}

/// Viewport containment and visible-set tracking.
pub mod viewport {
    use gpm_core::bounds::GeoBounds;
    use gpm_core::i18n::{Language, VISIBLE_LOCATIONS};
    use gpm_core::location::Location;
    use std::collections::BTreeSet;

    /// Records of `filtered` whose coordinates lie inside `bounds`.
    ///
    /// A full scan on every call; datasets are small.
    pub fn visible_within_bounds(filtered: &[Location], bounds: &GeoBounds) -> Vec<Location> {
        filtered
            .iter()
            .filter(|location| bounds.contains(location.lat(), location.lng()))
            .cloned()
            .collect()
    }

    /// Filenames of the records currently on screen.
    ///
    /// Lets the UI skip notifications when a pan leaves the visible set
    /// unchanged.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct VisibleSet {
        ids: BTreeSet<String>,
    }

    impl VisibleSet {
        /// Scan `filtered` against `bounds` and collect the visible ids.
        pub fn compute(filtered: &[Location], bounds: &GeoBounds) -> Self {
            Self {
                ids: filtered
                    .iter()
                    .filter(|l| bounds.contains(l.lat(), l.lng()))
                    .map(|l| l.filename.clone())
                    .collect(),
            }
        }

        pub fn contains(&self, filename: &str) -> bool {
            self.ids.contains(filename)
        }

        pub fn len(&self) -> usize {
            self.ids.len()
        }

        pub fn is_empty(&self) -> bool {
            self.ids.is_empty()
        }

        /// Records of `filtered` in this set, preserving `filtered` order.
        pub fn select(&self, filtered: &[Location]) -> Vec<Location> {
            filtered
                .iter()
                .filter(|l| self.contains(&l.filename))
                .cloned()
                .collect()
        }
    }

    /// Sidebar heading, e.g. "12 beautiful locations in this area".
    pub fn visible_count_label(count: usize, language: Language) -> String {
        format!("{} {}", count, VISIBLE_LOCATIONS.get(language))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::test_support::location_at;

        fn grid() -> Vec<Location> {
            vec![
                location_at("chur", 46.8499, 9.5331),
                location_at("st-moritz", 46.4908, 9.8355),
                location_at("zurich", 47.3769, 8.5417),
                location_at("edge", 46.0, 10.0),
                location_at("bormio", 46.4669, 10.3703),
            ]
        }

        fn names(locations: &[Location]) -> Vec<&str> {
            locations.iter().map(|l| l.filename.as_str()).collect()
        }

        #[test]
        fn test_visible_within_bounds_exact_containment() {
            let bounds = GeoBounds::new(46.0, 9.0, 47.0, 10.0);
            let all = grid();
            let visible = visible_within_bounds(&all, &bounds);
            assert_eq!(names(&visible), vec!["chur", "st-moritz", "edge"]);
            for l in &all {
                let expected = l.lat() >= 46.0 && l.lat() <= 47.0 && l.lng() >= 9.0 && l.lng() <= 10.0;
                assert_eq!(visible.contains(l), expected);
            }
        }

        #[test]
        fn test_visible_across_antimeridian() {
            let all = vec![
                location_at("fiji", -17.7, 178.0),
                location_at("samoa", -13.8, -172.1),
                location_at("chur", 46.8499, 9.5331),
            ];
            let bounds = GeoBounds::new(-20.0, 170.0, -10.0, -170.0);
            assert_eq!(names(&visible_within_bounds(&all, &bounds)), vec!["fiji", "samoa"]);
        }

        #[test]
        fn test_empty_inputs() {
            let bounds = GeoBounds::new(46.0, 9.0, 47.0, 10.0);
            assert!(visible_within_bounds(&[], &bounds).is_empty());
            assert!(VisibleSet::compute(&[], &bounds).is_empty());
        }

        #[test]
        fn test_visible_set_matches_direct_scan() {
            let bounds = GeoBounds::new(46.4, 9.5, 46.9, 10.5);
            let all = grid();
            let set = VisibleSet::compute(&all, &bounds);
            assert_eq!(set.len(), 3);
            assert!(set.contains("bormio"));
            assert!(!set.contains("zurich"));
            assert_eq!(set.select(&all), visible_within_bounds(&all, &bounds));
            assert_eq!(VisibleSet::compute(&set.select(&all), &bounds), set);
        }

        #[test]
        fn test_visible_count_label() {
            assert_eq!(
                visible_count_label(12, Language::En),
                "12 beautiful locations in this area"
            );
            assert_eq!(
                visible_count_label(0, Language::It),
                "0 belle località in questa zona"
            );
        }
    }
}

/// Display ordering for the gallery grid.
pub mod ordering {
    use gpm_core::location::Location;

    /// Stable sort placing editor's choice records first.
    ///
    /// Records with equal `recommended` status keep their relative order.
    pub fn sort_editors_choice_first(locations: &mut [Location]) {
        locations.sort_by_key(|l| !l.is_recommended());
    }

    /// Sorted copy of `locations`.
    pub fn editors_choice_first(locations: &[Location]) -> Vec<Location> {
        let mut sorted = locations.to_vec();
        sort_editors_choice_first(&mut sorted);
        sorted
    }

}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_locations, FilterCriteria};
    use crate::viewport::VisibleSet;
    use gpm_core::bounds::GeoBounds;
    use crate::test_support::{location, location_at};

    #[test]
    fn test_gallery_locations_pipeline() {
        let mut far = location("far", Some(true), "Switzerland", "Graubünden", Some(900.0), None);
        far.coordinates = [47.5, 7.6];
        let mut tall = location_at("tall", 46.5, 9.5);
        tall.height = Some(4200.0);
        let mut pick = location_at("pick", 46.7, 9.7);
        pick.recommended = Some(true);
        let plain = location_at("plain", 46.6, 9.6);

        let all = vec![plain, far, tall, pick];
        let bounds = GeoBounds::new(46.0, 9.0, 47.0, 10.0);
        let filtered = filter_locations(&all, &FilterCriteria::default());
        let visible = VisibleSet::compute(&filtered, &bounds);
        let result = gallery_locations(&filtered, &visible);
        let names: Vec<&str> = result.iter().map(|l| l.filename.as_str()).collect();
        assert_eq!(names, vec!["pick", "plain"]);
    }

    #[test]
    fn test_gallery_locations_empty_dataset() {
        let bounds = GeoBounds::new(46.0, 9.0, 47.0, 10.0);
        let visible = VisibleSet::compute(&[], &bounds);
        assert!(gallery_locations(&[], &visible).is_empty());
        let chur = vec![location_at("chur", 46.85, 9.53)];
        assert!(gallery_locations(&chur, &VisibleSet::default()).is_empty());
    }
}
