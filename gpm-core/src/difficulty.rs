use serde::{Deserialize, Serialize};
use std::fmt;

/// Hiking difficulty, in increasing order.
///
/// The discriminant is the position used by the difficulty range filter.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Hiking = 0,
    MountainHiking = 1,
    DemandingMountainHiking = 2,
    AlpineHiking = 3,
    DifficultAlpineHiking = 4,
}

impl Difficulty {
    /// All levels in order.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Hiking,
        Difficulty::MountainHiking,
        Difficulty::DemandingMountainHiking,
        Difficulty::AlpineHiking,
        Difficulty::DifficultAlpineHiking,
    ];

    /// Highest valid index.
    pub const MAX_INDEX: usize = Difficulty::ALL.len() - 1;

    /// Look up a dataset key. Unrecognized keys return `None`.
    pub fn from_key(key: &str) -> Option<Difficulty> {
        Difficulty::ALL.iter().copied().find(|d| d.key() == key)
    }

    pub fn from_index(index: usize) -> Option<Difficulty> {
        Difficulty::ALL.get(index).copied()
    }

    /// Key as it appears in `locations.json`.
    pub fn key(&self) -> &'static str {
        match self {
            Difficulty::Hiking => "hiking",
            Difficulty::MountainHiking => "mountain_hiking",
            Difficulty::DemandingMountainHiking => "demanding_mountain_hiking",
            Difficulty::AlpineHiking => "alpine_hiking",
            Difficulty::DifficultAlpineHiking => "difficult_alpine_hiking",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::Difficulty;

    #[test]
    fn test_key_round_trip_and_order() {
        for (i, level) in Difficulty::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
            assert_eq!(Difficulty::from_key(level.key()), Some(*level));
            assert_eq!(Difficulty::from_index(i), Some(*level));
        }
        assert!(Difficulty::Hiking < Difficulty::DifficultAlpineHiking);
        assert_eq!(Difficulty::MAX_INDEX, 4);
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(Difficulty::from_key("via_ferrata"), None);
        assert_eq!(Difficulty::from_key("Hiking"), None);
        assert_eq!(Difficulty::from_key(""), None);
        assert_eq!(Difficulty::from_index(5), None);
    }

    #[test]
    fn test_serde_uses_dataset_keys() {
        let json = serde_json::to_string(&Difficulty::DemandingMountainHiking).unwrap();
        assert_eq!(json, "\"demanding_mountain_hiking\"");
    }
}
