//! Coordinate to intensity level mapping.

use crate::model::emotion::Emotion;

/// Five-step intensity scale shown next to each history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntensityLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl IntensityLevel {
    /// Stable key used by the translation lookup.
    pub fn key(self) -> &'static str {
        match self {
            Self::VeryLow => "very_low",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }

    fn from_ascending(step: u8) -> Self {
        match step {
            0 => Self::VeryLow,
            1 => Self::Low,
            2 => Self::Moderate,
            3 => Self::High,
            _ => Self::VeryHigh,
        }
    }
}

/// Energy runs top-down: row 0 is the most energetic.
pub fn energy_level(emotion: &Emotion) -> IntensityLevel {
    IntensityLevel::from_ascending(4u8.saturating_sub(emotion.y))
}

pub fn pleasure_level(emotion: &Emotion) -> IntensityLevel {
    IntensityLevel::from_ascending(emotion.x)
}

#[cfg(test)]
mod tests {
    use super::{energy_level, pleasure_level, IntensityLevel};
    use crate::model::emotion::Emotion;

    #[test]
    fn top_left_cell_is_high_energy_low_pleasure() {
        let cell = Emotion::new(0, 0, "Stressed", "#e11d48");
        assert_eq!(energy_level(&cell), IntensityLevel::VeryHigh);
        assert_eq!(pleasure_level(&cell), IntensityLevel::VeryLow);
    }

    #[test]
    fn center_cell_is_moderate_on_both_axes() {
        let cell = Emotion::new(2, 2, "Neutral", "#6b7280");
        assert_eq!(energy_level(&cell).key(), "moderate");
        assert_eq!(pleasure_level(&cell).key(), "moderate");
    }

    #[test]
    fn bottom_right_cell_is_low_energy_high_pleasure() {
        let cell = Emotion::new(4, 4, "Serene", "#4338ca");
        assert_eq!(energy_level(&cell), IntensityLevel::VeryLow);
        assert_eq!(pleasure_level(&cell), IntensityLevel::VeryHigh);
    }
}
