use serde::{Deserialize, Serialize};

pub const PERFORMANCE_MAX: u32 = 33;
pub const BEHAVIORAL_PINNED: u32 = 33;
pub const WEIGHT_TOTAL: u32 = 100;

pub const TIME_LIMIT_MIN: u32 = 5;
pub const TIME_LIMIT_MAX: u32 = 120;
pub const TIME_LIMIT_STEP: u32 = 5;
pub const TIME_LIMIT_DEFAULT: u32 = 30;

/// How behavioral and cultural-fit follow a performance change.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightStrategy {
    /// Behavioral is pinned to 33 and cultural-fit takes `100 - performance - 33`.
    #[default]
    Literal,
    /// Behavioral and cultural-fit share `100 - performance` in their previous proportion.
    DerivedRemainder,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeightState {
    pub performance: u32,
    pub behavioral: u32,
    pub cultural_fit: u32,
}

impl Default for WeightState {
    fn default() -> Self {
        Self {
            performance: 33,
            behavioral: BEHAVIORAL_PINNED,
            cultural_fit: 34,
        }
    }
}

impl WeightState {
    pub fn total(&self) -> u32 {
        self.performance + self.behavioral + self.cultural_fit
    }

    /// Sets performance (clamped to `0..=33`) and recomputes the other two.
    pub fn set_performance(&mut self, value: u32, strategy: WeightStrategy) {
        let performance = value.min(PERFORMANCE_MAX);
        let remainder = WEIGHT_TOTAL - performance;

        match strategy {
            WeightStrategy::Literal => {
                self.behavioral = BEHAVIORAL_PINNED;
                self.cultural_fit = remainder - BEHAVIORAL_PINNED;
            }
            WeightStrategy::DerivedRemainder => {
                let previous = self.behavioral + self.cultural_fit;
                let behavioral = if previous == 0 {
                    remainder / 2
                } else {
                    // Rounded share, integer only.
                    (remainder * self.behavioral + previous / 2) / previous
                };
                self.behavioral = behavioral.min(remainder);
                self.cultural_fit = remainder - self.behavioral;
            }
        }
        self.performance = performance;
    }
}

/// Assessment time limit, always a multiple of 5 between 5 and 120 minutes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TimeLimit(u32);

impl TimeLimit {
    /// Clamps to the valid range and snaps to the nearest step, rounding halves up.
    pub fn new(minutes: i64) -> Self {
        let clamped = minutes.clamp(TIME_LIMIT_MIN as i64, TIME_LIMIT_MAX as i64) as u32;
        let step = TIME_LIMIT_STEP;
        let snapped = ((clamped + step / 2) / step) * step;
        TimeLimit(snapped.clamp(TIME_LIMIT_MIN, TIME_LIMIT_MAX))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl Default for TimeLimit {
    fn default() -> Self {
        TimeLimit(TIME_LIMIT_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_sum_to_total() {
        let weights = WeightState::default();
        assert_eq!(weights.total(), WEIGHT_TOTAL);
        assert_eq!(TimeLimit::default().minutes(), 30);
    }

    #[test]
    fn test_literal_pins_behavioral() {
        let mut weights = WeightState::default();
        weights.set_performance(10, WeightStrategy::Literal);
        assert_eq!(weights.performance, 10);
        assert_eq!(weights.behavioral, 33);
        assert_eq!(weights.cultural_fit, 57);

        weights.set_performance(0, WeightStrategy::Literal);
        assert_eq!(weights.cultural_fit, 67);
        assert_eq!(weights.total(), WEIGHT_TOTAL);
    }

    #[test]
    fn test_performance_clamps_above_max() {
        let mut weights = WeightState::default();
        weights.set_performance(80, WeightStrategy::Literal);
        assert_eq!(weights.performance, 33);
        assert_eq!(weights.behavioral, 33);
        assert_eq!(weights.cultural_fit, 34);
    }

    #[test]
    fn test_derived_remainder_keeps_proportion() {
        let mut weights = WeightState {
            performance: 20,
            behavioral: 40,
            cultural_fit: 40,
        };
        weights.set_performance(0, WeightStrategy::DerivedRemainder);
        assert_eq!(weights.performance, 0);
        assert_eq!(weights.behavioral, 50);
        assert_eq!(weights.cultural_fit, 50);

        let mut skewed = WeightState {
            performance: 10,
            behavioral: 0,
            cultural_fit: 90,
        };
        skewed.set_performance(30, WeightStrategy::DerivedRemainder);
        assert_eq!(skewed.behavioral, 0);
        assert_eq!(skewed.cultural_fit, 70);
    }

    #[test]
    fn test_derived_remainder_splits_evenly_from_zero() {
        let mut weights = WeightState {
            performance: 100,
            behavioral: 0,
            cultural_fit: 0,
        };
        weights.set_performance(33, WeightStrategy::DerivedRemainder);
        assert_eq!(weights.behavioral, 33);
        assert_eq!(weights.cultural_fit, 34);
        assert_eq!(weights.total(), WEIGHT_TOTAL);
    }

    #[test]
    fn test_time_limit_clamps_and_snaps() {
        assert_eq!(TimeLimit::new(-20).minutes(), 5);
        assert_eq!(TimeLimit::new(0).minutes(), 5);
        assert_eq!(TimeLimit::new(7).minutes(), 5);
        assert_eq!(TimeLimit::new(8).minutes(), 10);
        assert_eq!(TimeLimit::new(45).minutes(), 45);
        assert_eq!(TimeLimit::new(118).minutes(), 120);
        assert_eq!(TimeLimit::new(10_000).minutes(), 120);
    }
}
