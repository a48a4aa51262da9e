//! Round configuration.
//!
//! Hosts configure scoring, hold durations, tick cadence and the shuffle
//! seed up front. The engine reads these values but never schedules
//! anything itself; the durations tell the host how long to wait.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{ConfigurationError, Result};

/// Round configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Points awarded for each matched pair (default: 20).
    /// Mismatches never cost points.
    pub match_bonus: u32,

    /// How long a matched pair stays face-up before the selection clears.
    pub match_hold: Duration,

    /// How long a mismatched pair stays face-up before flipping back.
    /// Longer than `match_hold` so the player can read both cards.
    pub mismatch_hold: Duration,

    /// Cadence at which the host calls `advance()`.
    pub tick_period: Duration,

    /// Delay between completion and handing the summary to the results view.
    pub results_delay: Duration,

    /// Seed for the deck shuffle stream.
    /// Same seed produces the same sequence of decks.
    pub seed: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            match_bonus: 20,
            match_hold: Duration::from_millis(300),
            mismatch_hold: Duration::from_millis(900),
            tick_period: Duration::from_secs(1),
            results_delay: Duration::from_millis(900),
            seed: 42,
        }
    }
}

impl RoundConfig {
    /// Set a custom match bonus.
    #[must_use]
    pub fn with_match_bonus(mut self, bonus: u32) -> Self {
        self.match_bonus = bonus;
        self
    }

    /// Set custom hold durations for matches and mismatches.
    #[must_use]
    pub fn with_holds(mut self, match_hold: Duration, mismatch_hold: Duration) -> Self {
        self.match_hold = match_hold;
        self.mismatch_hold = mismatch_hold;
        self
    }

    /// Set a custom tick period.
    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// Set a custom results delay.
    #[must_use]
    pub fn with_results_delay(mut self, delay: Duration) -> Self {
        self.results_delay = delay;
        self
    }

    /// Set a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.tick_period.is_zero() {
            return Err(ConfigurationError::ZeroTickPeriod);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoundConfig::default();
        assert_eq!(config.match_bonus, 20);
        assert_eq!(config.match_hold, Duration::from_millis(300));
        assert_eq!(config.mismatch_hold, Duration::from_millis(900));
        assert_eq!(config.tick_period, Duration::from_secs(1));
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RoundConfig::default()
            .with_match_bonus(50)
            .with_seed(123)
            .with_holds(Duration::ZERO, Duration::from_millis(10));

        assert_eq!(config.match_bonus, 50);
        assert_eq!(config.seed, 123);
        assert_eq!(config.match_hold, Duration::ZERO);
        assert_eq!(config.mismatch_hold, Duration::from_millis(10));
    }

    #[test]
    fn test_zero_tick_period_rejected() {
        let config = RoundConfig::default().with_tick_period(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigurationError::ZeroTickPeriod));
    }

    #[test]
    fn test_serialization() {
        let config = RoundConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RoundConfig = serde_json::from_str(r#"{"match_bonus": 5}"#).unwrap();
        assert_eq!(config.match_bonus, 5);
        assert_eq!(config.seed, 42);
    }
}
