use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::puzzle::MIN_CANDIDATES;
use crate::error::AppError;

pub const DEFAULT_CANDIDATE_COUNT: usize = 6;
pub const DEFAULT_INITIAL_SECONDS: u32 = 10;
pub const DEFAULT_TICK_MS: u64 = 1000;

pub const ENV_CANDIDATE_COUNT: &str = "SUMTAP_CANDIDATE_COUNT";
pub const ENV_INITIAL_SECONDS: &str = "SUMTAP_INITIAL_SECONDS";
pub const ENV_TICK_MS: &str = "SUMTAP_TICK_MS";
pub const ENV_SEED: &str = "SUMTAP_SEED";

/// Per-session settings, applied at the start of every round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of tiles generated per round (>= 3).
    pub candidate_count: usize,
    /// Countdown length in seconds (> 0).
    pub initial_seconds: u32,
    /// Real-time period between clock ticks.
    pub tick_interval: Duration,
    /// Optional session seed; when set every round is reproducible.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            candidate_count: DEFAULT_CANDIDATE_COUNT,
            initial_seconds: DEFAULT_INITIAL_SECONDS,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            seed: None,
        }
    }
}

/// Values that take precedence over the environment (CLI flags).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub candidate_count: Option<usize>,
    pub initial_seconds: Option<u32>,
    pub tick_ms: Option<u64>,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Builds configuration from `SUMTAP_*` environment variables, falling
    /// back to defaults for unset ones.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let candidate_count =
            parse_var(&lookup, ENV_CANDIDATE_COUNT)?.unwrap_or(defaults.candidate_count);
        let initial_seconds =
            parse_var(&lookup, ENV_INITIAL_SECONDS)?.unwrap_or(defaults.initial_seconds);
        let tick_interval = parse_var::<u64, _>(&lookup, ENV_TICK_MS)?
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);
        let seed = parse_var(&lookup, ENV_SEED)?;

        let config = Self {
            candidate_count,
            initial_seconds,
            tick_interval,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides and re-validate.
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Result<Self, AppError> {
        let config = Self {
            candidate_count: overrides.candidate_count.unwrap_or(self.candidate_count),
            initial_seconds: overrides.initial_seconds.unwrap_or(self.initial_seconds),
            tick_interval: overrides
                .tick_ms
                .map(Duration::from_millis)
                .unwrap_or(self.tick_interval),
            seed: overrides.seed.or(self.seed),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.candidate_count < MIN_CANDIDATES {
            return Err(AppError::config(format!(
                "candidate_count must be >= {MIN_CANDIDATES}, got {}",
                self.candidate_count
            )));
        }
        if self.initial_seconds == 0 {
            return Err(AppError::config("initial_seconds must be positive"));
        }
        if self.tick_interval.is_zero() {
            return Err(AppError::config("tick interval must be positive"));
        }
        Ok(())
    }
}

/// Parse an optional variable; present-but-invalid is an error.
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{key} has invalid value '{raw}'"))),
    }
}
