use std::fmt;

/// Environment variable overriding [`LoopConfig::ticks_per_second`].
pub const TPS_VAR: &str = "TICKWATCH_TPS";
/// Environment variable setting [`LoopConfig::max_ticks`].
pub const MAX_TICKS_VAR: &str = "TICKWATCH_MAX_TICKS";

/// Fixed-step loop configuration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoopConfig {
    /// Update steps per simulated second. Must be non-zero.
    pub ticks_per_second: u32,
    /// Hard cap on the number of ticks a run may take. `None` runs until the app exits.
    pub max_ticks: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            max_ticks: None,
        }
    }
}

impl LoopConfig {
    pub fn with_ticks_per_second(mut self, ticks_per_second: u32) -> Self {
        self.ticks_per_second = ticks_per_second;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Defaults overridden by `TICKWATCH_TPS` and `TICKWATCH_MAX_TICKS`.
    ///
    /// The result is validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(TPS_VAR) {
            config.ticks_per_second = parse_var(TPS_VAR, &value)?;
        }
        if let Some(value) = lookup(MAX_TICKS_VAR) {
            config.max_ticks = Some(parse_var(MAX_TICKS_VAR, &value)?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidVar {
        var,
        value: value.to_string(),
    })
}

/// Loop configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `ticks_per_second` was zero.
    ZeroTickRate,
    /// An environment override could not be parsed.
    InvalidVar { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTickRate => write!(f, "ticks per second must be greater than zero"),
            ConfigError::InvalidVar { var, value } => {
                write!(f, "invalid value for {var}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn default_is_sixty_uncapped() {
        let c = LoopConfig::default();
        assert_eq!(c.ticks_per_second, 60);
        assert_eq!(c.max_ticks, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_rate_is_rejected() {
        let c = LoopConfig::default().with_ticks_per_second(0);
        assert_eq!(c.validate(), Err(ConfigError::ZeroTickRate));
    }

    #[test]
    fn empty_env_gives_defaults() {
        let c = LoopConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(c, LoopConfig::default());
    }

    #[test]
    fn env_overrides() {
        let c = LoopConfig::from_lookup(lookup(&[(TPS_VAR, " 144 "), (MAX_TICKS_VAR, "500")]))
            .unwrap();
        assert_eq!(c.ticks_per_second, 144);
        assert_eq!(c.max_ticks, Some(500));
    }

    #[test]
    fn env_garbage_is_reported() {
        let err = LoopConfig::from_lookup(lookup(&[(TPS_VAR, "fast")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidVar { var: TPS_VAR, value: "fast".to_string() }
        );
        assert_eq!(err.to_string(), "invalid value for TICKWATCH_TPS: \"fast\"");
    }

    #[test]
    fn env_zero_rate_fails_validation() {
        let err = LoopConfig::from_lookup(lookup(&[(TPS_VAR, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTickRate);
    }
}
