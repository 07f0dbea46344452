//! Annealing search configuration.

/// Configuration for the stochastic energy search.
///
/// # Examples
///
/// ```
/// use annealpath::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_max_iterations(1000)
///     .with_initial_temperature(25.0)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Hard step budget, counting rejected proposals.
    pub max_iterations: usize,

    /// Starting temperature. Higher values accept more worsening moves
    /// early on.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied once per iteration.
    pub cooling_rate: f64,

    /// Energy added per constraint violation. Must be large enough that
    /// any valid path strictly dominates any invalid one.
    pub constraint_penalty: f64,

    /// Consecutive non-improving iterations before early termination.
    pub stability_threshold: usize,

    /// Random seed for reproducibility (None for random).
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            initial_temperature: 10.0,
            cooling_rate: 0.98,
            constraint_penalty: 1000.0,
            stability_threshold: 50,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_constraint_penalty(mut self, penalty: f64) -> Self {
        self.constraint_penalty = penalty;
        self
    }

    pub fn with_stability_threshold(mut self, n: usize) -> Self {
        self.stability_threshold = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.constraint_penalty <= 0.0 {
            return Err("constraint_penalty must be positive".into());
        }
        if self.stability_threshold == 0 {
            return Err("stability_threshold must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealingConfig::default();
        assert_eq!(config.max_iterations, 500);
        assert!((config.initial_temperature - 10.0).abs() < 1e-12);
        assert!((config.cooling_rate - 0.98).abs() < 1e-12);
        assert!((config.constraint_penalty - 1000.0).abs() < 1e-12);
        assert_eq!(config.stability_threshold, 50);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        assert!(AnnealingConfig::default()
            .with_cooling_rate(1.0)
            .validate()
            .is_err());
        assert!(AnnealingConfig::default()
            .with_cooling_rate(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_temperature() {
        assert!(AnnealingConfig::default()
            .with_initial_temperature(-5.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_penalty() {
        assert!(AnnealingConfig::default()
            .with_constraint_penalty(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_stability() {
        assert!(AnnealingConfig::default()
            .with_stability_threshold(0)
            .validate()
            .is_err());
    }
}
