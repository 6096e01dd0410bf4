use crate::{errors::ConfigError, types::ItemsetLength};

/// Thresholds carried through the lattice builder and the rule generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningConfig {
    min_support: f32,
    min_confidence: f32,
    max_len: Option<ItemsetLength>,
}

impl MiningConfig {
    pub fn new(min_support: f32, min_confidence: f32) -> Result<Self, ConfigError> {
        if !(min_support > 0.0 && min_support <= 1.0) {
            return Err(ConfigError::MinSupport(min_support));
        }
        if !(0.0..=1.0).contains(&min_confidence) {
            return Err(ConfigError::MinConfidence(min_confidence));
        }

        Ok(MiningConfig {
            min_support,
            min_confidence,
            max_len: None,
        })
    }

    /// Stop growing the lattice once itemsets reach `max_len` items.
    pub fn with_max_len(mut self, max_len: ItemsetLength) -> Result<Self, ConfigError> {
        if max_len == 0 {
            return Err(ConfigError::MaxLen);
        }
        self.max_len = Some(max_len);
        Ok(self)
    }

    pub fn min_support(&self) -> f32 {
        self.min_support
    }

    pub fn min_confidence(&self) -> f32 {
        self.min_confidence
    }

    pub fn max_len(&self) -> Option<ItemsetLength> {
        self.max_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_thresholds_in_range() {
        let config = MiningConfig::new(1.0, 0.0).unwrap();
        assert_eq!(config.min_support(), 1.0);
        assert_eq!(config.min_confidence(), 0.0);
        assert_eq!(config.max_len(), None);
    }

    #[test]
    fn rejects_zero_support() {
        assert_eq!(MiningConfig::new(0.0, 0.5), Err(ConfigError::MinSupport(0.0)));
    }

    #[test]
    fn rejects_support_above_one() {
        assert_eq!(MiningConfig::new(1.5, 0.5), Err(ConfigError::MinSupport(1.5)));
    }

    #[test]
    fn rejects_confidence_out_of_range() {
        assert_eq!(
            MiningConfig::new(0.5, -0.1),
            Err(ConfigError::MinConfidence(-0.1))
        );
        assert_eq!(
            MiningConfig::new(0.5, 1.01),
            Err(ConfigError::MinConfidence(1.01))
        );
    }

    #[test]
    fn rejects_nan() {
        assert!(MiningConfig::new(f32::NAN, 0.5).is_err());
        assert!(MiningConfig::new(0.5, f32::NAN).is_err());
    }

    #[test]
    fn max_len_must_be_positive() {
        let config = MiningConfig::new(0.5, 0.5).unwrap();
        assert_eq!(config.with_max_len(0), Err(ConfigError::MaxLen));
        assert_eq!(config.with_max_len(3).unwrap().max_len(), Some(3));
    }
}
