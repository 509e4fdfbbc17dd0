use crate::error::RippleError;

/// Closed interval of real bounds, shared by epicenter sampling and the
/// sample grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    fn validate(&self) -> Result<(), RippleError> {
        if !self.lo.is_finite() || !self.hi.is_finite() {
            return Err(RippleError::InvalidArgument(format!(
                "domain bounds must be finite, got [{}, {}]",
                self.lo, self.hi
            )));
        }
        if self.lo > self.hi {
            return Err(RippleError::InvalidArgument(format!(
                "domain lower bound {} exceeds upper bound {}",
                self.lo, self.hi
            )));
        }
        Ok(())
    }
}

/// Grid resolution and spatial extent of the sampled field.
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    pub width: usize,
    pub height: usize,
    pub domain: Interval,
}

impl GridSpec {
    /// Reject ill-formed resolution or bounds before any evaluation.
    pub fn validate(&self) -> Result<(), RippleError> {
        if self.width == 0 || self.height == 0 {
            return Err(RippleError::InvalidArgument(format!(
                "grid resolution must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        self.domain.validate()
    }
}

/// Shape parameters shared by every wave in the default configuration.
#[derive(Debug, Clone, Copy)]
pub struct RippleParams {
    pub amplitude: f64,
    pub wavenumber: f64,
    pub decay_rate: f64,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            amplitude: 0.005,
            wavenumber: 100.0,
            decay_rate: 10.0,
        }
    }
}

/// Full configuration surface for one generation run.
#[derive(Debug, Clone)]
pub struct RippleConfig {
    /// Number of grid points along the x axis
    pub width_pixels: usize,
    /// Number of grid points along the y axis
    pub height_pixels: usize,
    /// Number of superposed ripple waves
    pub num_waves: usize,
    /// Bounds for both epicenter placement and grid coordinates
    pub domain: Interval,
    /// Shape parameters applied to every sampled wave
    pub params: RippleParams,
    /// Seed for epicenter placement; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            width_pixels: 1000,
            height_pixels: 1000,
            num_waves: 15,
            domain: Interval::new(-1.0, 1.0),
            params: RippleParams::default(),
            seed: None,
        }
    }
}

impl RippleConfig {
    pub fn grid(&self) -> GridSpec {
        GridSpec {
            width: self.width_pixels,
            height: self.height_pixels,
            domain: self.domain,
        }
    }

    pub fn validate(&self) -> Result<(), RippleError> {
        self.grid().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = RippleConfig::default();
        assert_eq!(config.width_pixels, 1000);
        assert_eq!(config.height_pixels, 1000);
        assert_eq!(config.num_waves, 15);
        assert_eq!(config.domain, Interval::new(-1.0, 1.0));
        assert_eq!(config.params.amplitude, 0.005);
        assert_eq!(config.params.wavenumber, 100.0);
        assert_eq!(config.params.decay_rate, 10.0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn zero_resolution_fails_validation() {
        let config = RippleConfig {
            width_pixels: 0,
            ..RippleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RippleError::InvalidArgument(_))
        ));
    }

    #[test]
    fn inverted_bounds_fail_validation() {
        let config = RippleConfig {
            domain: Interval::new(1.0, -1.0),
            ..RippleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RippleError::InvalidArgument(_))
        ));
    }

    #[test]
    fn non_finite_bounds_fail_validation() {
        let config = RippleConfig {
            domain: Interval::new(f64::NAN, 1.0),
            ..RippleConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn collapsed_bounds_pass_validation() {
        let config = RippleConfig {
            domain: Interval::new(0.5, 0.5),
            ..RippleConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
