//! Caller-facing creativity knob, mapped onto sampling temperature.

use derive_more::Display;

/// Sampling temperature resolved from the caller's `freakyness`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display)]
pub struct Freakyness(f64);

impl Freakyness {
    /// Used when the caller leaves `freakyness` out.
    pub const DEFAULT: f64 = 0.5;
    /// Lowest temperature the provider accepts.
    pub const MIN: f64 = 0.0;
    /// Highest temperature the provider accepts.
    pub const MAX: f64 = 2.0;

    /// Resolve an optional caller value, clamping into `[MIN, MAX]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrapwright_core::Freakyness;
    ///
    /// assert_eq!(Freakyness::resolve(None).value(), 0.5);
    /// assert_eq!(Freakyness::resolve(Some(0.9)).value(), 0.9);
    /// assert_eq!(Freakyness::resolve(Some(7.0)).value(), 2.0);
    /// ```
    pub fn resolve(requested: Option<f64>) -> Self {
        match requested {
            None => Self(Self::DEFAULT),
            Some(value) if value.is_nan() => Self(Self::DEFAULT),
            Some(value) => {
                let clamped = value.clamp(Self::MIN, Self::MAX);
                if clamped != value {
                    tracing::debug!(requested = value, clamped, "Clamped freakyness");
                }
                Self(clamped)
            }
        }
    }

    /// The temperature to send upstream.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Freakyness {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_absent() {
        assert_eq!(Freakyness::resolve(None), Freakyness::default());
        assert_eq!(Freakyness::default().value(), 0.5);
    }

    #[test]
    fn test_in_range_is_forwarded_unchanged() {
        for value in [0.0, 0.1, 1.0, 1.37, 2.0] {
            assert_eq!(Freakyness::resolve(Some(value)).value(), value);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Freakyness::resolve(Some(-1.0)).value(), 0.0);
        assert_eq!(Freakyness::resolve(Some(100.0)).value(), 2.0);
    }
}
