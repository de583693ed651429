use crate::error::IbpError;
use core::ops::{Div, Mul};

macro_rules! constrained_f64 {
    ( $name:ident, $closure:tt, $err:expr ) => {
        #[derive(Debug, Copy, Clone, PartialEq)]
        pub struct $name(f64);

        impl $name {
            pub fn new(x: f64) -> Result<Self, IbpError> {
                if ($closure)(x) {
                    Ok(Self(x))
                } else {
                    Err(($err)(x))
                }
            }

            pub fn unwrap(self) -> f64 {
                self.0
            }
        }

        impl Mul<f64> for $name {
            type Output = f64;

            fn mul(self, other: f64) -> f64 {
                self.0 * other
            }
        }

        impl Mul<$name> for f64 {
            type Output = f64;

            fn mul(self, other: $name) -> f64 {
                self * other.0
            }
        }

        impl Div<$name> for f64 {
            type Output = f64;

            fn div(self, other: $name) -> f64 {
                self / other.0
            }
        }
    };
}

constrained_f64!(
    Concentration,
    (|x: f64| x.is_finite() && x > 0.0),
    IbpError::Concentration
);

// Fraction of the stick offered to each customer; NaN fails both comparisons.
constrained_f64!(
    Damping,
    (|x: f64| x > 0.0 && x <= 1.0),
    IbpError::Damping
);

impl Default for Damping {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Concentration {
    /// The concentration used for the stick proportions once damping is applied.
    pub fn damped(self, damping: Damping) -> Result<Concentration, IbpError> {
        Concentration::new(self.0 / damping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concentration() {
        assert_eq!(Concentration::new(2.5).map(|x| x.unwrap()), Ok(2.5));
        assert_eq!(Concentration::new(0.0), Err(IbpError::Concentration(0.0)));
        assert_eq!(
            Concentration::new(-1.0),
            Err(IbpError::Concentration(-1.0))
        );
        assert!(Concentration::new(f64::NAN).is_err());
        assert!(Concentration::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_damping() {
        assert_eq!(Damping::default().unwrap(), 1.0);
        assert!(Damping::new(1.0).is_ok());
        assert!(Damping::new(0.1).is_ok());
        assert_eq!(Damping::new(0.0), Err(IbpError::Damping(0.0)));
        assert_eq!(Damping::new(1.5), Err(IbpError::Damping(1.5)));
        assert!(Damping::new(f64::NAN).is_err());
    }

    #[test]
    fn test_damped() {
        let alpha = Concentration::new(10.0).unwrap();
        let damped = alpha.damped(Damping::new(0.5).unwrap()).unwrap();
        assert_eq!(damped.unwrap(), 20.0);
        assert_eq!(2.0 * damped, 40.0);
        let tiny = Damping::new(f64::MIN_POSITIVE).unwrap();
        assert!(Concentration::new(f64::MAX).unwrap().damped(tiny).is_err());
    }
}
