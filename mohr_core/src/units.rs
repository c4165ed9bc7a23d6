//! # Unit Types
//!
//! Type-safe wrappers for the scales this crate traffics in: angles and
//! gauge-scale strains. These are lightweight f64 newtypes, not a unit
//! conversion framework.
//!
//! ## Angle Convention
//!
//! The public API accepts angles in **degrees**, counter-clockwise positive,
//! measured from the +x axis. All trigonometry happens in radians; the
//! [`Degrees`] → [`Radians`] conversion is the only place that switch is
//! allowed to happen, so the convention cannot drift between calculations.
//!
//! Stress units are deliberately unconstrained: pick any consistent system
//! (MPa, psi, ...) and the formulas carry it through. Strain is
//! dimensionless; [`Microstrain`] covers the scale strain-gauge hardware
//! reports in.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::units::{Degrees, Microstrain, Radians};
//!
//! let angle = Degrees(45.0);
//! let rad: Radians = angle.into();
//! assert!((rad.0 - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
//!
//! let reading = Microstrain(350.0);
//! assert_eq!(reading.to_strain(), 350.0e-6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees, counter-clockwise positive from the +x axis
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians, counter-clockwise positive from the +x axis
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Strain Units
// ============================================================================

/// Strain in microstrain (με = 10⁻⁶), the scale gauge instrumentation reports
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Microstrain(pub f64);

impl Microstrain {
    /// Convert to dimensionless strain
    pub fn to_strain(self) -> f64 {
        self.0 * 1.0e-6
    }

    /// Create from dimensionless strain
    pub fn from_strain(strain: f64) -> Self {
        Microstrain(strain * 1.0e6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);
impl_arithmetic!(Microstrain);
