//! # Materials
//!
//! Linear-elastic isotropic material definitions for the constitutive
//! relations. Two constants fully describe such a material: Young's modulus
//! `E` and Poisson's ratio `nu`; the shear modulus follows as
//! `G = E / (2(1 + nu))`.
//!
//! Reference values for the named constructors are in MPa. The crate itself
//! is unit-agnostic: `young_modulus` carries whatever stress unit the caller
//! works in, and every stress output comes back in that unit.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::materials::IsotropicMaterial;
//!
//! let steel = IsotropicMaterial::steel();
//! assert!((steel.shear_modulus() - 76_923.0).abs() < 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Physical bounds on Poisson's ratio for stable isotropic materials.
///
/// Values outside `(-1, 0.5)` are thermodynamically impossible for such
/// materials, but the constitutive relations stay well-defined everywhere
/// except `nu = ±1`, so out-of-band values only warn.
const POISSON_PHYSICAL_MIN: f64 = -1.0;
const POISSON_PHYSICAL_MAX: f64 = 0.5;

/// Linear-elastic isotropic material.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Structural steel",
///   "young_modulus": 200000.0,
///   "poisson_ratio": 0.3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotropicMaterial {
    /// User label for this material (e.g., "A36 steel", "Test coupon 3")
    pub label: String,

    /// Young's modulus E, in the caller's stress unit (must be > 0)
    pub young_modulus: f64,

    /// Poisson's ratio nu (dimensionless)
    pub poisson_ratio: f64,
}

impl IsotropicMaterial {
    /// Create a material from its two elastic constants
    pub fn new(label: impl Into<String>, young_modulus: f64, poisson_ratio: f64) -> Self {
        Self {
            label: label.into(),
            young_modulus,
            poisson_ratio,
        }
    }

    /// Structural steel: E = 200 GPa (200,000 MPa), nu = 0.30
    pub fn steel() -> Self {
        Self::new("Structural steel", 200_000.0, 0.30)
    }

    /// Aluminum 6061-T6: E = 69 GPa (69,000 MPa), nu = 0.33
    pub fn aluminum() -> Self {
        Self::new("Aluminum 6061-T6", 69_000.0, 0.33)
    }

    /// Validate the elastic constants.
    ///
    /// Only the domain the formulas need is enforced: `E > 0` and
    /// `nu != ±1` (where `1 - nu^2` and `1 + nu` vanish). A `nu` outside
    /// the physical `(-1, 0.5)` band emits a warning and is otherwise
    /// accepted.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.young_modulus.is_finite() || self.young_modulus <= 0.0 {
            return Err(CalcError::invalid_input(
                "young_modulus",
                self.young_modulus.to_string(),
                "Young's modulus must be positive and finite",
            ));
        }
        if !self.poisson_ratio.is_finite() {
            return Err(CalcError::invalid_input(
                "poisson_ratio",
                self.poisson_ratio.to_string(),
                "Poisson's ratio must be finite",
            ));
        }
        if 1.0 - self.poisson_ratio * self.poisson_ratio == 0.0 {
            return Err(CalcError::invalid_input(
                "poisson_ratio",
                self.poisson_ratio.to_string(),
                "constitutive relations are singular at nu = ±1",
            ));
        }
        if self.poisson_ratio <= POISSON_PHYSICAL_MIN || self.poisson_ratio >= POISSON_PHYSICAL_MAX
        {
            tracing::warn!(
                material = %self.label,
                poisson_ratio = self.poisson_ratio,
                "Poisson's ratio is outside the physical range (-1, 0.5) for \
                 stable isotropic materials"
            );
        }
        Ok(())
    }

    /// Shear modulus `G = E / (2(1 + nu))`
    pub fn shear_modulus(&self) -> f64 {
        self.young_modulus / (2.0 * (1.0 + self.poisson_ratio))
    }
}
