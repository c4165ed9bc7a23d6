//! # Stress State at an Arbitrary Orientation
//!
//! Rotates a plane stress state onto axes inclined at `theta` to the
//! reference basis:
//!
//! ```text
//! sigma_n = (sxx + syy)/2 + (sxx - syy)/2 * cos(2t) + txy * sin(2t)
//! tau_nt  = -(sxx - syy)/2 * sin(2t) + txy * cos(2t)
//! ```
//!
//! ## Conventions
//!
//! `theta` is in **degrees**, counter-clockwise positive, measured from the
//! +x axis; this is the convention most likely to cause silent sign errors
//! if left implicit, so it is fixed here and shared with every other
//! calculation in the crate. A zero rotation returns the input components
//! exactly (the rotation is evaluated in `sin`/`cos` of `theta`, which are
//! exact at zero, rather than the double-angle form above).

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::tensor::StressTensor;
use crate::units::Degrees;

/// Stress state expressed on axes rotated counter-clockwise by `angle_deg`.
///
/// Carries the full rotated tensor; use [`RotatedStress::normal_and_shear`]
/// for the scalar pair on the rotated x face, or [`RotatedStress::tensor`]
/// for the complete tensor in the rotated basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotatedStress {
    /// Rotation that produced this state, degrees CCW from +x
    pub angle_deg: f64,

    /// Normal stress on the rotated x face
    pub sigma_n: f64,

    /// Normal stress on the rotated y face (at `angle_deg` + 90°)
    pub sigma_t: f64,

    /// Shear stress in the rotated basis
    pub tau_nt: f64,
}

impl RotatedStress {
    /// The scalar pair most hand calculations want: `(sigma_n, tau_nt)`
    pub fn normal_and_shear(&self) -> (f64, f64) {
        (self.sigma_n, self.tau_nt)
    }

    /// The full stress tensor in the rotated basis
    pub fn tensor(&self) -> StressTensor {
        StressTensor::new(self.sigma_n, self.sigma_t, self.tau_nt)
    }
}

/// Compute the stress state at an arbitrary orientation.
///
/// # Arguments
///
/// * `stress` - In-plane stress tensor in the reference basis
/// * `angle_deg` - Target orientation, degrees CCW from +x
///
/// # Returns
///
/// * `Ok(RotatedStress)` - Stress state in the rotated basis
/// * `Err(CalcError)` - Non-finite components or angle
///
/// # Example
///
/// ```rust
/// use mohr_core::calculations::transform::stress_state;
/// use mohr_core::tensor::StressTensor;
///
/// let stress = StressTensor::new(100.0, 60.0, -48.0);
/// let (sigma, tau) = stress_state(&stress, 30.0).unwrap().normal_and_shear();
/// assert!((sigma - 48.431).abs() < 1e-3);
/// assert!((tau - -41.321).abs() < 1e-3);
/// ```
pub fn stress_state(stress: &StressTensor, angle_deg: f64) -> CalcResult<RotatedStress> {
    stress.validate()?;
    if !angle_deg.is_finite() {
        return Err(CalcError::invalid_input(
            "angle_deg",
            angle_deg.to_string(),
            "orientation angle must be finite",
        ));
    }

    let rotated = stress.rotated(Degrees(angle_deg).into());
    Ok(RotatedStress {
        angle_deg,
        sigma_n: rotated.sigma_xx,
        sigma_t: rotated.sigma_yy,
        tau_nt: rotated.tau_xy,
    })
}
