//! # Von Mises Equivalent Stress
//!
//! Scalar equivalent stress for yield-criterion comparison in ductile
//! materials, computed from the deviatoric part of the stress state. A pure
//! hydrostatic state therefore maps to zero.

use crate::errors::CalcResult;
use crate::tensor::{CauchyStressTensor, StressTensor};

/// Von Mises stress of a full 3D stress state:
///
/// ```text
/// sqrt(0.5*((sxx-syy)^2 + (syy-szz)^2 + (szz-sxx)^2) + 3*(txy^2 + tyz^2 + tzx^2))
/// ```
///
/// Total because [`CauchyStressTensor`] is symmetric by construction; pass a
/// raw matrix through [`von_mises_from_matrix`] to get the symmetry check.
pub fn von_mises(stress: &CauchyStressTensor) -> f64 {
    let d_xy = stress.sigma_xx - stress.sigma_yy;
    let d_yz = stress.sigma_yy - stress.sigma_zz;
    let d_zx = stress.sigma_zz - stress.sigma_xx;
    let shear = stress.tau_xy * stress.tau_xy
        + stress.tau_yz * stress.tau_yz
        + stress.tau_zx * stress.tau_zx;
    let squared = 0.5 * (d_xy * d_xy + d_yz * d_yz + d_zx * d_zx) + 3.0 * shear;
    squared.max(0.0).sqrt()
}

/// Von Mises stress of a plane stress state
/// (`sigma_zz = tau_yz = tau_zx = 0`):
///
/// ```text
/// sqrt(sxx^2 - sxx*syy + syy^2 + 3*txy^2)
/// ```
pub fn von_mises_plane(stress: &StressTensor) -> f64 {
    let squared = stress.sigma_xx * stress.sigma_xx
        - stress.sigma_xx * stress.sigma_yy
        + stress.sigma_yy * stress.sigma_yy
        + 3.0 * stress.tau_xy * stress.tau_xy;
    squared.max(0.0).sqrt()
}

/// Von Mises stress from a raw 3x3 matrix, rejecting asymmetric input.
///
/// # Example
///
/// ```rust
/// use mohr_core::calculations::von_mises::von_mises_from_matrix;
///
/// // Uniaxial tension: equivalent stress equals the applied stress
/// let sigma = von_mises_from_matrix([
///     [150.0, 0.0, 0.0],
///     [0.0, 0.0, 0.0],
///     [0.0, 0.0, 0.0],
/// ]).unwrap();
/// assert!((sigma - 150.0).abs() < 1e-12);
/// ```
pub fn von_mises_from_matrix(matrix: [[f64; 3]; 3]) -> CalcResult<f64> {
    Ok(von_mises(&CauchyStressTensor::from_matrix(matrix)?))
}
