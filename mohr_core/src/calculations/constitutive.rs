//! # Plane-Stress Constitutive Relations
//!
//! Hooke's law for a linear-elastic isotropic material under plane stress
//! (`sigma_zz = tau_yz = tau_zx = 0`):
//!
//! ```text
//! sigma_xx = E/(1 - nu^2) * (eps_xx + nu*eps_yy)
//! sigma_yy = E/(1 - nu^2) * (eps_yy + nu*eps_xx)
//! tau_xy   = G * gamma_xy,  G = E/(2(1 + nu))
//! ```
//!
//! and its inverse (the compliance direction):
//!
//! ```text
//! eps_xx   = (sigma_xx - nu*sigma_yy) / E
//! eps_yy   = (sigma_yy - nu*sigma_xx) / E
//! gamma_xy = tau_xy / G
//! ```
//!
//! Stress outputs come back in the unit `young_modulus` was given in.

use crate::errors::CalcResult;
use crate::materials::IsotropicMaterial;
use crate::tensor::{StrainTensor, StressTensor};

/// Convert a canonical strain state to the plane stress it implies.
///
/// # Arguments
///
/// * `strain` - Canonical strain tensor (engineering shear)
/// * `material` - Elastic constants; `E > 0`, `nu != ±1`
///
/// # Example
///
/// ```rust
/// use mohr_core::calculations::constitutive::strain_to_stress;
/// use mohr_core::materials::IsotropicMaterial;
/// use mohr_core::tensor::StrainTensor;
///
/// let strain = StrainTensor::new(5.0e-4, -1.5e-4, 0.0);
/// let stress = strain_to_stress(&strain, &IsotropicMaterial::steel()).unwrap();
/// assert!(stress.sigma_xx > 0.0);
/// assert!(stress.tau_xy == 0.0);
/// ```
pub fn strain_to_stress(
    strain: &StrainTensor,
    material: &IsotropicMaterial,
) -> CalcResult<StressTensor> {
    strain.validate()?;
    material.validate()?;

    let e = material.young_modulus;
    let nu = material.poisson_ratio;
    let stiffness = e / (1.0 - nu * nu);

    Ok(StressTensor {
        sigma_xx: stiffness * (strain.eps_xx + nu * strain.eps_yy),
        sigma_yy: stiffness * (strain.eps_yy + nu * strain.eps_xx),
        tau_xy: material.shear_modulus() * strain.gamma_xy,
    })
}

/// Convert a plane stress state to the strain it implies (inverse of
/// [`strain_to_stress`]).
pub fn stress_to_strain(
    stress: &StressTensor,
    material: &IsotropicMaterial,
) -> CalcResult<StrainTensor> {
    stress.validate()?;
    material.validate()?;

    let e = material.young_modulus;
    let nu = material.poisson_ratio;

    Ok(StrainTensor {
        eps_xx: (stress.sigma_xx - nu * stress.sigma_yy) / e,
        eps_yy: (stress.sigma_yy - nu * stress.sigma_xx) / e,
        gamma_xy: stress.tau_xy / material.shear_modulus(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uniaxial_stress_at_zero_poisson() {
        // With nu = 0 the relations collapse to sigma = E * eps
        let material = IsotropicMaterial::new("nu-zero", 100_000.0, 0.0);
        let strain = StrainTensor::new(2.0e-3, 0.0, 0.0);
        let stress = strain_to_stress(&strain, &material).unwrap();
        assert!((stress.sigma_xx - 200.0).abs() < 1e-9);
        assert_eq!(stress.sigma_yy, 0.0);
        assert_eq!(stress.tau_xy, 0.0);
    }

    #[test]
    fn test_known_plane_stress_values() {
        // Steel, eps_xx = 500 microstrain, eps_yy = -150, gamma = 200:
        // stiffness = 200000 / 0.91 = 219780.22
        // sigma_xx = 219780.22 * (5e-4 + 0.3*(-1.5e-4)) = 100.0 MPa
        // sigma_yy = 219780.22 * (-1.5e-4 + 0.3*5e-4) = 0.0 MPa
        // tau_xy = 76923.08 * 2e-4 = 15.385 MPa
        let strain = StrainTensor::new(5.0e-4, -1.5e-4, 2.0e-4);
        let stress = strain_to_stress(&strain, &IsotropicMaterial::steel()).unwrap();
        assert!((stress.sigma_xx - 100.0).abs() < 1e-3);
        assert!(stress.sigma_yy.abs() < 1e-3);
        assert!((stress.tau_xy - 15.385).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip_fixed() {
        let material = IsotropicMaterial::aluminum();
        let strain = StrainTensor::new(3.2e-4, -8.7e-5, 4.4e-4);
        let stress = strain_to_stress(&strain, &material).unwrap();
        let back = stress_to_strain(&stress, &material).unwrap();
        assert!((back.eps_xx - strain.eps_xx).abs() < 1e-9 * strain.eps_xx.abs());
        assert!((back.eps_yy - strain.eps_yy).abs() < 1e-9 * strain.eps_yy.abs());
        assert!((back.gamma_xy - strain.gamma_xy).abs() < 1e-9 * strain.gamma_xy.abs());
    }

    #[test]
    fn test_invalid_material_rejected() {
        let strain = StrainTensor::new(1.0e-4, 0.0, 0.0);
        assert!(strain_to_stress(&strain, &IsotropicMaterial::new("bad", -1.0, 0.3)).is_err());
        assert!(strain_to_stress(&strain, &IsotropicMaterial::new("bad", 1.0e5, 1.0)).is_err());
        assert!(stress_to_strain(&StressTensor::uniaxial(50.0), &IsotropicMaterial::new("bad", 0.0, 0.3)).is_err());
    }

    #[test]
    fn test_non_finite_strain_rejected() {
        let strain = StrainTensor::new(f64::INFINITY, 0.0, 0.0);
        assert!(strain_to_stress(&strain, &IsotropicMaterial::steel()).is_err());
    }

    proptest! {
        /// Constitutive relations round-trip within 1e-9 relative tolerance.
        #[test]
        fn round_trip_recovers_strain(
            eps_xx in -5.0e-3..5.0e-3f64,
            eps_yy in -5.0e-3..5.0e-3f64,
            gamma_xy in -5.0e-3..5.0e-3f64,
            young_modulus in 1.0e3..5.0e5f64,
            poisson_ratio in -0.45..0.45f64,
        ) {
            let material = IsotropicMaterial::new("prop", young_modulus, poisson_ratio);
            let strain = StrainTensor::new(eps_xx, eps_yy, gamma_xy);
            let stress = strain_to_stress(&strain, &material).unwrap();
            let back = stress_to_strain(&stress, &material).unwrap();

            let scale = 1.0e-6 + eps_xx.abs().max(eps_yy.abs()).max(gamma_xy.abs());
            prop_assert!((back.eps_xx - eps_xx).abs() <= 1e-9 * scale);
            prop_assert!((back.eps_yy - eps_yy).abs() <= 1e-9 * scale);
            prop_assert!((back.gamma_xy - gamma_xy).abs() <= 1e-9 * scale);
        }

        /// Forward relation is linear in the strain argument.
        #[test]
        fn forward_is_homogeneous(
            eps_xx in -1.0e-3..1.0e-3f64,
            eps_yy in -1.0e-3..1.0e-3f64,
            gamma_xy in -1.0e-3..1.0e-3f64,
            factor in 0.1..10.0f64,
        ) {
            let material = IsotropicMaterial::steel();
            let strain = StrainTensor::new(eps_xx, eps_yy, gamma_xy);
            let scaled = StrainTensor::new(factor * eps_xx, factor * eps_yy, factor * gamma_xy);
            let base = strain_to_stress(&strain, &material).unwrap();
            let stress = strain_to_stress(&scaled, &material).unwrap();

            let tol = 1e-9 * (1.0 + base.sigma_xx.abs().max(base.sigma_yy.abs()));
            prop_assert!((stress.sigma_xx - factor * base.sigma_xx).abs() <= factor.max(1.0) * tol);
            prop_assert!((stress.sigma_yy - factor * base.sigma_yy).abs() <= factor.max(1.0) * tol);
        }
    }
}
