//! # Stress and Strain Tensors
//!
//! The data model shared by every calculation: in-plane stress and strain
//! states as symmetric 2x2 tensors (stored as their three independent
//! components), and the full 3x3 Cauchy stress tensor (stored as its six).
//!
//! All types are plain serde structs; conversion to nalgebra matrices happens
//! only where a calculation needs real linear algebra.
//!
//! ## Sign Conventions
//!
//! - Tension positive, compression negative.
//! - Positive `tau_xy` acts in the +y direction on the +x face.
//! - Rotations are counter-clockwise positive (see [`crate::units`]).
//! - Strain shear is the engineering shear `gamma_xy = 2*eps_xy`, the
//!   quantity gauge laboratories report.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::tensor::StressTensor;
//!
//! let stress = StressTensor::new(100.0, 60.0, -48.0);
//! assert_eq!(stress.center(), 80.0);
//! assert!((stress.radius() - 52.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Radians;

/// Relative tolerance for the symmetry check in
/// [`CauchyStressTensor::from_matrix`], scaled by the largest component
/// magnitude (with an absolute floor of 1.0 for near-zero tensors).
pub const SYMMETRY_TOL: f64 = 1.0e-9;

fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "component must be finite",
        ));
    }
    Ok(())
}

// ============================================================================
// Plane Stress Tensor
// ============================================================================

/// In-plane stress state at a point: the symmetric 2x2 tensor
///
/// ```text
/// | sigma_xx  tau_xy   |
/// | tau_xy    sigma_yy |
/// ```
///
/// Units are whatever consistent stress unit the caller works in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StressTensor {
    /// Normal stress on the x face
    pub sigma_xx: f64,
    /// Normal stress on the y face
    pub sigma_yy: f64,
    /// In-plane shear stress
    pub tau_xy: f64,
}

impl StressTensor {
    /// Create from components
    pub fn new(sigma_xx: f64, sigma_yy: f64, tau_xy: f64) -> Self {
        Self {
            sigma_xx,
            sigma_yy,
            tau_xy,
        }
    }

    /// Uniaxial tension/compression along x
    pub fn uniaxial(sigma: f64) -> Self {
        Self::new(sigma, 0.0, 0.0)
    }

    /// Equal-biaxial state (the in-plane isotropic state, radius zero)
    pub fn equal_biaxial(sigma: f64) -> Self {
        Self::new(sigma, sigma, 0.0)
    }

    /// Pure shear state
    pub fn pure_shear(tau: f64) -> Self {
        Self::new(0.0, 0.0, tau)
    }

    /// Validate that all components are finite
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("sigma_xx", self.sigma_xx)?;
        require_finite("sigma_yy", self.sigma_yy)?;
        require_finite("tau_xy", self.tau_xy)?;
        Ok(())
    }

    /// Center of Mohr's circle: `(sigma_xx + sigma_yy) / 2`
    ///
    /// This is the mean in-plane normal stress, invariant under rotation.
    pub fn center(&self) -> f64 {
        (self.sigma_xx + self.sigma_yy) / 2.0
    }

    /// Radius of Mohr's circle: `sqrt(((sigma_xx - sigma_yy)/2)^2 + tau_xy^2)`
    ///
    /// Equals the maximum in-plane shear stress, invariant under rotation.
    pub fn radius(&self) -> f64 {
        let half_diff = (self.sigma_xx - self.sigma_yy) / 2.0;
        half_diff.hypot(self.tau_xy)
    }

    /// The stress tensor expressed on axes rotated counter-clockwise by
    /// `theta`.
    ///
    /// Uses the direct transformation (in `sin`/`cos` of `theta`, not the
    /// double angle) so that a zero rotation returns the components exactly,
    /// with no trigonometric round-off.
    pub fn rotated(&self, theta: Radians) -> StressTensor {
        let (s, c) = theta.value().sin_cos();
        let (ss, cc) = (s * s, c * c);
        let sc = s * c;
        StressTensor {
            sigma_xx: self.sigma_xx * cc + self.sigma_yy * ss + 2.0 * self.tau_xy * sc,
            sigma_yy: self.sigma_xx * ss + self.sigma_yy * cc - 2.0 * self.tau_xy * sc,
            tau_xy: (self.sigma_yy - self.sigma_xx) * sc + self.tau_xy * (cc - ss),
        }
    }
}

// ============================================================================
// Plane Strain Tensor
// ============================================================================

/// In-plane strain state at a point: `{eps_xx, eps_yy, gamma_xy}`
///
/// `gamma_xy` is the engineering shear strain (`2*eps_xy`). Strains are
/// dimensionless; see [`crate::units::Microstrain`] for the gauge scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StrainTensor {
    /// Normal strain along x
    pub eps_xx: f64,
    /// Normal strain along y
    pub eps_yy: f64,
    /// Engineering shear strain (2*eps_xy)
    pub gamma_xy: f64,
}

impl StrainTensor {
    /// Create from components
    pub fn new(eps_xx: f64, eps_yy: f64, gamma_xy: f64) -> Self {
        Self {
            eps_xx,
            eps_yy,
            gamma_xy,
        }
    }

    /// Validate that all components are finite
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("eps_xx", self.eps_xx)?;
        require_finite("eps_yy", self.eps_yy)?;
        require_finite("gamma_xy", self.gamma_xy)?;
        Ok(())
    }

    /// Normal strain a gauge oriented at `theta` would read:
    /// `eps_xx*cos^2 + eps_yy*sin^2 + gamma_xy*sin*cos`
    pub fn normal_at(&self, theta: Radians) -> f64 {
        let (s, c) = theta.value().sin_cos();
        self.eps_xx * c * c + self.eps_yy * s * s + self.gamma_xy * s * c
    }
}

// ============================================================================
// Cauchy Stress Tensor (3D)
// ============================================================================

/// Full 3x3 symmetric Cauchy stress tensor, stored as its six independent
/// components
///
/// ```text
/// | sigma_xx  tau_xy    tau_zx   |
/// | tau_xy    sigma_yy  tau_yz   |
/// | tau_zx    tau_yz    sigma_zz |
/// ```
///
/// Symmetry is enforced at construction: [`CauchyStressTensor::from_matrix`]
/// rejects asymmetric input, so a constructed value is symmetric by type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CauchyStressTensor {
    pub sigma_xx: f64,
    pub sigma_yy: f64,
    pub sigma_zz: f64,
    pub tau_xy: f64,
    pub tau_yz: f64,
    pub tau_zx: f64,
}

impl CauchyStressTensor {
    /// Create from the six independent components
    pub fn new(
        sigma_xx: f64,
        sigma_yy: f64,
        sigma_zz: f64,
        tau_xy: f64,
        tau_yz: f64,
        tau_zx: f64,
    ) -> Self {
        Self {
            sigma_xx,
            sigma_yy,
            sigma_zz,
            tau_xy,
            tau_yz,
            tau_zx,
        }
    }

    /// Build from a full 3x3 matrix, verifying symmetry within
    /// [`SYMMETRY_TOL`] (relative to the largest component magnitude).
    pub fn from_matrix(matrix: [[f64; 3]; 3]) -> CalcResult<Self> {
        let mut scale: f64 = 1.0;
        for row in &matrix {
            for &value in row {
                require_finite("matrix", value)?;
                scale = scale.max(value.abs());
            }
        }

        let tol = SYMMETRY_TOL * scale;
        let pairs = [(0usize, 1usize), (1, 2), (2, 0)];
        for (i, j) in pairs {
            if (matrix[i][j] - matrix[j][i]).abs() > tol {
                return Err(CalcError::invalid_input(
                    "matrix",
                    format!("[{i}][{j}] = {}, [{j}][{i}] = {}", matrix[i][j], matrix[j][i]),
                    "stress tensor must be symmetric",
                ));
            }
        }

        Ok(Self {
            sigma_xx: matrix[0][0],
            sigma_yy: matrix[1][1],
            sigma_zz: matrix[2][2],
            tau_xy: matrix[0][1],
            tau_yz: matrix[1][2],
            tau_zx: matrix[2][0],
        })
    }

    /// Embed a plane-stress state (`sigma_zz = tau_yz = tau_zx = 0`)
    pub fn from_plane(plane: &StressTensor) -> Self {
        Self::new(plane.sigma_xx, plane.sigma_yy, 0.0, plane.tau_xy, 0.0, 0.0)
    }

    /// Hydrostatic state: equal normal stress, no shear
    pub fn hydrostatic(sigma: f64) -> Self {
        Self::new(sigma, sigma, sigma, 0.0, 0.0, 0.0)
    }

    /// Validate that all components are finite
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("sigma_xx", self.sigma_xx)?;
        require_finite("sigma_yy", self.sigma_yy)?;
        require_finite("sigma_zz", self.sigma_zz)?;
        require_finite("tau_xy", self.tau_xy)?;
        require_finite("tau_yz", self.tau_yz)?;
        require_finite("tau_zx", self.tau_zx)?;
        Ok(())
    }

    /// First invariant: `sigma_xx + sigma_yy + sigma_zz`
    pub fn trace(&self) -> f64 {
        self.sigma_xx + self.sigma_yy + self.sigma_zz
    }

    /// Mean (hydrostatic) stress: `trace / 3`
    pub fn mean_stress(&self) -> f64 {
        self.trace() / 3.0
    }

    /// Expand back to a full 3x3 matrix
    pub fn to_matrix(&self) -> [[f64; 3]; 3] {
        [
            [self.sigma_xx, self.tau_xy, self.tau_zx],
            [self.tau_xy, self.sigma_yy, self.tau_yz],
            [self.tau_zx, self.tau_yz, self.sigma_zz],
        ]
    }
}
