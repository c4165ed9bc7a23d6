//! # Strain Rosette Reduction
//!
//! Converts three strain-gauge readings into the canonical in-plane strain
//! tensor `{eps_xx, eps_yy, gamma_xy}`.
//!
//! Each gauge oriented at angle `theta` reads
//!
//! ```text
//! eps_theta = eps_xx*cos^2(theta) + eps_yy*sin^2(theta) + gamma_xy*sin(theta)*cos(theta)
//! ```
//!
//! so three gauges give a 3x3 linear system in the three unknowns, solved
//! here by LU decomposition. Gauge angles are in degrees, counter-clockwise
//! positive from the +x axis.
//!
//! ## Assumptions
//!
//! - Readings are dimensionless strain (divide microstrain readings by 10⁶,
//!   or use [`crate::units::Microstrain::to_strain`])
//! - All three gauges measure the same in-plane strain state
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::calculations::rosette::{calculate, RosetteInput, RosetteLayout};
//!
//! let input = RosetteInput {
//!     label: "R-1".to_string(),
//!     layout: RosetteLayout::Rectangular,
//!     readings: [3.0e-4, 2.0e-4, -1.0e-4],
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.strain.eps_xx - 3.0e-4).abs() < 1e-12);
//! assert!((result.strain.gamma_xy - 2.0e-4).abs() < 1e-12);
//! ```

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::tensor::StrainTensor;
use crate::units::{Degrees, Radians};

/// Determinant magnitude below which the gauge geometry is rejected as
/// degenerate. The coefficient matrix has entries in [-0.5, 1], so the
/// determinant is scale-free.
const SINGULAR_TOL: f64 = 1.0e-12;

/// Determinant magnitude below which the solve still proceeds but a
/// precision warning is emitted.
const NEAR_SINGULAR_TOL: f64 = 1.0e-6;

/// Gauge arrangement of a three-element rosette.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Rectangular" }
/// { "type": "Delta" }
/// { "type": "Custom", "angles_deg": [0.0, 30.0, 75.0] }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RosetteLayout {
    /// Standard rectangular rosette: gauges at 0°, 45°, 90°
    Rectangular,
    /// Standard delta rosette: gauges at 0°, 60°, 120°
    Delta,
    /// Arbitrary gauge directions, in degrees CCW from +x
    Custom { angles_deg: [f64; 3] },
}

impl RosetteLayout {
    /// The three gauge directions in degrees
    pub fn gauge_angles_deg(&self) -> [f64; 3] {
        match self {
            RosetteLayout::Rectangular => [0.0, 45.0, 90.0],
            RosetteLayout::Delta => [0.0, 60.0, 120.0],
            RosetteLayout::Custom { angles_deg } => *angles_deg,
        }
    }
}

/// Input parameters for a rosette reduction.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "R-1",
///   "layout": { "type": "Rectangular" },
///   "readings": [0.0003, 0.0002, -0.0001]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosetteInput {
    /// User label for this rosette (e.g., "R-1", "Gauge set at weld toe")
    pub label: String,

    /// Gauge arrangement
    pub layout: RosetteLayout,

    /// Measured strains, one per gauge, in layout order (dimensionless)
    pub readings: [f64; 3],
}

impl RosetteInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (index, reading) in self.readings.iter().enumerate() {
            if !reading.is_finite() {
                return Err(CalcError::invalid_input(
                    format!("readings[{index}]"),
                    reading.to_string(),
                    "gauge reading must be finite",
                ));
            }
        }
        for (index, angle) in self.layout.gauge_angles_deg().iter().enumerate() {
            if !angle.is_finite() {
                return Err(CalcError::invalid_input(
                    format!("angles_deg[{index}]"),
                    angle.to_string(),
                    "gauge angle must be finite",
                ));
            }
        }
        Ok(())
    }
}

/// Results from a rosette reduction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RosetteResult {
    /// Canonical in-plane strain tensor recovered from the readings
    pub strain: StrainTensor,

    /// Gauge directions actually used, in degrees
    pub gauge_angles_deg: [f64; 3],
}

/// Reduce three gauge readings to the canonical strain tensor.
///
/// # Arguments
///
/// * `input` - Gauge layout and readings
///
/// # Returns
///
/// * `Ok(RosetteResult)` - Canonical strains
/// * `Err(CalcError)` - Non-finite input, or degenerate gauge geometry
///   (directions coincide modulo 180°, making the system singular)
///
/// # Example
///
/// ```rust
/// use mohr_core::calculations::rosette::{calculate, RosetteInput, RosetteLayout};
///
/// // Delta rosette on a uniaxially loaded coupon
/// let input = RosetteInput {
///     label: "R-2".to_string(),
///     layout: RosetteLayout::Delta,
///     readings: [5.0e-4, 1.0e-4, 1.0e-4],
/// };
/// let result = calculate(&input).unwrap();
/// assert!((result.strain.eps_xx - 5.0e-4).abs() < 1e-12);
/// ```
pub fn calculate(input: &RosetteInput) -> CalcResult<RosetteResult> {
    input.validate()?;

    let gauge_angles_deg = input.layout.gauge_angles_deg();
    let mut rows = [[0.0f64; 3]; 3];
    for (row, angle_deg) in rows.iter_mut().zip(gauge_angles_deg) {
        let theta: Radians = Degrees(angle_deg).into();
        let (s, c) = theta.value().sin_cos();
        *row = [c * c, s * s, s * c];
    }

    let coefficients = Matrix3::new(
        rows[0][0], rows[0][1], rows[0][2], //
        rows[1][0], rows[1][1], rows[1][2], //
        rows[2][0], rows[2][1], rows[2][2],
    );
    let readings = Vector3::new(input.readings[0], input.readings[1], input.readings[2]);

    let determinant = coefficients.determinant();
    if determinant.abs() <= SINGULAR_TOL {
        return Err(CalcError::invalid_input(
            "layout",
            format!("{gauge_angles_deg:?}"),
            "gauge directions are collinear (angles coincide modulo 180°); \
             the strain-transformation system is singular",
        ));
    }
    if determinant.abs() <= NEAR_SINGULAR_TOL {
        tracing::warn!(
            rosette = %input.label,
            determinant,
            "gauge directions are nearly collinear; recovered strains may \
             lose precision"
        );
    }

    let solution = coefficients.lu().solve(&readings).ok_or_else(|| {
        CalcError::invalid_input(
            "layout",
            format!("{gauge_angles_deg:?}"),
            "strain-transformation system could not be solved",
        )
    })?;

    Ok(RosetteResult {
        strain: StrainTensor::new(solution[0], solution[1], solution[2]),
        gauge_angles_deg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Degrees;

    fn reduce(layout: RosetteLayout, readings: [f64; 3]) -> RosetteResult {
        calculate(&RosetteInput {
            label: "test".to_string(),
            layout,
            readings,
        })
        .unwrap()
    }

    #[test]
    fn test_rectangular_closed_form() {
        // For 0/45/90: eps_xx = e_a, eps_yy = e_c, gamma_xy = 2*e_b - e_a - e_c
        let result = reduce(RosetteLayout::Rectangular, [3.0e-4, 2.0e-4, -1.0e-4]);
        assert!((result.strain.eps_xx - 3.0e-4).abs() < 1e-15);
        assert!((result.strain.eps_yy - -1.0e-4).abs() < 1e-15);
        assert!((result.strain.gamma_xy - 2.0e-4).abs() < 1e-15);
    }

    #[test]
    fn test_delta_recovers_known_state() {
        // Forward-compute delta readings from a known tensor, then reduce
        let strain = StrainTensor::new(4.2e-4, -1.3e-4, 2.6e-4);
        let readings = [
            strain.normal_at(Degrees(0.0).into()),
            strain.normal_at(Degrees(60.0).into()),
            strain.normal_at(Degrees(120.0).into()),
        ];
        let result = reduce(RosetteLayout::Delta, readings);
        assert!((result.strain.eps_xx - strain.eps_xx).abs() < 1e-15);
        assert!((result.strain.eps_yy - strain.eps_yy).abs() < 1e-15);
        assert!((result.strain.gamma_xy - strain.gamma_xy).abs() < 1e-15);
    }

    #[test]
    fn test_custom_layout_recovers_known_state() {
        let strain = StrainTensor::new(-2.0e-4, 6.0e-4, -3.5e-4);
        let angles_deg = [10.0, 55.0, 95.0];
        let readings = [
            strain.normal_at(Degrees(angles_deg[0]).into()),
            strain.normal_at(Degrees(angles_deg[1]).into()),
            strain.normal_at(Degrees(angles_deg[2]).into()),
        ];
        let result = reduce(RosetteLayout::Custom { angles_deg }, readings);
        assert!((result.strain.eps_xx - strain.eps_xx).abs() < 1e-14);
        assert!((result.strain.eps_yy - strain.eps_yy).abs() < 1e-14);
        assert!((result.strain.gamma_xy - strain.gamma_xy).abs() < 1e-14);
    }

    #[test]
    fn test_collinear_gauges_rejected() {
        // All three directions coincide modulo 180°
        let input = RosetteInput {
            label: "degenerate".to_string(),
            layout: RosetteLayout::Custom {
                angles_deg: [10.0, 190.0, 370.0],
            },
            readings: [1.0e-4, 1.0e-4, 1.0e-4],
        };
        let error = calculate(&input).unwrap_err();
        assert_eq!(error.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_duplicate_gauge_rejected() {
        let input = RosetteInput {
            label: "degenerate".to_string(),
            layout: RosetteLayout::Custom {
                angles_deg: [0.0, 45.0, 45.0],
            },
            readings: [1.0e-4, 2.0e-4, 2.0e-4],
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_non_finite_reading_rejected() {
        let input = RosetteInput {
            label: "bad".to_string(),
            layout: RosetteLayout::Rectangular,
            readings: [1.0e-4, f64::NAN, 2.0e-4],
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_reported_angles_match_layout() {
        let result = reduce(RosetteLayout::Delta, [0.0, 0.0, 0.0]);
        assert_eq!(result.gauge_angles_deg, [0.0, 60.0, 120.0]);
    }

    #[test]
    fn test_serialization_round_trip() {
        let input = RosetteInput {
            label: "R-1".to_string(),
            layout: RosetteLayout::Custom {
                angles_deg: [0.0, 30.0, 75.0],
            },
            readings: [3.0e-4, 2.0e-4, -1.0e-4],
        };
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: RosetteInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
