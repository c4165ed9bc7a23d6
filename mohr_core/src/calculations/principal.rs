//! # Principal Stresses
//!
//! Closed-form eigen-decomposition of the symmetric 2x2 stress tensor via
//! Mohr's circle: the principal stresses sit at `center ± radius`, and the
//! principal direction is `0.5 * atan2(2*tau_xy, sigma_xx - sigma_yy)`.
//!
//! When the state is isotropic (`radius ≈ 0`) every direction is principal;
//! the reported angle is 0° by convention and a warning is emitted.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::tensor::StressTensor;
use crate::units::{Degrees, Radians};

/// Radius below which (relative to the circle center) the stress state is
/// treated as isotropic and the principal angle reported as 0°.
const ISOTROPIC_TOL: f64 = 1.0e-12;

/// Principal stress state: the extremal normal stresses and where they act.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sigma_1": 132.0,
///   "sigma_2": 28.0,
///   "angle_deg": -33.69,
///   "max_shear": 52.0,
///   "center": 80.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalState {
    /// Major principal stress (`sigma_1 >= sigma_2`)
    pub sigma_1: f64,

    /// Minor principal stress
    pub sigma_2: f64,

    /// Orientation of the `sigma_1` direction, degrees CCW from +x.
    ///
    /// Rotating the input tensor by this angle puts `sigma_1` on the x face
    /// and zeroes the shear. 0° by convention for isotropic states, where
    /// any orientation is principal.
    pub angle_deg: f64,

    /// Maximum in-plane shear stress (the Mohr's-circle radius), acting at
    /// 45° from the principal directions
    pub max_shear: f64,

    /// Mean in-plane normal stress (the Mohr's-circle center)
    pub center: f64,
}

/// Compute principal stresses and their orientation.
///
/// # Arguments
///
/// * `stress` - In-plane stress tensor
///
/// # Returns
///
/// * `Ok(PrincipalState)` - Principal values, ordered `sigma_1 >= sigma_2`
/// * `Err(CalcError)` - Non-finite components
///
/// # Example
///
/// ```rust
/// use mohr_core::calculations::principal::principal_stresses;
/// use mohr_core::tensor::StressTensor;
///
/// let stress = StressTensor::new(100.0, 60.0, -48.0);
/// let state = principal_stresses(&stress).unwrap();
/// assert!((state.sigma_1 - 132.0).abs() < 1e-9);
/// assert!((state.sigma_2 - 28.0).abs() < 1e-9);
/// ```
pub fn principal_stresses(stress: &StressTensor) -> CalcResult<PrincipalState> {
    stress.validate()?;

    let center = stress.center();
    let radius = stress.radius();

    let angle_deg = if radius <= ISOTROPIC_TOL * center.abs().max(1.0) {
        tracing::warn!(
            center,
            "stress state is isotropic; principal orientation is \
             indeterminate, reporting 0°"
        );
        0.0
    } else {
        let half_angle = Radians(
            0.5 * (2.0 * stress.tau_xy).atan2(stress.sigma_xx - stress.sigma_yy),
        );
        Degrees::from(half_angle).value()
    };

    Ok(PrincipalState {
        sigma_1: center + radius,
        sigma_2: center - radius,
        angle_deg,
        max_shear: radius,
        center,
    })
}
