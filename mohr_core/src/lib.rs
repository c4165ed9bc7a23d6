//! # mohr_core - Plane-Stress Analysis Engine
//!
//! `mohr_core` implements the closed-form formulas of introductory
//! stress/strain analysis: strain-rosette reduction, plane-stress Hooke's
//! law, principal stresses, stress transformation to an arbitrary
//! orientation, and the Von Mises equivalent stress.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All public types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Fixed Conventions**: One angle/sign convention across the whole crate
//!
//! ## Conventions
//!
//! - Angles are in **degrees**, counter-clockwise positive, measured from
//!   the +x axis (see [`units`]).
//! - Tension is positive; positive `tau_xy` acts in +y on the +x face.
//! - Strain shear is the engineering shear `gamma_xy = 2*eps_xy`.
//! - Stress units are caller-chosen but must be consistent; strains are
//!   dimensionless.
//!
//! Every function is a synchronous computation over a handful of scalars:
//! no shared state, no I/O, safe to call from any number of threads.
//! Non-fatal numerical conditions (near-singular rosette geometry, an
//! indeterminate principal angle) are reported as [`tracing`] warnings,
//! never as errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use mohr_core::calculations::rosette::{self, RosetteInput, RosetteLayout};
//! use mohr_core::{principal_stresses, strain_to_stress, IsotropicMaterial};
//!
//! // Reduce rectangular-rosette readings to canonical strains
//! let readings = RosetteInput {
//!     label: "R-1".to_string(),
//!     layout: RosetteLayout::Rectangular,
//!     readings: [3.0e-4, 2.0e-4, -1.0e-4],
//! };
//! let strain = rosette::calculate(&readings).unwrap().strain;
//!
//! // Convert to stress and find the principal state
//! let stress = strain_to_stress(&strain, &IsotropicMaterial::steel()).unwrap();
//! let state = principal_stresses(&stress).unwrap();
//! assert!(state.sigma_1 >= state.sigma_2);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The five closed-form calculations
//! - [`tensor`] - Stress/strain tensor types and rotation helpers
//! - [`materials`] - Isotropic elastic constants
//! - [`units`] - Angle and strain-scale newtypes
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod tensor;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    principal_stresses, strain_to_stress, stress_state, stress_to_strain, von_mises,
    von_mises_from_matrix, von_mises_plane, PrincipalState, RosetteInput, RosetteLayout,
    RosetteResult, RotatedStress,
};
pub use errors::{CalcError, CalcResult};
pub use materials::IsotropicMaterial;
pub use tensor::{CauchyStressTensor, StrainTensor, StressTensor};
