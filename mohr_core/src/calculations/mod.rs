//! # Stress/Strain Calculations
//!
//! This module contains the five closed-form calculations. Each follows the
//! same pattern: plain serde-serializable inputs, a pure function, a
//! serde-serializable result, and a structured [`crate::errors::CalcError`]
//! when validation fails.
//!
//! All calculations share the conventions fixed in [`crate::units`]: angles
//! in degrees, counter-clockwise positive, engineering shear strain.
//!
//! ## Available Calculations
//!
//! - [`rosette`] - Reduce three strain-gauge readings to canonical strains
//! - [`constitutive`] - Plane-stress Hooke's law, both directions
//! - [`principal`] - Principal stresses and their orientation
//! - [`transform`] - Stress state at an arbitrary orientation
//! - [`von_mises`] - Von Mises equivalent stress (plane or full 3D)

pub mod constitutive;
pub mod principal;
pub mod rosette;
pub mod transform;
pub mod von_mises;

// Re-export commonly used types
pub use constitutive::{strain_to_stress, stress_to_strain};
pub use principal::{principal_stresses, PrincipalState};
pub use rosette::{RosetteInput, RosetteLayout, RosetteResult};
pub use transform::{stress_state, RotatedStress};
pub use von_mises::{von_mises, von_mises_from_matrix, von_mises_plane};
