//! Effective elastic stiffness of fractured media
//!
//! This crate computes the effective stiffness tensor of a rock volume
//! containing one or more sets of aligned vertical fractures, following the
//! linear-slip theory of Schoenberg (1983). Each fracture set adds excess
//! compliance to an isotropic or VTI background medium; two or more
//! non-orthogonal sets yield a monoclinic effective medium.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod model;
pub mod prelude;
pub mod util;
