//! Makes available common structures needed to build effective models
//!
//! You may write `use effmed::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{
    ParamBackground, ParamFractureSet, SampleParams, DEFAULT_DENSITY, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR, DEFAULT_VP,
    DEFAULT_VS,
};
pub use crate::model::{
    bond_rotation, effective_stiffness, excess_compliance, orthorhombic_stiffness, BackgroundModel, EffectiveModel,
    HtiModel, OrthorhombicModel, StiffnessCoefficients, StiffnessField,
};
pub use crate::util::ModelJob;
