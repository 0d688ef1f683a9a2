//! Implements the stiffness models for fractured media

mod background;
mod bond;
mod coefficients;
mod effective;
mod fracture;
mod orthorhombic;
pub use crate::model::background::*;
pub use crate::model::bond::*;
pub use crate::model::coefficients::*;
pub use crate::model::effective::*;
pub use crate::model::fracture::*;
pub use crate::model::orthorhombic::*;
