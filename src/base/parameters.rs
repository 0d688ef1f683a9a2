use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds parameters for the unfractured background medium
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParamBackground {
    /// Isotropic background from density and body-wave velocities
    Isotropic {
        /// Mass density ρ (kg/m³)
        density: f64,

        /// P-wave velocity (m/s)
        vp: f64,

        /// S-wave velocity (m/s)
        vs: f64,
    },

    /// VTI background from the five independent stiffness coefficients
    ///
    /// The sixth coefficient follows from c12 = c11 - 2 c66.
    Vti {
        /// Mass density ρ (kg/m³)
        density: f64,

        /// Stiffness coefficient c11
        c11: f64,

        /// Stiffness coefficient c33
        c33: f64,

        /// Stiffness coefficient c44
        c44: f64,

        /// Stiffness coefficient c66
        c66: f64,

        /// Stiffness coefficient c13
        c13: f64,
    },

    /// VTI background from vertical velocities and Thomsen (1986) parameters
    VtiThomsen {
        /// Mass density ρ (kg/m³)
        density: f64,

        /// Vertical P-wave velocity (m/s)
        vp0: f64,

        /// Vertical S-wave velocity (m/s)
        vs0: f64,

        /// Thomsen ε parameter
        epsilon: f64,

        /// Thomsen γ parameter
        gamma: f64,

        /// Thomsen δ parameter
        delta: f64,
    },
}

impl ParamBackground {
    /// Validates the parameters
    pub fn validate(&self) -> Result<(), StrError> {
        match *self {
            ParamBackground::Isotropic { density, vp, vs } => {
                if density <= 0.0 {
                    return Err("density must be positive");
                }
                if vp <= 0.0 {
                    return Err("P-wave velocity must be positive");
                }
                if vs <= 0.0 {
                    return Err("S-wave velocity must be positive");
                }
            }
            ParamBackground::Vti {
                density,
                c11,
                c33,
                c44,
                c66,
                c13: _,
            } => {
                if density <= 0.0 {
                    return Err("density must be positive");
                }
                if c11 <= 0.0 || c33 <= 0.0 || c44 <= 0.0 || c66 <= 0.0 {
                    return Err("diagonal stiffness coefficients must be positive");
                }
            }
            ParamBackground::VtiThomsen {
                density,
                vp0,
                vs0,
                epsilon,
                gamma,
                delta: _,
            } => {
                if density <= 0.0 {
                    return Err("density must be positive");
                }
                if vp0 <= 0.0 {
                    return Err("vertical P-wave velocity must be positive");
                }
                if vs0 <= 0.0 {
                    return Err("vertical S-wave velocity must be positive");
                }
                if epsilon <= -0.5 {
                    return Err("Thomsen epsilon must be greater than -1/2");
                }
                if gamma <= -0.5 {
                    return Err("Thomsen gamma must be greater than -1/2");
                }
            }
        }
        Ok(())
    }

    /// Returns the mass density
    pub fn density(&self) -> f64 {
        match *self {
            ParamBackground::Isotropic { density, .. } => density,
            ParamBackground::Vti { density, .. } => density,
            ParamBackground::VtiThomsen { density, .. } => density,
        }
    }
}

/// Holds parameters for one set of aligned vertical fractures
///
/// The weaknesses are the dimensionless measures of Schoenberg's linear-slip
/// theory; each one must be within [0, 1). The azimuth orients the fracture
/// normal with respect to the x-axis (the normal lies along the x-axis when
/// the azimuth is zero).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamFractureSet {
    /// Normal weakness δN
    pub del_n: f64,

    /// Vertical-tangential weakness δV
    pub del_v: f64,

    /// Horizontal-tangential weakness δH
    pub del_h: f64,

    /// Azimuth of the fracture normal (radians)
    pub azimuth: f64,
}

impl ParamFractureSet {
    /// Validates the parameters
    pub fn validate(&self) -> Result<(), StrError> {
        if self.del_n < 0.0 || self.del_n >= 1.0 {
            return Err("normal weakness must be within [0, 1)");
        }
        if self.del_v < 0.0 || self.del_v >= 1.0 {
            return Err("vertical-tangential weakness must be within [0, 1)");
        }
        if self.del_h < 0.0 || self.del_h >= 1.0 {
            return Err("horizontal-tangential weakness must be within [0, 1)");
        }
        if !self.azimuth.is_finite() {
            return Err("azimuth must be finite");
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
