use super::{ParamBackground, ParamFractureSet, DEFAULT_DENSITY, DEFAULT_VP, DEFAULT_VS};
use russell_lab::math::PI;

/// Holds samples of background and fracture-set parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for a homogeneous isotropic background (SI units)
    pub fn param_isotropic_background() -> ParamBackground {
        ParamBackground::Isotropic {
            density: DEFAULT_DENSITY, // kg/m³
            vp: DEFAULT_VP,           // m/s
            vs: DEFAULT_VS,           // m/s
        }
    }

    /// Returns sample parameters for a VTI background given by Thomsen parameters (SI units)
    pub fn param_thomsen_background() -> ParamBackground {
        ParamBackground::VtiThomsen {
            density: 2300.0, // kg/m³
            vp0: 2600.0,     // m/s
            vs0: 1200.0,     // m/s
            epsilon: 0.1,    // [-]
            gamma: 0.15,     // [-]
            delta: 0.05,     // [-]
        }
    }

    /// Returns sample parameters for a single weak fracture set with the normal along x
    pub fn param_fracture_set_aligned() -> ParamFractureSet {
        ParamFractureSet {
            del_n: 0.1,
            del_v: 0.05,
            del_h: 0.05,
            azimuth: 0.0,
        }
    }

    /// Returns sample parameters for the first of two non-orthogonal fracture sets
    pub fn param_fracture_set_one() -> ParamFractureSet {
        ParamFractureSet {
            del_n: 0.10,
            del_v: 0.15,
            del_h: 0.20,
            azimuth: PI / 4.0,
        }
    }

    /// Returns sample parameters for the second of two non-orthogonal fracture sets
    pub fn param_fracture_set_two() -> ParamFractureSet {
        ParamFractureSet {
            del_n: 0.06,
            del_v: 0.10,
            del_h: 0.15,
            azimuth: PI / 2.0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
