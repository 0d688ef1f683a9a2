use crate::base::ParamBackground;
use crate::StrError;
use russell_lab::Matrix;

/// Holds the stiffness matrix and density of the unfractured background medium
///
/// The stiffness matrix is 6×6 in Voigt notation with the component order
/// (xx, yy, zz, yz, xz, xy). All three construction variants fill the VTI
/// pattern; the isotropic case is the special VTI with c33 = c11,
/// c66 = c44, and c13 = c11 - 2 c44.
pub struct BackgroundModel {
    /// Background stiffness matrix (6×6, Voigt notation)
    pub cc: Matrix,

    /// Mass density ρ
    pub density: f64,
}

impl BackgroundModel {
    /// Allocates a new instance from background parameters
    ///
    /// # Input
    ///
    /// * `param` -- isotropic constants, direct VTI coefficients, or
    ///   Thomsen-style VTI parameters
    pub fn new(param: &ParamBackground) -> Result<Self, StrError> {
        param.validate()?;
        let (density, c11, c33, c44, c66, c13) = match *param {
            ParamBackground::Isotropic { density, vp, vs } => {
                let c11 = density * vp * vp;
                let c44 = density * vs * vs;
                (density, c11, c11, c44, c44, c11 - 2.0 * c44)
            }
            ParamBackground::Vti {
                density,
                c11,
                c33,
                c44,
                c66,
                c13,
            } => (density, c11, c33, c44, c66, c13),
            ParamBackground::VtiThomsen {
                density,
                vp0,
                vs0,
                epsilon,
                gamma,
                delta,
            } => {
                let c33 = density * vp0 * vp0;
                let c44 = density * vs0 * vs0;
                let c11 = (1.0 + 2.0 * epsilon) * c33;
                let c66 = (1.0 + 2.0 * gamma) * c44;
                let arg = 2.0 * c33 * (c33 - c44) * delta + (c33 - c44) * (c33 - c44);
                if arg < 0.0 {
                    return Err("Thomsen delta yields a negative square-root argument");
                }
                let c13 = f64::sqrt(arg) - c44;
                (density, c11, c33, c44, c66, c13)
            }
        };
        let c12 = c11 - 2.0 * c66;
        let cc = Matrix::from(&[
            [c11, c12, c13, 0.0, 0.0, 0.0],
            [c12, c11, c13, 0.0, 0.0, 0.0],
            [c13, c13, c33, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, c44, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, c44, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0, c66],
        ]);
        Ok(BackgroundModel { cc, density })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
