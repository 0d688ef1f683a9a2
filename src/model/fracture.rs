use crate::base::ParamFractureSet;
use crate::StrError;
use russell_lab::Matrix;

/// Builds the excess compliance matrix of one fracture set in its local frame
///
/// In the local frame, the fracture normal lies along the x-axis and the
/// excess compliance is diagonal with exactly three non-zero entries:
///
/// ```text
///         ⎡ Kn  0  0  0  0   0  ⎤       Kn = δN / (c11 (1 - δN))
///         ⎢ 0   0  0  0  0   0  ⎥
///         ⎢ 0   0  0  0  0   0  ⎥       Kv = δV / (c44 (1 - δV))
///     D = ⎢ 0   0  0  0  0   0  ⎥
///         ⎢ 0   0  0  0  Kv  0  ⎥       Kh = δH / (c66 (1 - δH))
///         ⎣ 0   0  0  0  0   Kh ⎦
/// ```
///
/// where c11, c44, and c66 are taken from the background stiffness.
///
/// # Input
///
/// * `cc` -- the background stiffness matrix (6×6, Voigt notation)
/// * `param` -- the fracture-set weaknesses
pub fn excess_compliance(cc: &Matrix, param: &ParamFractureSet) -> Result<Matrix, StrError> {
    param.validate()?;
    let (c11, c44, c66) = (cc.get(0, 0), cc.get(3, 3), cc.get(5, 5));
    if c11 <= 0.0 || c44 <= 0.0 || c66 <= 0.0 {
        return Err("background stiffness coefficients must be positive");
    }
    let kn = param.del_n / (c11 * (1.0 - param.del_n));
    let kv = param.del_v / (c44 * (1.0 - param.del_v));
    let kh = param.del_h / (c66 * (1.0 - param.del_h));
    let mut dd = Matrix::new(6, 6);
    dd.set(0, 0, kn);
    dd.set(4, 4, kv);
    dd.set(5, 5, kh);
    Ok(dd)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
