use russell_lab::Matrix;

/// Returns the Bond transformation matrix for an in-plane rotation
///
/// The 6×6 matrix expresses how a Voigt-notation tensor transforms under a
/// rotation about the vertical axis by the azimuth `phi`:
///
/// ```text
///         ⎡  cos²φ     sin²φ    0    0     0      sin2φ  ⎤
///         ⎢  sin²φ     cos²φ    0    0     0     -sin2φ  ⎥
///         ⎢  0         0        1    0     0      0      ⎥
///    R =  ⎢  0         0        0   cosφ  -sinφ   0      ⎥
///         ⎢  0         0        0   sinφ   cosφ   0      ⎥
///         ⎣ -sin2φ/2   sin2φ/2  0    0     0      cos2φ  ⎦
/// ```
///
/// A compliance expressed in the fracture's local frame maps to the global
/// frame through `R · D · Rᵀ`. Rotations compose, hence `R(-φ)` is the
/// inverse of `R(φ)`.
pub fn bond_rotation(phi: f64) -> Matrix {
    let (s, c) = (f64::sin(phi), f64::cos(phi));
    let s2 = f64::sin(2.0 * phi);
    let c2 = f64::cos(2.0 * phi);
    Matrix::from(&[
        [c * c, s * s, 0.0, 0.0, 0.0, s2],
        [s * s, c * c, 0.0, 0.0, 0.0, -s2],
        [0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, c, -s, 0.0],
        [0.0, 0.0, 0.0, s, c, 0.0],
        [-0.5 * s2, 0.5 * s2, 0.0, 0.0, 0.0, c2],
    ])
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
