use super::{BackgroundModel, StiffnessField};
use crate::base::{ParamBackground, ParamFractureSet};
use crate::StrError;
use russell_lab::Matrix;

/// Computes the stiffness of a medium with one fracture set aligned with x
///
/// Closed-form equivalent of the general superposition-and-inversion engine
/// for a single vertical fracture set with the normal along the x-axis
/// (zero azimuth) in a VTI (or isotropic) background:
///
/// ```text
/// c11 = c11ᵇ (1 - δN)                 c12 = c12ᵇ (1 - δN)
/// c13 = c13ᵇ (1 - δN)                 c22 = c11ᵇ (1 - δN (c12ᵇ/c11ᵇ)²)
/// c23 = c13ᵇ (1 - δN c12ᵇ/c11ᵇ)       c33 = c33ᵇ (1 - δN c13ᵇ²/(c33ᵇ c11ᵇ))
/// c44 = c44ᵇ                          c55 = c44ᵇ (1 - δV)
/// c66 = c66ᵇ (1 - δH)
/// ```
///
/// # Input
///
/// * `cb` -- the background stiffness matrix (6×6, Voigt notation)
/// * `param` -- the fracture set; its azimuth must be zero
pub fn orthorhombic_stiffness(cb: &Matrix, param: &ParamFractureSet) -> Result<Matrix, StrError> {
    if cb.nrow() != 6 || cb.ncol() != 6 {
        return Err("background stiffness matrix must be 6×6");
    }
    if param.azimuth != 0.0 {
        return Err("closed-form stiffness requires a zero azimuth");
    }
    param.validate()?;
    let (c11_b, c12_b, c13_b) = (cb.get(0, 0), cb.get(0, 1), cb.get(0, 2));
    let (c33_b, c44_b, c66_b) = (cb.get(2, 2), cb.get(3, 3), cb.get(5, 5));
    if c11_b <= 0.0 || c33_b <= 0.0 || c44_b <= 0.0 || c66_b <= 0.0 {
        return Err("background stiffness coefficients must be positive");
    }
    let (del_n, del_v, del_h) = (param.del_n, param.del_v, param.del_h);
    let c11 = c11_b * (1.0 - del_n);
    let c12 = c12_b * (1.0 - del_n);
    let c13 = c13_b * (1.0 - del_n);
    let c22 = c11_b * (1.0 - del_n * (c12_b / c11_b) * (c12_b / c11_b));
    let c23 = c13_b * (1.0 - del_n * (c12_b / c11_b));
    let c33 = c33_b * (1.0 - del_n * c13_b * c13_b / (c33_b * c11_b));
    let c55 = c44_b * (1.0 - del_v);
    let c66 = c66_b * (1.0 - del_h);
    Ok(Matrix::from(&[
        [c11, c12, c13, 0.0, 0.0, 0.0],
        [c12, c22, c23, 0.0, 0.0, 0.0],
        [c13, c23, c33, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, c44_b, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, c55, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, c66],
    ]))
}

/// Builds orthorhombic stiffness fields for a vertically fractured VTI medium
///
/// Applies the closed-form expressions of [orthorhombic_stiffness] at every
/// spatial location of a weakness field (and, in the heterogeneous case, of
/// a background coefficient field). The fracture normal lies along the
/// x-axis everywhere.
pub struct OrthorhombicModel {
    /// Effective stiffness coefficient fields
    pub field: StiffnessField,
}

impl OrthorhombicModel {
    /// Allocates a new instance with a homogeneous background
    ///
    /// # Input
    ///
    /// * `param` -- the (homogeneous) background medium parameters
    /// * `del_n`, `del_v`, `del_h` -- co-located weakness fields
    pub fn new(param: &ParamBackground, del_n: &[f64], del_v: &[f64], del_h: &[f64]) -> Result<Self, StrError> {
        let bg = BackgroundModel::new(param)?;
        let n = del_n.len();
        let (c11_b, c13_b) = (bg.cc.get(0, 0), bg.cc.get(0, 2));
        let (c33_b, c44_b, c66_b) = (bg.cc.get(2, 2), bg.cc.get(3, 3), bg.cc.get(5, 5));
        OrthorhombicModel::with_fields(
            &vec![c11_b; n],
            &vec![c33_b; n],
            &vec![c44_b; n],
            &vec![c66_b; n],
            &vec![c13_b; n],
            del_n,
            del_v,
            del_h,
        )
    }

    /// Allocates a new instance with a heterogeneous background
    ///
    /// All arrays are co-located fields and must share the same length.
    /// The sixth background coefficient follows from c12ᵇ = c11ᵇ - 2 c66ᵇ.
    ///
    /// # Input
    ///
    /// * `c11_b`, `c33_b`, `c44_b`, `c66_b`, `c13_b` -- background stiffness fields
    /// * `del_n`, `del_v`, `del_h` -- weakness fields
    pub fn with_fields(
        c11_b: &[f64],
        c33_b: &[f64],
        c44_b: &[f64],
        c66_b: &[f64],
        c13_b: &[f64],
        del_n: &[f64],
        del_v: &[f64],
        del_h: &[f64],
    ) -> Result<Self, StrError> {
        let n = c11_b.len();
        if n == 0 {
            return Err("field arrays must not be empty");
        }
        if c33_b.len() != n
            || c44_b.len() != n
            || c66_b.len() != n
            || c13_b.len() != n
            || del_n.len() != n
            || del_v.len() != n
            || del_h.len() != n
        {
            return Err("field arrays must have the same length");
        }
        let mut field = StiffnessField::with_capacity(n);
        for p in 0..n {
            if del_n[p] < 0.0 || del_n[p] >= 1.0 {
                return Err("normal weakness must be within [0, 1)");
            }
            if del_v[p] < 0.0 || del_v[p] >= 1.0 {
                return Err("vertical-tangential weakness must be within [0, 1)");
            }
            if del_h[p] < 0.0 || del_h[p] >= 1.0 {
                return Err("horizontal-tangential weakness must be within [0, 1)");
            }
            if c11_b[p] <= 0.0 || c33_b[p] <= 0.0 || c44_b[p] <= 0.0 || c66_b[p] <= 0.0 {
                return Err("background stiffness coefficients must be positive");
            }
            let c12_b = c11_b[p] - 2.0 * c66_b[p];
            let ratio = c12_b / c11_b[p];
            field.c11.push(c11_b[p] * (1.0 - del_n[p]));
            field.c12.push(c12_b * (1.0 - del_n[p]));
            field.c13.push(c13_b[p] * (1.0 - del_n[p]));
            field.c22.push(c11_b[p] * (1.0 - del_n[p] * ratio * ratio));
            field.c23.push(c13_b[p] * (1.0 - del_n[p] * ratio));
            field
                .c33
                .push(c33_b[p] * (1.0 - del_n[p] * c13_b[p] * c13_b[p] / (c33_b[p] * c11_b[p])));
            field.c44.push(c44_b[p]);
            field.c55.push(c44_b[p] * (1.0 - del_v[p]));
            field.c66.push(c66_b[p] * (1.0 - del_h[p]));
        }
        Ok(OrthorhombicModel { field })
    }
}

/// Builds HTI stiffness fields for a fractured isotropic medium
///
/// The two-weakness parameterization: a normal weakness δN and a single
/// tangential weakness δT acting on both shear directions, superposed on an
/// isotropic background. The fracture normal lies along the x-axis.
pub struct HtiModel {
    /// Effective stiffness coefficient fields
    pub field: StiffnessField,
}

impl HtiModel {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `param` -- the background medium parameters (must be isotropic)
    /// * `del_n`, `del_t` -- co-located weakness fields
    pub fn new(param: &ParamBackground, del_n: &[f64], del_t: &[f64]) -> Result<Self, StrError> {
        match param {
            ParamBackground::Isotropic { .. } => (),
            _ => return Err("HTI model requires an isotropic background"),
        }
        let bg = BackgroundModel::new(param)?;
        let n = del_n.len();
        if n == 0 {
            return Err("field arrays must not be empty");
        }
        if del_t.len() != n {
            return Err("field arrays must have the same length");
        }
        let (c11_b, c44_b) = (bg.cc.get(0, 0), bg.cc.get(3, 3));
        let c12_b = c11_b - 2.0 * c44_b;
        let ratio = c12_b / c11_b;
        let mut field = StiffnessField::with_capacity(n);
        for p in 0..n {
            if del_n[p] < 0.0 || del_n[p] >= 1.0 {
                return Err("normal weakness must be within [0, 1)");
            }
            if del_t[p] < 0.0 || del_t[p] >= 1.0 {
                return Err("tangential weakness must be within [0, 1)");
            }
            field.c11.push(c11_b * (1.0 - del_n[p]));
            field.c12.push(c12_b * (1.0 - del_n[p]));
            field.c13.push(c12_b * (1.0 - del_n[p]));
            field.c22.push(c11_b * (1.0 - del_n[p] * ratio * ratio));
            field.c23.push(c12_b * (1.0 - del_n[p] * ratio));
            field.c33.push(c11_b * (1.0 - del_n[p] * ratio * ratio));
            field.c44.push(c44_b);
            field.c55.push(c44_b * (1.0 - del_t[p]));
            field.c66.push(c44_b * (1.0 - del_t[p]));
        }
        Ok(HtiModel { field })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{orthorhombic_stiffness, HtiModel, OrthorhombicModel};
    use crate::base::{ParamFractureSet, SampleParams};
    use crate::model::BackgroundModel;
    use russell_lab::approx_eq;

    #[test]
    fn orthorhombic_stiffness_works() {
        let bg = BackgroundModel::new(&SampleParams::param_thomsen_background()).unwrap();
        let param = ParamFractureSet {
            del_n: 0.1,
            del_v: 0.15,
            del_h: 0.2,
            azimuth: 0.0,
        };
        let cc = orthorhombic_stiffness(&bg.cc, &param).unwrap();
        let (c11_b, c12_b, c13_b) = (bg.cc.get(0, 0), bg.cc.get(0, 1), bg.cc.get(0, 2));
        let (c33_b, c44_b, c66_b) = (bg.cc.get(2, 2), bg.cc.get(3, 3), bg.cc.get(5, 5));
        approx_eq(cc.get(0, 0), c11_b * 0.9, 1e-6);
        approx_eq(cc.get(0, 1), c12_b * 0.9, 1e-6);
        approx_eq(cc.get(0, 2), c13_b * 0.9, 1e-6);
        approx_eq(
            cc.get(1, 1),
            c11_b * (1.0 - 0.1 * (c12_b / c11_b) * (c12_b / c11_b)),
            1e-6,
        );
        approx_eq(cc.get(1, 2), c13_b * (1.0 - 0.1 * c12_b / c11_b), 1e-6);
        approx_eq(cc.get(2, 2), c33_b * (1.0 - 0.1 * c13_b * c13_b / (c33_b * c11_b)), 1e-6);
        assert_eq!(cc.get(3, 3), c44_b);
        approx_eq(cc.get(4, 4), c44_b * 0.85, 1e-6);
        approx_eq(cc.get(5, 5), c66_b * 0.8, 1e-6);
        // the coupling entries stay zero
        assert_eq!(cc.get(0, 5), 0.0);
        assert_eq!(cc.get(1, 5), 0.0);
        assert_eq!(cc.get(2, 5), 0.0);
        assert_eq!(cc.get(3, 4), 0.0);
    }

    #[test]
    fn orthorhombic_stiffness_captures_nonzero_azimuth() {
        let bg = BackgroundModel::new(&SampleParams::param_thomsen_background()).unwrap();
        let param = SampleParams::param_fracture_set_one();
        assert_eq!(
            orthorhombic_stiffness(&bg.cc, &param).err(),
            Some("closed-form stiffness requires a zero azimuth")
        );
    }

    #[test]
    fn orthorhombic_model_works() {
        let param = SampleParams::param_thomsen_background();
        let del_n = [0.0, 0.1, 0.3];
        let del_v = [0.0, 0.15, 0.2];
        let del_h = [0.0, 0.2, 0.1];
        let model = OrthorhombicModel::new(&param, &del_n, &del_v, &del_h).unwrap();
        assert_eq!(model.field.len(), 3);
        let bg = BackgroundModel::new(&param).unwrap();
        // zero weaknesses recover the background at the first location
        assert_eq!(model.field.c11[0], bg.cc.get(0, 0));
        assert_eq!(model.field.c33[0], bg.cc.get(2, 2));
        assert_eq!(model.field.c66[0], bg.cc.get(5, 5));
        // each location matches the scalar closed form
        for p in 0..3 {
            let set = ParamFractureSet {
                del_n: del_n[p],
                del_v: del_v[p],
                del_h: del_h[p],
                azimuth: 0.0,
            };
            let cc = orthorhombic_stiffness(&bg.cc, &set).unwrap();
            approx_eq(model.field.c11[p], cc.get(0, 0), 1e-6);
            approx_eq(model.field.c22[p], cc.get(1, 1), 1e-6);
            approx_eq(model.field.c23[p], cc.get(1, 2), 1e-6);
            approx_eq(model.field.c33[p], cc.get(2, 2), 1e-6);
            approx_eq(model.field.c55[p], cc.get(4, 4), 1e-6);
            approx_eq(model.field.c66[p], cc.get(5, 5), 1e-6);
        }
    }

    #[test]
    fn with_fields_captures_errors() {
        let c = [1.0, 1.0];
        let short = [0.1];
        assert_eq!(
            OrthorhombicModel::with_fields(&c, &c, &c, &c, &c, &short, &short, &short).err(),
            Some("field arrays must have the same length")
        );
        let empty: [f64; 0] = [];
        assert_eq!(
            OrthorhombicModel::with_fields(&empty, &empty, &empty, &empty, &empty, &empty, &empty, &empty).err(),
            Some("field arrays must not be empty")
        );
        let bad = [0.1, 1.0];
        let ok = [0.1, 0.2];
        assert_eq!(
            OrthorhombicModel::with_fields(&c, &c, &c, &c, &c, &bad, &ok, &ok).err(),
            Some("normal weakness must be within [0, 1)")
        );
    }

    #[test]
    fn hti_model_works() {
        let param = SampleParams::param_isotropic_background();
        let del_n = [0.0, 0.1];
        let del_t = [0.0, 0.05];
        let model = HtiModel::new(&param, &del_n, &del_t).unwrap();
        let bg = BackgroundModel::new(&param).unwrap();
        let (c11_b, c44_b) = (bg.cc.get(0, 0), bg.cc.get(3, 3));
        let c12_b = c11_b - 2.0 * c44_b;
        assert_eq!(model.field.c11[0], c11_b);
        assert_eq!(model.field.c55[0], c44_b);
        approx_eq(model.field.c11[1], c11_b * 0.9, 1e-6);
        approx_eq(model.field.c12[1], c12_b * 0.9, 1e-6);
        approx_eq(model.field.c55[1], c44_b * 0.95, 1e-6);
        approx_eq(model.field.c66[1], c44_b * 0.95, 1e-6);
        assert_eq!(model.field.c44[1], c44_b);
        // the isotropic background makes c33 match c22
        assert_eq!(model.field.c33[1], model.field.c22[1]);
    }

    #[test]
    fn hti_model_captures_errors() {
        let vti = SampleParams::param_thomsen_background();
        assert_eq!(
            HtiModel::new(&vti, &[0.1], &[0.05]).err(),
            Some("HTI model requires an isotropic background")
        );
        let iso = SampleParams::param_isotropic_background();
        assert_eq!(
            HtiModel::new(&iso, &[0.1], &[0.05, 0.1]).err(),
            Some("field arrays must have the same length")
        );
        assert_eq!(
            HtiModel::new(&iso, &[0.1], &[1.0]).err(),
            Some("tangential weakness must be within [0, 1)")
        );
    }
}
