use super::{bond_rotation, excess_compliance, orthorhombic_stiffness, BackgroundModel, StiffnessCoefficients};
use crate::base::{ParamBackground, ParamFractureSet};
use crate::StrError;
use russell_lab::{mat_inverse, mat_mat_mul, Matrix};

/// Computes the effective stiffness of a medium with multiple fracture sets
///
/// Each fracture set contributes an excess compliance in its own local frame.
/// The contributions are rotated to the global frame, summed, and combined
/// with the background stiffness `Cb`:
///
/// ```text
/// S = Σᵢ Rᵢ · Dᵢ · Rᵢᵀ
///
/// Ceff = Cb · (I + S · Cb)⁻¹
/// ```
///
/// Two or more sets with distinct, non-orthogonal azimuths produce a
/// monoclinic medium; a single set with the normal along x produces an
/// orthorhombic (or HTI) medium, in which case the equivalent closed-form
/// expressions are used directly.
pub struct EffectiveModel {
    /// Effective stiffness matrix (6×6, Voigt notation)
    pub cc: Matrix,

    /// Background density ρ
    pub density: f64,
}

impl EffectiveModel {
    /// Allocates a new instance from background and fracture-set parameters
    ///
    /// # Input
    ///
    /// * `param` -- the background medium parameters
    /// * `sets` -- one or more fracture sets, in any order
    pub fn new(param: &ParamBackground, sets: &[ParamFractureSet]) -> Result<Self, StrError> {
        if sets.is_empty() {
            return Err("at least one fracture set is required");
        }
        let bg = BackgroundModel::new(param)?;
        // a single set with the normal along x has a closed-form solution
        let cc = if sets.len() == 1 && sets[0].azimuth == 0.0 {
            orthorhombic_stiffness(&bg.cc, &sets[0])?
        } else {
            effective_stiffness(&bg.cc, sets)?
        };
        Ok(EffectiveModel {
            cc,
            density: bg.density,
        })
    }

    /// Returns the independent stiffness coefficients
    pub fn coefficients(&self) -> Result<StiffnessCoefficients, StrError> {
        StiffnessCoefficients::from_matrix(&self.cc)
    }

    /// Returns the density-normalized stiffness coefficients (A parameters)
    pub fn coefficients_normalized(&self) -> Result<StiffnessCoefficients, StrError> {
        self.coefficients()?.density_normalized(self.density)
    }
}

/// Computes the effective stiffness by compliance superposition and inversion
///
/// Implements `Ceff = Cb · (I + S · Cb)⁻¹` with `S = Σᵢ Rᵢ · Dᵢ · Rᵢᵀ` for a
/// general (symmetric) background stiffness `Cb` and any number of vertical
/// fracture sets. The summation order is irrelevant.
///
/// # Input
///
/// * `cb` -- the background stiffness matrix (6×6, Voigt notation)
/// * `sets` -- one or more fracture sets
pub fn effective_stiffness(cb: &Matrix, sets: &[ParamFractureSet]) -> Result<Matrix, StrError> {
    if cb.nrow() != 6 || cb.ncol() != 6 {
        return Err("background stiffness matrix must be 6×6");
    }
    if sets.is_empty() {
        return Err("at least one fracture set is required");
    }

    // global excess compliance; D is diagonal with entries at
    // (0,0), (4,4), and (5,5) only, hence R·D·Rᵀ reduces to a
    // three-term sum over the active columns of R
    let mut ss = Matrix::new(6, 6);
    for set in sets {
        let dd = excess_compliance(cb, set)?;
        let rr = bond_rotation(set.azimuth);
        for i in 0..6 {
            for j in 0..6 {
                let mut sum = 0.0;
                for k in [0, 4, 5] {
                    sum += rr.get(i, k) * dd.get(k, k) * rr.get(j, k);
                }
                ss.set(i, j, ss.get(i, j) + sum);
            }
        }
    }

    // T = I + S·Cb
    let mut tt = Matrix::new(6, 6);
    mat_mat_mul(&mut tt, 1.0, &ss, cb, 0.0)?;
    for i in 0..6 {
        tt.set(i, i, tt.get(i, i) + 1.0);
    }

    // Ceff = Cb·T⁻¹
    let mut tt_inv = Matrix::new(6, 6);
    mat_inverse(&mut tt_inv, &tt).map_err(|_| "cannot invert the effective-compliance matrix")?;
    let mut cc = Matrix::new(6, 6);
    mat_mat_mul(&mut cc, 1.0, cb, &tt_inv, 0.0)?;
    Ok(cc)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
