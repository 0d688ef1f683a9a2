use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the thirteen independent stiffness coefficients of a monoclinic medium
///
/// For orthorhombic and higher symmetries the four coupling coefficients
/// (c16, c26, c36, c45) are zero and the nine remaining values describe the
/// medium completely.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StiffnessCoefficients {
    pub c11: f64,
    pub c12: f64,
    pub c13: f64,
    pub c16: f64,
    pub c22: f64,
    pub c23: f64,
    pub c26: f64,
    pub c33: f64,
    pub c36: f64,
    pub c44: f64,
    pub c45: f64,
    pub c55: f64,
    pub c66: f64,
}

impl StiffnessCoefficients {
    /// Extracts the coefficients from a stiffness matrix (6×6, Voigt notation)
    pub fn from_matrix(cc: &Matrix) -> Result<Self, StrError> {
        if cc.nrow() != 6 || cc.ncol() != 6 {
            return Err("stiffness matrix must be 6×6");
        }
        Ok(StiffnessCoefficients {
            c11: cc.get(0, 0),
            c12: cc.get(0, 1),
            c13: cc.get(0, 2),
            c16: cc.get(0, 5),
            c22: cc.get(1, 1),
            c23: cc.get(1, 2),
            c26: cc.get(1, 5),
            c33: cc.get(2, 2),
            c36: cc.get(2, 5),
            c44: cc.get(3, 3),
            c45: cc.get(3, 4),
            c55: cc.get(4, 4),
            c66: cc.get(5, 5),
        })
    }

    /// Returns the coefficients divided by the density
    ///
    /// The result holds squared-velocity-like values (the "A" parameters).
    pub fn density_normalized(&self, density: f64) -> Result<Self, StrError> {
        if density <= 0.0 {
            return Err("density must be positive");
        }
        Ok(StiffnessCoefficients {
            c11: self.c11 / density,
            c12: self.c12 / density,
            c13: self.c13 / density,
            c16: self.c16 / density,
            c22: self.c22 / density,
            c23: self.c23 / density,
            c26: self.c26 / density,
            c33: self.c33 / density,
            c36: self.c36 / density,
            c44: self.c44 / density,
            c45: self.c45 / density,
            c55: self.c55 / density,
            c66: self.c66 / density,
        })
    }

    /// Reads a JSON file containing this struct
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let data = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(data)
    }

    /// Writes a JSON file with this struct
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

/// Holds spatially varying stiffness coefficients of an orthorhombic medium
///
/// Each coefficient is a field with one value per spatial location; all nine
/// fields share the same length.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StiffnessField {
    pub c11: Vec<f64>,
    pub c12: Vec<f64>,
    pub c13: Vec<f64>,
    pub c22: Vec<f64>,
    pub c23: Vec<f64>,
    pub c33: Vec<f64>,
    pub c44: Vec<f64>,
    pub c55: Vec<f64>,
    pub c66: Vec<f64>,
}

impl StiffnessField {
    /// Allocates an empty instance with pre-reserved capacity
    pub(crate) fn with_capacity(n: usize) -> Self {
        StiffnessField {
            c11: Vec::with_capacity(n),
            c12: Vec::with_capacity(n),
            c13: Vec::with_capacity(n),
            c22: Vec::with_capacity(n),
            c23: Vec::with_capacity(n),
            c33: Vec::with_capacity(n),
            c44: Vec::with_capacity(n),
            c55: Vec::with_capacity(n),
            c66: Vec::with_capacity(n),
        }
    }

    /// Returns the number of spatial locations
    pub fn len(&self) -> usize {
        self.c11.len()
    }

    /// Returns true if there are no spatial locations
    pub fn is_empty(&self) -> bool {
        self.c11.is_empty()
    }

    /// Reads a JSON file containing this struct
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let data = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(data)
    }

    /// Writes a JSON file with this struct
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{StiffnessCoefficients, StiffnessField};
    use crate::base::DEFAULT_TEST_DIR;
    use russell_lab::{approx_eq, Matrix};

    #[test]
    fn from_matrix_works() {
        let mut cc = Matrix::new(6, 6);
        for i in 0..6 {
            for j in 0..6 {
                cc.set(i, j, (1 + i * 6 + j) as f64);
            }
        }
        let coefficients = StiffnessCoefficients::from_matrix(&cc).unwrap();
        assert_eq!(coefficients.c11, 1.0);
        assert_eq!(coefficients.c12, 2.0);
        assert_eq!(coefficients.c13, 3.0);
        assert_eq!(coefficients.c16, 6.0);
        assert_eq!(coefficients.c22, 8.0);
        assert_eq!(coefficients.c23, 9.0);
        assert_eq!(coefficients.c26, 12.0);
        assert_eq!(coefficients.c33, 15.0);
        assert_eq!(coefficients.c36, 18.0);
        assert_eq!(coefficients.c44, 22.0);
        assert_eq!(coefficients.c45, 23.0);
        assert_eq!(coefficients.c55, 29.0);
        assert_eq!(coefficients.c66, 36.0);
        let wrong = Matrix::new(3, 3);
        assert_eq!(
            StiffnessCoefficients::from_matrix(&wrong).err(),
            Some("stiffness matrix must be 6×6")
        );
    }

    #[test]
    fn density_normalized_works() {
        let cc = Matrix::from(&[
            [2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 4.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0, 4.0],
        ]);
        let coefficients = StiffnessCoefficients::from_matrix(&cc).unwrap();
        let normalized = coefficients.density_normalized(2.0).unwrap();
        approx_eq(normalized.c11, 1.0, 1e-15);
        approx_eq(normalized.c44, 2.0, 1e-15);
        assert_eq!(
            coefficients.density_normalized(0.0).err(),
            Some("density must be positive")
        );
    }

    #[test]
    fn json_roundtrip_works() {
        let cc = Matrix::from(&[
            [9.0, 3.0, 3.0, 0.0, 0.0, 0.5],
            [3.0, 9.0, 3.0, 0.0, 0.0, 0.5],
            [3.0, 3.0, 9.0, 0.0, 0.0, 0.5],
            [0.0, 0.0, 0.0, 2.0, 0.1, 0.0],
            [0.0, 0.0, 0.0, 0.1, 2.0, 0.0],
            [0.5, 0.5, 0.5, 0.0, 0.0, 2.0],
        ]);
        let coefficients = StiffnessCoefficients::from_matrix(&cc).unwrap();
        let path = format!("{}/stiffness_coefficients.json", DEFAULT_TEST_DIR);
        coefficients.write_json(&path).unwrap();
        let back = StiffnessCoefficients::read_json(&path).unwrap();
        assert_eq!(back.c11, 9.0);
        assert_eq!(back.c16, 0.5);
        assert_eq!(back.c45, 0.1);
    }

    #[test]
    fn field_json_roundtrip_works() {
        let field = StiffnessField {
            c11: vec![9.0, 8.0],
            c12: vec![3.0, 2.5],
            c13: vec![3.0, 2.5],
            c22: vec![9.0, 8.0],
            c23: vec![3.0, 2.5],
            c33: vec![9.0, 8.0],
            c44: vec![2.0, 1.5],
            c55: vec![2.0, 1.5],
            c66: vec![2.0, 1.5],
        };
        assert_eq!(field.len(), 2);
        assert!(!field.is_empty());
        let path = format!("{}/stiffness_field.json", DEFAULT_TEST_DIR);
        field.write_json(&path).unwrap();
        let back = StiffnessField::read_json(&path).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.c11, &[9.0, 8.0]);
        assert_eq!(back.c66, &[2.0, 1.5]);
    }
}
