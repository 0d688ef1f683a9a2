use crate::base::{ParamBackground, ParamFractureSet};
use crate::model::{EffectiveModel, StiffnessCoefficients};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a model-building job
///
/// A job names the background medium, the fracture sets, and the output
/// options; it maps one-to-one to the JSON files consumed by the
/// `effmed_build_model` binary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelJob {
    /// Background medium parameters
    pub background: ParamBackground,

    /// Fracture sets (one or more)
    pub fracture_sets: Vec<ParamFractureSet>,

    /// Divides the output coefficients by the density
    pub density_normalize: bool,
}

impl ModelJob {
    /// Runs the job and returns the resulting stiffness coefficients
    pub fn run(&self) -> Result<StiffnessCoefficients, StrError> {
        let model = EffectiveModel::new(&self.background, &self.fracture_sets)?;
        if self.density_normalize {
            model.coefficients_normalized()
        } else {
            model.coefficients()
        }
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
        let job = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(job)
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
