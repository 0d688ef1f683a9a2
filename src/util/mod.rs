//! Contains utility structures for job and file handling

mod model_job;
pub use crate::util::model_job::*;
