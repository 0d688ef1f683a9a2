use effmed::prelude::*;
use effmed::StrError;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "effmed_build_model",
    about = "Builds the effective stiffness model of a fractured medium"
)]
struct Options {
    /// Job file (JSON) with background and fracture-set parameters
    job_file: String,

    /// Output file (JSON) for the stiffness coefficients
    model_file: String,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load job
    let job = ModelJob::read_json(&options.job_file)?;

    // build model
    let coefficients = job.run()?;

    // write coefficients
    coefficients.write_json(&options.model_file)?;

    // message
    let thin_line = format!("{:─^1$}", "", options.model_file.len());
    println!("\n\n{}", thin_line);
    println!("stiffness coefficients written to:");
    println!("{}", options.model_file);
    println!("{}\n\n", thin_line);
    Ok(())
}
