//! Interface with the external `sum_dirac_dfcoef` summarisation program.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{self, bail, Context};

use crate::io::format::{dcg_error, dcg_output};

#[cfg(test)]
#[path = "dfcoef_tests.rs"]
mod dfcoef_tests;

/// Summarises a DIRAC output file by running the external `sum_dirac_dfcoef` program on it.
///
/// # Arguments
///
/// * `dirac_output` - The path of the DIRAC output file to be summarised.
/// * `molecule_name` - The molecule formula of the DIRAC calculation, used to name the summary.
///
/// # Returns
///
/// The path of the summarised output. A non-zero exit of the summariser is reported and raised as
/// an error; no input generation takes place in that case.
pub fn run_sum_dirac_dfcoef<P: AsRef<Path>>(
    dirac_output: P,
    molecule_name: &str,
) -> Result<PathBuf, anyhow::Error> {
    run_summariser("sum_dirac_dfcoef", dirac_output.as_ref(), molecule_name)
}

fn run_summariser(
    program: &str,
    dirac_output: &Path,
    molecule_name: &str,
) -> Result<PathBuf, anyhow::Error> {
    let summary_path = PathBuf::from(format!("{molecule_name}.out"));
    dcg_output!(
        "Summarising `{}` with `{program}`...",
        dirac_output.display()
    );
    let status = Command::new(program)
        .arg("-i")
        .arg(dirac_output)
        .arg("-m")
        .arg(molecule_name)
        .arg("-d")
        .arg("3")
        .arg("-c")
        .status()
        .with_context(|| format!("Unable to invoke the `{program}` program"))?;
    if !status.success() {
        dcg_error!(
            "The `{program}` program failed on `{}`.",
            dirac_output.display()
        );
        bail!(
            "An error occurred while running the `{program}` program ({status}). Please check \
             the output file. Path: {}",
            dirac_output.display()
        );
    }
    dcg_output!("Summary written to `{}`.", summary_path.display());
    dcg_output!("");
    Ok(summary_path)
}
