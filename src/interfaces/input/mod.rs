//! YAML job input for headless input generation.

use std::path::{Path, PathBuf};

use anyhow::{self, Context};
use serde::{Deserialize, Serialize};

use crate::auxiliary::parameters::UserParameters;
use crate::auxiliary::spinor::{HeaderInfo, SpinorRecord, SpinorTable};
use crate::drivers::caspt2_input::Caspt2InputDriver;
use crate::drivers::ivo_input::IvoInputDriver;
use crate::drivers::spinor_classification::{
    SpinorClassificationDriver, SpinorClassificationParams,
};
use crate::drivers::Dcaspt2GenDriver;
use crate::io::format::dcg_warn;
use crate::io::settings::Settings;
use crate::io::{read_dcg_yaml, AppDirInfo};

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;

/// A structure containing a `dcaspt2gen` job which can be serialised into and deserialised from a
/// YAML input file.
///
/// The job file is the headless counterpart of the classification table of the graphical
/// front-end: it declares the header information of the summarised DIRAC output, the classified
/// spinor rows in table order, and optionally overrides for the persisted user parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Input {
    /// The header information of the summarised DIRAC output.
    pub header: HeaderInfo,

    /// The classified spinor rows, in table order.
    pub spinors: Vec<SpinorRecord>,

    /// Optional user parameters overriding the persisted settings for this job.
    ///
    /// If not specified, the parameters of the settings store are used.
    #[serde(default)]
    pub user_parameters: Option<UserParameters>,

    /// Optional path the generated CASPT2 input file is written to.
    ///
    /// If not specified, the CASPT2 input is derived but not persisted.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Input {
    /// Reads a job from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        read_dcg_yaml(path)
            .with_context(|| format!("Unable to read the job file `{}`", path.display()))
    }

    /// Returns the classified spinor table of this job.
    pub fn table(&self) -> SpinorTable {
        SpinorTable::new(self.spinors.clone())
    }

    /// Handles the job: aggregates the classification, then derives and persists both input
    /// artifacts.
    ///
    /// Every invocation is a full derivation pass: all aggregate structures are recomputed from
    /// the current table state and the IVO standard input under the application directory is
    /// fully overwritten.
    ///
    /// # Arguments
    ///
    /// * `dirs` - The application-managed file locations.
    /// * `settings` - The persisted settings, used when the job carries no parameter overrides.
    /// * `output` - An optional CASPT2 output path taking precedence over [`Self::output`].
    pub fn handle(
        &self,
        dirs: &AppDirInfo,
        settings: &Settings,
        output: Option<&Path>,
    ) -> Result<(), anyhow::Error> {
        let table = self.table();
        let classification_params = SpinorClassificationParams::default();
        let mut classification_driver = SpinorClassificationDriver::builder()
            .parameters(&classification_params)
            .table(&table)
            .header(Some(&self.header))
            .build()
            .with_context(|| "Unable to construct a spinor classification driver")?;
        classification_driver
            .run()
            .with_context(|| "Unable to aggregate the classified spinor table")?;
        let classification = classification_driver.result()?;

        let raw_params = self
            .user_parameters
            .clone()
            .unwrap_or_else(|| settings.user_parameters());
        let params = raw_params.clamped(
            classification.ras1_max_hole_cap,
            classification.ras3_max_electron_cap,
        );
        if params != raw_params {
            dcg_warn!(
                "RAS window bounds clamped to the current classification: ras1 max hole {}, \
                 ras3 max electron {}.",
                params.ras1_max_hole,
                params.ras3_max_electron
            );
        }

        let output = output.or(self.output.as_deref());
        let mut caspt2_driver = Caspt2InputDriver::builder()
            .parameters(&params)
            .table(&table)
            .classification(classification)
            .output(output.map(Path::to_path_buf))
            .build()
            .with_context(|| "Unable to construct a CASPT2 input driver")?;
        caspt2_driver
            .run()
            .with_context(|| "Unable to serialise the CASPT2 input")?;

        let mut ivo_driver = IvoInputDriver::builder()
            .parameters(&params)
            .table(&table)
            .header(&self.header)
            .output(Some(dirs.ivo_input_file.clone()))
            .build()
            .with_context(|| "Unable to construct an IVO input driver")?;
        ivo_driver
            .run()
            .with_context(|| "Unable to serialise the IVO standard input")?;
        Ok(())
    }
}
