//! Persisted application settings.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{self, Context};
use serde::{Deserialize, Serialize};

use crate::auxiliary::parameters::UserParameters;

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;

/// An error indicating that the persisted settings store cannot be parsed. This is fatal: the
/// store is never repaired automatically.
#[derive(Debug, Clone)]
pub struct MalformedSettingsError {
    /// The path of the unparsable settings file.
    pub path: PathBuf,
}

impl fmt::Display for MalformedSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The settings file is broken. Please delete the file and restart this application.\n\
             File path: {}",
            self.path.display()
        )
    }
}

impl Error for MalformedSettingsError {}

/// A structure containing the persisted user settings of the application.
///
/// The settings store is an explicit value with caller-controlled lifecycle: it is loaded once at
/// application start and passed down by reference, never reconstructed implicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// The index of the totally symmetric irreducible representation of the target state.
    pub totsym: usize,

    /// The index of the root to be selected.
    pub selectroot: usize,

    /// The maximum number of holes allowed in the RAS1 window.
    pub ras1_max_hole: usize,

    /// The maximum number of electrons allowed in the RAS3 window.
    pub ras3_max_electron: usize,

    /// Boolean indicating if the DIRAC version used is 21 or later.
    pub dirac_ver_21_or_later: bool,

    /// The colour theme of the classification table presentation.
    pub color_theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            totsym: 1,
            selectroot: 1,
            ras1_max_hole: 0,
            ras3_max_electron: 0,
            dirac_ver_21_or_later: false,
            color_theme: "default".to_string(),
        }
    }
}

impl Settings {
    /// Loads the settings from `path`, creating the file with default settings first if it does
    /// not exist.
    ///
    /// # Errors
    ///
    /// [`MalformedSettingsError`] if the file exists but cannot be parsed.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        if !path.exists() {
            let settings = Self::default();
            settings.save(path)?;
            return Ok(settings);
        }
        let reader = BufReader::new(File::open(path).with_context(|| {
            format!("Unable to open the settings file `{}`", path.display())
        })?);
        serde_json::from_reader(reader).map_err(|_| {
            MalformedSettingsError {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    /// Saves the settings to `path`, fully overwriting any pre-existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), anyhow::Error> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path).with_context(|| {
            format!("Unable to create the settings file `{}`", path.display())
        })?);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Unable to serialise settings to `{}`", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Unable to serialise settings to `{}`", path.display()))
    }

    /// Returns the user parameters held in these settings.
    pub fn user_parameters(&self) -> UserParameters {
        UserParameters {
            totsym: self.totsym,
            selectroot: self.selectroot,
            ras1_max_hole: self.ras1_max_hole,
            ras3_max_electron: self.ras3_max_electron,
            dirac_version_21_or_later: self.dirac_ver_21_or_later,
        }
    }
}
