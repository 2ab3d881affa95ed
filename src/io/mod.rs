//! Input/output for persisted dcaspt2gen artifacts.

use std::env;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{self, format_err, Context};
use serde::de::DeserializeOwned;

pub mod format;
pub mod settings;

/// A structure locating the application-managed files of `dcaspt2gen`.
///
/// The application directory holds the persisted settings store and the active IVO standard
/// input, both of which are fully overwritten in place whenever they change.
#[derive(Clone, Debug)]
pub struct AppDirInfo {
    /// The application directory.
    pub app_dir: PathBuf,

    /// The path of the persisted JSON settings store.
    pub settings_file: PathBuf,

    /// The fixed path of the active IVO standard input.
    pub ivo_input_file: PathBuf,
}

impl AppDirInfo {
    /// Locates the per-user application directory (`~/.dcaspt2gen`), creating it if absent.
    pub fn new() -> Result<Self, anyhow::Error> {
        let home = env::var_os("HOME")
            .map(PathBuf::from)
            .ok_or_else(|| format_err!("Unable to determine the home directory from `HOME`."))?;
        Self::in_dir(home.join(".dcaspt2gen"))
    }

    /// Uses `app_dir` as the application directory, creating it if absent.
    pub fn in_dir<P: AsRef<Path>>(app_dir: P) -> Result<Self, anyhow::Error> {
        let app_dir = app_dir.as_ref().to_path_buf();
        fs::create_dir_all(&app_dir).with_context(|| {
            format!(
                "Unable to create the application directory `{}`",
                app_dir.display()
            )
        })?;
        Ok(Self {
            settings_file: app_dir.join("settings.json"),
            ivo_input_file: app_dir.join("active.ivo.inp"),
            app_dir,
        })
    }
}

/// Reads a `dcaspt2gen` YAML file and deserialises it into an appropriate structure.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in (with its `.yml` or `.yaml` extension).
///
/// # Returns
///
/// A `Result` containing the structure deserialised from the read-in file.
pub fn read_dcg_yaml<T, P: AsRef<Path>>(name: P) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(File::open(name).map_err(|err| format_err!(err))?);
    serde_yaml::from_reader(&mut reader).map_err(|err| format_err!(err))
}

/// Writes a serialised input artifact, fully overwriting any pre-existing file at `path`.
///
/// The text is assembled in full by the serialisers before this is called, so a failed derivation
/// never leaves a partial artifact behind.
pub fn write_input_artifact<P: AsRef<Path>>(path: P, text: &str) -> Result<(), anyhow::Error> {
    let mut writer = BufWriter::new(File::create(&path).map_err(|err| format_err!(err))?);
    writer
        .write_all(text.as_bytes())
        .map_err(|err| format_err!(err))?;
    writer.flush().map_err(|err| format_err!(err))
}

/// Appends a bare line terminated by `\n` to an input text buffer.
pub(crate) fn push_line(buf: &mut String, line: &str) {
    buf.push_str(line);
    buf.push('\n');
}

/// Appends a `key\nvalue\n` block to an input text buffer.
pub(crate) fn push_field(buf: &mut String, key: &str, value: &str) {
    push_line(buf, key);
    push_line(buf, value);
}
