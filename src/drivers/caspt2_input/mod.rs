//! Driver for serialising the full CASPT2 input block.

use std::fmt;
use std::path::PathBuf;

use anyhow::{self, bail, format_err, Context};
use derive_builder::Builder;
use itertools::Itertools;

use crate::auxiliary::parameters::UserParameters;
use crate::auxiliary::spinor::{SpinorCategory, SpinorTable};
use crate::drivers::spinor_classification::{CategoryCounts, SpinorClassificationResult};
use crate::drivers::{Dcaspt2GenDriver, ValidationError};
use crate::io::format::{dcg_output, log_title, Dcaspt2GenOutput};
use crate::io::{push_field, push_line, write_input_artifact};


// =========
// Functions
// =========

/// Serializes the full CASPT2 input block.
///
/// The block consists of `key\nvalue\n` pairs in fixed key order, followed by the conditional
/// RAS window blocks: a window block is emitted only when its index list is non-empty, and the
/// RAS1 (RAS3) block additionally carries the maximum-hole (maximum-electron) parameter on its
/// own line.
///
/// # Arguments
///
/// * `counts` - The per-category spinor counts.
/// * `ras1_indices` - The one-based spinor indices of the RAS1 window, sorted ascending.
/// * `ras2_indices` - The one-based spinor indices of the RAS2 window, sorted ascending.
/// * `ras3_indices` - The one-based spinor indices of the RAS3 window, sorted ascending.
/// * `params` - The user parameters.
///
/// # Returns
///
/// The serialised input text.
pub fn serialise_full(
    counts: &CategoryCounts,
    ras1_indices: &[usize],
    ras2_indices: &[usize],
    ras3_indices: &[usize],
    params: &UserParameters,
) -> String {
    let mut out = String::new();
    push_field(&mut out, "ncore", &counts.core.to_string());
    push_field(&mut out, "ninact", &counts.inactive.to_string());
    push_field(&mut out, "nact", &counts.n_active().to_string());
    push_field(&mut out, "nsec", &counts.secondary.to_string());
    push_field(&mut out, "nbas", &counts.n_basis().to_string());
    push_field(&mut out, "nroot", &params.selectroot.to_string());
    push_field(&mut out, "selectroot", &params.selectroot.to_string());
    push_field(&mut out, "totsym", &params.totsym.to_string());
    push_field(&mut out, "diracver", params.dirac_version_str());
    if !ras1_indices.is_empty() {
        push_field(&mut out, "ras1", &ras1_indices.iter().join(" "));
        push_line(&mut out, &params.ras1_max_hole.to_string());
    }
    if !ras2_indices.is_empty() {
        push_field(&mut out, "ras2", &ras2_indices.iter().join(" "));
    }
    if !ras3_indices.is_empty() {
        push_field(&mut out, "ras3", &ras3_indices.iter().join(" "));
        push_line(&mut out, &params.ras3_max_electron.to_string());
    }
    out
}

// ==================
// Struct definitions
// ==================

// ------
// Result
// ------

/// A structure to contain the serialised full CASPT2 input.
#[derive(Clone, Builder, Debug)]
pub struct Caspt2InputResult {
    /// The one-based spinor indices of the RAS1 window, sorted ascending.
    pub ras1_indices: Vec<usize>,

    /// The one-based spinor indices of the RAS2 window, sorted ascending.
    pub ras2_indices: Vec<usize>,

    /// The one-based spinor indices of the RAS3 window, sorted ascending.
    pub ras3_indices: Vec<usize>,

    /// The serialised input text.
    pub input_text: String,
}

impl Caspt2InputResult {
    /// Returns a builder to construct a [`Caspt2InputResult`] structure.
    fn builder() -> Caspt2InputResultBuilder {
        Caspt2InputResultBuilder::default()
    }
}

impl fmt::Display for Caspt2InputResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.input_text)
    }
}

// ------
// Driver
// ------

/// A driver for serialising the full CASPT2 input from a classified spinor table.
#[derive(Clone, Builder)]
pub struct Caspt2InputDriver<'a> {
    /// The user parameters controlling the serialisation.
    parameters: &'a UserParameters,

    /// The classified spinor table.
    table: &'a SpinorTable,

    /// The aggregated classification of the table.
    classification: &'a SpinorClassificationResult,

    /// Optional user-chosen path the input text is written to, fully overwriting any existing
    /// file. If `None`, the text is only kept in the result.
    #[builder(default = "None")]
    output: Option<PathBuf>,

    /// The result of the serialisation.
    #[builder(setter(skip), default = "None")]
    result: Option<Caspt2InputResult>,
}

impl<'a> Caspt2InputDriver<'a> {
    /// Returns a builder to construct a [`Caspt2InputDriver`] structure.
    pub fn builder() -> Caspt2InputDriverBuilder<'a> {
        Caspt2InputDriverBuilder::default()
    }

    /// Validates the user parameters against the aggregated classification. Serialization is
    /// refused, before anything is written, when a bound is exceeded.
    fn validate(&self) -> Result<(), anyhow::Error> {
        let params = self.parameters;
        let classification = self.classification;
        if params.ras1_max_hole > classification.ras1_max_hole_cap {
            bail!(ValidationError(format!(
                "ras1 max hole ({}) exceeds the current RAS1 spinor count ({}).",
                params.ras1_max_hole, classification.ras1_max_hole_cap
            )));
        }
        if params.ras3_max_electron > classification.ras3_max_electron_cap {
            bail!(ValidationError(format!(
                "ras3 max electron ({}) exceeds the current RAS3 spinor count ({}).",
                params.ras3_max_electron, classification.ras3_max_electron_cap
            )));
        }
        Ok(())
    }

    /// Executes the serialisation.
    fn serialise(&mut self) -> Result<(), anyhow::Error> {
        log_title("CASPT2 Input Generation");
        dcg_output!("");
        self.parameters.log_output_display();
        self.validate()?;

        let mut ras1_indices = Vec::new();
        let mut ras2_indices = Vec::new();
        let mut ras3_indices = Vec::new();
        for (idx, record) in self.table.records().iter().enumerate() {
            let (spinor_a, spinor_b) = SpinorTable::spinor_index_pair(idx);
            match record.category {
                SpinorCategory::Ras1 => ras1_indices.extend([spinor_a, spinor_b]),
                SpinorCategory::Active => ras2_indices.extend([spinor_a, spinor_b]),
                SpinorCategory::Ras3 => ras3_indices.extend([spinor_a, spinor_b]),
                _ => {}
            }
        }
        ras1_indices.sort_unstable();
        ras2_indices.sort_unstable();
        ras3_indices.sort_unstable();

        let input_text = serialise_full(
            &self.classification.counts,
            &ras1_indices,
            &ras2_indices,
            &ras3_indices,
            self.parameters,
        );
        if let Some(path) = self.output.as_ref() {
            write_input_artifact(path, &input_text).with_context(|| {
                format!(
                    "Unable to write the CASPT2 input to `{}`",
                    path.display()
                )
            })?;
            dcg_output!("CASPT2 input written to `{}`.", path.display());
            dcg_output!("");
        }

        self.result = Some(
            Caspt2InputResult::builder()
                .ras1_indices(ras1_indices)
                .ras2_indices(ras2_indices)
                .ras3_indices(ras3_indices)
                .input_text(input_text)
                .build()
                .map_err(|err| format_err!(err))?,
        );
        Ok(())
    }
}

impl<'a> Dcaspt2GenDriver for Caspt2InputDriver<'a> {
    type Params = UserParameters;

    type Outcome = Caspt2InputResult;

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.serialise()
    }

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No CASPT2 input serialisation results found."))
    }
}
