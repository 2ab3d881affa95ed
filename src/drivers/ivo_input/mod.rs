//! Driver for serialising the IVO standard-input block.

use std::fmt;
use std::path::PathBuf;

use anyhow::{self, bail, format_err, Context};
use derive_builder::Builder;
use indexmap::IndexMap;

use crate::auxiliary::parameters::UserParameters;
use crate::auxiliary::spinor::{HeaderInfo, SpinorTable, SymmetryGroupKind};
use crate::drivers::{Dcaspt2GenDriver, ValidationError};
use crate::io::format::{dcg_output, log_title, Dcaspt2GenOutput};
use crate::io::{push_field, push_line, write_input_artifact};


// ==================
// Struct definitions
// ==================

/// A structure holding the occupation and cutoff accounting derived from a single sign-sensitive
/// pass over the spinor table.
#[derive(Clone, Debug, PartialEq, Eq)]
struct IvoAccounting {
    /// The number of active spinors (rows processed while electrons remained, `not used`
    /// excluded).
    n_active: usize,

    /// The number of secondary spinors (used rows processed after the electrons ran out).
    n_secondary: usize,

    /// The per-symmetry occupation counters, in rows.
    occupations: IndexMap<String, usize>,

    /// The per-symmetry virtual-cutoff counters, in rows.
    cutoffs: IndexMap<String, usize>,
}

/// Runs the sign-sensitive electron accounting pass over the table.
///
/// `remaining_electrons` starts from the header electron count and decreases by two for every row
/// regardless of its category. While it is non-negative, each row raises its symmetry's
/// occupation counter and each used row contributes two active spinors. Once it turns negative, a
/// used row invalidates every cutoff counted so far (all cutoff counters reset to zero) and
/// contributes two secondary spinors, whereas a `not used` row raises its symmetry's cutoff
/// counter.
fn accumulate(table: &SpinorTable, header: &HeaderInfo) -> Result<IvoAccounting, anyhow::Error> {
    let labels = header.group_kind.symmetry_labels();
    let mut occupations: IndexMap<String, usize> =
        labels.iter().map(|label| ((*label).to_string(), 0)).collect();
    let mut cutoffs = occupations.clone();
    let mut n_active = 0usize;
    let mut n_secondary = 0usize;
    let mut remaining_electrons = i64::from(header.n_electrons);

    for record in table.records() {
        if !occupations.contains_key(record.symmetry.as_str()) {
            bail!(ValidationError(format!(
                "Symmetry label `{}` of spinor index {} is not one of the labels declared by the \
                 header.",
                record.symmetry, record.index
            )));
        }

        if remaining_electrons >= 0 {
            occupations[record.symmetry.as_str()] += 1;
        } else if record.category.is_used() {
            for cutoff in cutoffs.values_mut() {
                *cutoff = 0;
            }
        } else {
            cutoffs[record.symmetry.as_str()] += 1;
        }

        if record.category.is_used() {
            if remaining_electrons >= 0 {
                n_active += 2;
            } else {
                n_secondary += 2;
            }
        }
        remaining_electrons -= 2;
    }

    Ok(IvoAccounting {
        n_active,
        n_secondary,
        occupations,
        cutoffs,
    })
}

// =========
// Functions
// =========

/// Serializes the IVO standard-input block for a classified spinor table.
///
/// The block consists of `key\nvalue\n` pairs in fixed key order (`ninact`, `nact`, `nsec`,
/// `nelec`, the occupation fields, the optional cutoff fields, `totsym`, `diracver`) terminated
/// by an `end` line. `ninact` is always zero: the IVO input assumes no pre-existing inactive
/// space, and `nelec` equals `nact`. The occupation/cutoff field names depend on the symmetry
/// group kind (`noccg`/`noccu`/`nvcutg`/`nvcutu` for gerade/ungerade, `nocc`/`nvcut` otherwise),
/// and the cutoff fields are omitted entirely when all cutoff counters are zero.
pub fn serialise_ivo(
    table: &SpinorTable,
    header: &HeaderInfo,
    params: &UserParameters,
) -> Result<String, anyhow::Error> {
    let accounting = accumulate(table, header)?;
    Ok(format_ivo(&accounting, header, params))
}

fn format_ivo(accounting: &IvoAccounting, header: &HeaderInfo, params: &UserParameters) -> String {
    let mut out = String::new();
    push_field(&mut out, "ninact", "0");
    push_field(&mut out, "nact", &accounting.n_active.to_string());
    push_field(&mut out, "nsec", &accounting.n_secondary.to_string());
    push_field(&mut out, "nelec", &accounting.n_active.to_string());
    let any_cutoff = accounting.cutoffs.values().sum::<usize>() > 0;
    match header.group_kind {
        SymmetryGroupKind::GeradeUngerade => {
            push_field(&mut out, "noccg", &accounting.occupations["E1g"].to_string());
            push_field(&mut out, "noccu", &accounting.occupations["E1u"].to_string());
            if any_cutoff {
                push_field(&mut out, "nvcutg", &accounting.cutoffs["E1g"].to_string());
                push_field(&mut out, "nvcutu", &accounting.cutoffs["E1u"].to_string());
            }
        }
        SymmetryGroupKind::Single => {
            push_field(&mut out, "nocc", &accounting.occupations["E1"].to_string());
            if any_cutoff {
                push_field(&mut out, "nvcut", &accounting.cutoffs["E1"].to_string());
            }
        }
    }
    push_field(&mut out, "totsym", &params.totsym.to_string());
    push_field(&mut out, "diracver", params.dirac_version_str());
    push_line(&mut out, "end");
    out
}

// ------
// Result
// ------

/// A structure to contain the serialised IVO standard input.
#[derive(Clone, Builder, Debug)]
pub struct IvoInputResult {
    /// The number of active spinors.
    pub n_active: usize,

    /// The number of secondary spinors.
    pub n_secondary: usize,

    /// The serialised input text.
    pub input_text: String,
}

impl IvoInputResult {
    /// Returns a builder to construct an [`IvoInputResult`] structure.
    fn builder() -> IvoInputResultBuilder {
        IvoInputResultBuilder::default()
    }
}

impl fmt::Display for IvoInputResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.input_text)
    }
}

// ------
// Driver
// ------

/// A driver for serialising the IVO standard input from a classified spinor table.
#[derive(Clone, Builder)]
pub struct IvoInputDriver<'a> {
    /// The user parameters controlling the serialisation.
    parameters: &'a UserParameters,

    /// The classified spinor table.
    table: &'a SpinorTable,

    /// The header information of the summarised DIRAC output.
    header: &'a HeaderInfo,

    /// Optional application-managed path the input text is written to, fully overwriting any
    /// existing file on every derivation. If `None`, the text is only kept in the result.
    #[builder(default = "None")]
    output: Option<PathBuf>,

    /// The result of the serialisation.
    #[builder(setter(skip), default = "None")]
    result: Option<IvoInputResult>,
}

impl<'a> IvoInputDriver<'a> {
    /// Returns a builder to construct an [`IvoInputDriver`] structure.
    pub fn builder() -> IvoInputDriverBuilder<'a> {
        IvoInputDriverBuilder::default()
    }

    /// Executes the serialisation.
    fn serialise(&mut self) -> Result<(), anyhow::Error> {
        log_title("IVO Standard Input Generation");
        dcg_output!("");
        self.parameters.log_output_display();

        let accounting = accumulate(self.table, self.header)?;
        let input_text = format_ivo(&accounting, self.header, self.parameters);
        if let Some(path) = self.output.as_ref() {
            write_input_artifact(path, &input_text).with_context(|| {
                format!(
                    "Unable to write the IVO standard input to `{}`",
                    path.display()
                )
            })?;
            dcg_output!("IVO standard input written to `{}`.", path.display());
            dcg_output!("");
        }

        self.result = Some(
            IvoInputResult::builder()
                .n_active(accounting.n_active)
                .n_secondary(accounting.n_secondary)
                .input_text(input_text)
                .build()
                .map_err(|err| format_err!(err))?,
        );
        Ok(())
    }
}

impl<'a> Dcaspt2GenDriver for IvoInputDriver<'a> {
    type Params = UserParameters;

    type Outcome = IvoInputResult;

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.serialise()
    }

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No IVO input serialisation results found."))
    }
}
