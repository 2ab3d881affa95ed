//! Driver for aggregating a classified spinor table into category counts and derived bounds.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{self, bail, format_err};
use derive_builder::Builder;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::auxiliary::ranges::compress_used_indices;
use crate::auxiliary::spinor::{HeaderInfo, SpinorCategory, SpinorTable};
use crate::drivers::{Dcaspt2GenDriver, ValidationError};
use crate::io::format::{
    dcg_output, log_title, nice_bool, write_subtitle, Dcaspt2GenOutput,
};


/// A map from symmetry label to the per-index usage map of that symmetry. Rebuilt in full on
/// every derivation pass; labels keep their first-seen order, indices are kept sorted.
pub type UsedIndexMap = IndexMap<String, BTreeMap<usize, bool>>;

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

/// A structure containing control parameters for spinor classification aggregation.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct SpinorClassificationParams {
    /// Boolean indicating if the recommended MOLTRA ranges are to be written to the output.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub write_moltra_recommendation: bool,
}

fn default_true() -> bool {
    true
}

impl SpinorClassificationParams {
    /// Returns a builder to construct a [`SpinorClassificationParams`] structure.
    pub fn builder() -> SpinorClassificationParamsBuilder {
        SpinorClassificationParamsBuilder::default()
    }
}

impl Default for SpinorClassificationParams {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("Unable to construct a default `SpinorClassificationParams`.")
    }
}

impl fmt::Display for SpinorClassificationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Report recommended MOLTRA ranges: {}",
            nice_bool(self.write_moltra_recommendation)
        )?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// A structure for per-category spinor counts. One table row contributes two spinors, so all
/// counts are even; `not used` rows are not counted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    /// The number of frozen-core spinors.
    pub core: usize,

    /// The number of inactive spinors.
    pub inactive: usize,

    /// The number of RAS1 spinors.
    pub ras1: usize,

    /// The number of RAS2 (fully active) spinors.
    pub ras2: usize,

    /// The number of RAS3 spinors.
    pub ras3: usize,

    /// The number of secondary spinors.
    pub secondary: usize,
}

impl CategoryCounts {
    /// Adds one Kramers pair of the given category to the counts.
    fn add_pair(&mut self, category: SpinorCategory) {
        match category {
            SpinorCategory::Core => self.core += 2,
            SpinorCategory::Inactive => self.inactive += 2,
            SpinorCategory::Ras1 => self.ras1 += 2,
            SpinorCategory::Active => self.ras2 += 2,
            SpinorCategory::Ras3 => self.ras3 += 2,
            SpinorCategory::Secondary => self.secondary += 2,
            SpinorCategory::NotUsed => {}
        }
    }

    /// Returns the number of active spinors. All three RAS windows count as active.
    pub fn n_active(&self) -> usize {
        self.ras1 + self.ras2 + self.ras3
    }

    /// Returns the total number of classified spinors across all categories.
    pub fn n_basis(&self) -> usize {
        self.core + self.inactive + self.n_active() + self.secondary
    }
}

impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "core: {}", self.core)?;
        writeln!(f, "inactive: {}", self.inactive)?;
        writeln!(f, "ras1: {}", self.ras1)?;
        writeln!(f, "active, ras2: {}", self.ras2)?;
        writeln!(f, "ras3: {}", self.ras3)?;
        writeln!(f, "secondary: {}", self.secondary)?;
        Ok(())
    }
}

/// A structure to contain spinor classification aggregation results.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct SpinorClassificationResult {
    /// The control parameters used to obtain this set of results.
    pub parameters: SpinorClassificationParams,

    /// The per-category spinor counts.
    pub counts: CategoryCounts,

    /// The per-symmetry used/unused index map.
    pub used_indices: UsedIndexMap,

    /// The upper bound for the RAS1 maximum-hole parameter implied by the current counts.
    pub ras1_max_hole_cap: usize,

    /// The upper bound for the RAS3 maximum-electron parameter implied by the current counts.
    pub ras3_max_electron_cap: usize,
}

impl SpinorClassificationResult {
    /// Returns a builder to construct a [`SpinorClassificationResult`] structure.
    fn builder() -> SpinorClassificationResultBuilder {
        SpinorClassificationResultBuilder::default()
    }

    /// Returns the recommended MOLTRA setting: one line per symmetry label, each carrying the
    /// range-compressed used indices of that symmetry.
    pub fn moltra_recommendation(&self) -> String {
        self.used_indices
            .iter()
            .map(|(label, index_used_map)| {
                let ranges = compress_used_indices(index_used_map);
                if ranges.is_empty() {
                    label.clone()
                } else {
                    format!("{label} {ranges}")
                }
            })
            .join("\n")
    }
}

impl fmt::Display for SpinorClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtitle(f, "Summary of the number of spinors")?;
        writeln!(f)?;
        write!(f, "{}", self.counts)?;
        writeln!(f)?;
        writeln!(f, "ras1 max hole bound: {}", self.ras1_max_hole_cap)?;
        writeln!(f, "ras3 max electron bound: {}", self.ras3_max_electron_cap)?;
        if self.parameters.write_moltra_recommendation {
            writeln!(f)?;
            writeln!(f, "Recommended MOLTRA setting:")?;
            for line in self.moltra_recommendation().lines() {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}

// ------
// Driver
// ------

/// A driver for spinor classification aggregation.
///
/// A single pass over the table, in table order, counts the spinors of every category and rebuilds
/// the per-symmetry used-index map from scratch. No incremental state survives between passes.
#[derive(Clone, Builder)]
pub struct SpinorClassificationDriver<'a> {
    /// The control parameters for the aggregation.
    parameters: &'a SpinorClassificationParams,

    /// The classified spinor table to be aggregated.
    table: &'a SpinorTable,

    /// Optional header information. When present, its symmetry labels seed the used-index map and
    /// records carrying labels outside this set are rejected.
    #[builder(default = "None")]
    header: Option<&'a HeaderInfo>,

    /// The result of the aggregation.
    #[builder(setter(skip), default = "None")]
    result: Option<SpinorClassificationResult>,
}

impl<'a> SpinorClassificationDriver<'a> {
    /// Returns a builder to construct a [`SpinorClassificationDriver`] structure.
    pub fn builder() -> SpinorClassificationDriverBuilder<'a> {
        SpinorClassificationDriverBuilder::default()
    }

    /// Executes the aggregation pass.
    fn classify(&mut self) -> Result<(), anyhow::Error> {
        log_title("Spinor Classification");
        dcg_output!("");
        self.parameters.log_output_display();

        let mut counts = CategoryCounts::default();
        let mut used_indices = UsedIndexMap::new();
        if let Some(header) = self.header {
            for label in header.group_kind.symmetry_labels() {
                used_indices.insert((*label).to_string(), BTreeMap::new());
            }
        }

        for record in self.table.records() {
            if self.header.is_some() && !used_indices.contains_key(record.symmetry.as_str()) {
                bail!(ValidationError(format!(
                    "Symmetry label `{}` of spinor index {} is not one of the labels declared by \
                     the header.",
                    record.symmetry, record.index
                )));
            }
            let index_used_map = used_indices.entry(record.symmetry.clone()).or_default();
            if index_used_map
                .insert(record.index, record.category.is_used())
                .is_some()
            {
                bail!(ValidationError(format!(
                    "Duplicate spinor index {} within symmetry `{}`.",
                    record.index, record.symmetry
                )));
            }
            counts.add_pair(record.category);
        }

        let result = SpinorClassificationResult::builder()
            .parameters(self.parameters.clone())
            .ras1_max_hole_cap(counts.ras1)
            .ras3_max_electron_cap(counts.ras3)
            .counts(counts)
            .used_indices(used_indices)
            .build()
            .map_err(|err| format_err!(err))?;
        result.log_output_display();
        dcg_output!("");
        self.result = Some(result);
        Ok(())
    }
}

impl<'a> Dcaspt2GenDriver for SpinorClassificationDriver<'a> {
    type Params = SpinorClassificationParams;

    type Outcome = SpinorClassificationResult;

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.classify()
    }

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No spinor classification results found."))
    }
}
