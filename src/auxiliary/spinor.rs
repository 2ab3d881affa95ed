//! Data model for classified molecular spinors.

use std::fmt;
use std::str::FromStr;

use anyhow::{self, bail};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "spinor_tests.rs"]
mod spinor_tests;

// ==================
// Struct definitions
// ==================

/// An enumerated type for the electronic-structure categories a Kramers pair of spinors can be
/// assigned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinorCategory {
    /// Variant for frozen-core spinors excluded from correlation treatment.
    Core,

    /// Variant for inactive (doubly-occupied, correlated) spinors.
    Inactive,

    /// Variant for spinors in the RAS1 window (occupied, limited holes).
    Ras1,

    /// Variant for spinors in the fully active RAS2 window.
    Active,

    /// Variant for spinors in the RAS3 window (virtual, limited electrons).
    Ras3,

    /// Variant for secondary (virtual, uncorrelated) spinors.
    Secondary,

    /// Variant for spinors excluded from the calculation altogether.
    NotUsed,
}

impl SpinorCategory {
    /// Returns `true` if spinors of this category take part in the calculation.
    pub fn is_used(&self) -> bool {
        !matches!(self, SpinorCategory::NotUsed)
    }
}

impl FromStr for SpinorCategory {
    type Err = anyhow::Error;

    /// Maps a presentation label to a category. This is total over all labels the classification
    /// table is allowed to display.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "core" => Ok(SpinorCategory::Core),
            "inactive" => Ok(SpinorCategory::Inactive),
            "ras1" => Ok(SpinorCategory::Ras1),
            "active" | "ras2" | "active, ras2" => Ok(SpinorCategory::Active),
            "ras3" => Ok(SpinorCategory::Ras3),
            "secondary" => Ok(SpinorCategory::Secondary),
            "not used" | "not_used" => Ok(SpinorCategory::NotUsed),
            _ => bail!("Unrecognisable spinor category label: `{s}`."),
        }
    }
}

impl fmt::Display for SpinorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinorCategory::Core => write!(f, "core"),
            SpinorCategory::Inactive => write!(f, "inactive"),
            SpinorCategory::Ras1 => write!(f, "ras1"),
            SpinorCategory::Active => write!(f, "active, ras2"),
            SpinorCategory::Ras3 => write!(f, "ras3"),
            SpinorCategory::Secondary => write!(f, "secondary"),
            SpinorCategory::NotUsed => write!(f, "not used"),
        }
    }
}

/// A structure for one classified row of the spinor table. One row stands for one Kramers pair,
/// *i.e.* two spinors; all derived counts are therefore in units of two.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinorRecord {
    /// The symmetry label of the irreducible representation this pair belongs to.
    pub symmetry: String,

    /// The positive molecular-orbital index of this pair within its symmetry.
    pub index: usize,

    /// The electronic-structure category this pair is assigned to.
    pub category: SpinorCategory,
}

impl SpinorRecord {
    /// Constructs a new spinor record.
    pub fn new(symmetry: &str, index: usize, category: SpinorCategory) -> Self {
        Self {
            symmetry: symmetry.to_string(),
            index,
            category,
        }
    }
}

/// An ordered sequence of classified spinor records. The table is owned by the surrounding
/// application; the derivation engine only ever reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinorTable {
    records: Vec<SpinorRecord>,
}

impl SpinorTable {
    /// Constructs a spinor table from a sequence of records, preserving their order.
    pub fn new(records: Vec<SpinorRecord>) -> Self {
        Self { records }
    }

    /// Returns the records of the table in table order.
    pub fn records(&self) -> &[SpinorRecord] {
        &self.records
    }

    /// Returns the number of rows (Kramers pairs) in the table.
    pub fn n_rows(&self) -> usize {
        self.records.len()
    }

    /// Returns the pair of one-based spinor indices corresponding to the row at the zero-based
    /// table position `idx`.
    pub fn spinor_index_pair(idx: usize) -> (usize, usize) {
        (2 * idx + 1, 2 * idx + 2)
    }
}

/// An enumerated type for the kind of double-group symmetry the summarised DIRAC calculation was
/// performed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymmetryGroupKind {
    /// Variant for inversion-symmetric molecules where fermion irreducible representations carry
    /// gerade/ungerade parity.
    GeradeUngerade,

    /// Variant for molecules without inversion symmetry, where a single fermion irreducible
    /// representation is present.
    Single,
}

impl SymmetryGroupKind {
    /// Returns the symmetry labels of the fermion irreducible representations of this group kind.
    pub fn symmetry_labels(&self) -> &'static [&'static str] {
        match self {
            SymmetryGroupKind::GeradeUngerade => &["E1g", "E1u"],
            SymmetryGroupKind::Single => &["E1"],
        }
    }
}

impl fmt::Display for SymmetryGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymmetryGroupKind::GeradeUngerade => write!(f, "gerade/ungerade (E1g, E1u)"),
            SymmetryGroupKind::Single => write!(f, "single (E1)"),
        }
    }
}

/// A structure for the header information of a summarised DIRAC output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    /// The kind of double-group symmetry of the calculation.
    pub group_kind: SymmetryGroupKind,

    /// The total number of electrons of the molecule.
    pub n_electrons: u32,
}
