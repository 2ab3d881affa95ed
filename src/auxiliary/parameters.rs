//! User-adjustable parameters controlling input generation.

use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::io::format::nice_bool;

#[cfg(test)]
#[path = "parameters_tests.rs"]
mod parameters_tests;

/// A structure containing the user-adjustable parameters consumed by the input serialisers.
///
/// This structure is constructed once by the surrounding application (from the persisted settings
/// store or from the job input) and passed by reference to the drivers; the engine never
/// reconstructs it implicitly.
#[derive(Clone, Builder, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserParameters {
    /// The index of the totally symmetric irreducible representation of the target state.
    #[builder(default = "1")]
    pub totsym: usize,

    /// The index of the root to be selected, also used for the number of roots.
    #[builder(default = "1")]
    pub selectroot: usize,

    /// The maximum number of holes allowed in the RAS1 window. Bounded above by the current RAS1
    /// spinor count.
    #[builder(default = "0")]
    pub ras1_max_hole: usize,

    /// The maximum number of electrons allowed in the RAS3 window. Bounded above by the current
    /// RAS3 spinor count.
    #[builder(default = "0")]
    pub ras3_max_electron: usize,

    /// Boolean indicating if the DIRAC version used is 21 or later.
    #[builder(default = "false")]
    pub dirac_version_21_or_later: bool,
}

impl UserParameters {
    /// Returns a builder to construct a [`UserParameters`] structure.
    pub fn builder() -> UserParametersBuilder {
        UserParametersBuilder::default()
    }

    /// Returns the literal DIRAC version string expected by the downstream codes.
    pub fn dirac_version_str(&self) -> &'static str {
        if self.dirac_version_21_or_later {
            "21"
        } else {
            "19"
        }
    }

    /// Returns a copy of the parameters with the RAS window bounds clamped to the supplied
    /// capacities. To be applied after every re-derivation of the category counts.
    ///
    /// # Arguments
    ///
    /// * `ras1_max_hole_cap` - The current RAS1 spinor count.
    /// * `ras3_max_electron_cap` - The current RAS3 spinor count.
    pub fn clamped(&self, ras1_max_hole_cap: usize, ras3_max_electron_cap: usize) -> Self {
        Self {
            ras1_max_hole: self.ras1_max_hole.min(ras1_max_hole_cap),
            ras3_max_electron: self.ras3_max_electron.min(ras3_max_electron_cap),
            ..self.clone()
        }
    }
}

impl Default for UserParameters {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("Unable to construct a default `UserParameters`.")
    }
}

impl fmt::Display for UserParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total symmetry (totsym): {}", self.totsym)?;
        writeln!(f, "Selected root (selectroot): {}", self.selectroot)?;
        writeln!(f, "RAS1 maximum holes: {}", self.ras1_max_hole)?;
        writeln!(f, "RAS3 maximum electrons: {}", self.ras3_max_electron)?;
        writeln!(
            f,
            "DIRAC version 21 or later: {}",
            nice_bool(self.dirac_version_21_or_later)
        )?;
        writeln!(f)?;
        Ok(())
    }
}
