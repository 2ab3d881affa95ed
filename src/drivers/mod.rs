//! Drivers to carry out dcaspt2gen functionalities.

use std::error::Error;
use std::fmt;

use anyhow;

pub mod caspt2_input;
pub mod ivo_input;
pub mod spinor_classification;

// =================
// Trait definitions
// =================

/// Trait defining behaviours of `dcaspt2gen` drivers.
pub trait Dcaspt2GenDriver {
    /// The type of the parameter structure controlling the driver.
    type Params;

    /// The type of the successful outcome when executing the driver.
    type Outcome;

    /// Executes the driver and stores the result internally.
    fn run(&mut self) -> Result<(), anyhow::Error>;

    /// Returns the result of the driver execution.
    fn result(&self) -> Result<&Self::Outcome, anyhow::Error>;
}

// ==================
// Struct definitions
// ==================

/// An error indicating an invalid classification state or an out-of-bound numeric field. Raised
/// before serialisation; no partial artifact is ever written.
#[derive(Debug, Clone)]
pub struct ValidationError(pub String);

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for ValidationError {}
