//! # dcaspt2gen: DIRAC-CASPT2 and IVO input generation
//!
//! `dcaspt2gen` derives calculation-input text files for relativistic
//! CASPT2/RASPT2 and IVO computations from a classification of molecular
//! spinors into electronic-structure categories (core, inactive, RAS1,
//! active/RAS2, RAS3, secondary, not used), with the following capabilities:
//! - aggregation of per-category spinor counts with duplicate-identity
//!   validation,
//! - derivation of the maximum-hole/maximum-electron bounds for the RAS1 and
//!   RAS3 windows,
//! - compression of the per-symmetry used spinor indices into the
//!   contiguous-range notation consumed by the MOLTRA directive, and
//! - serialisation of the full CASPT2 input block and of the reduced IVO
//!   standard-input block with sign-sensitive electron accounting.
//!
//! Spinor classifications are supplied declaratively via a YAML job file;
//! the summarised molecular-orbital data are obtained from DIRAC output
//! files via the external `sum_dirac_dfcoef` program.
//!
//! This documentation details the public API of the `dcaspt2gen` crate.

pub mod auxiliary;
pub mod drivers;
pub mod interfaces;
pub mod io;
