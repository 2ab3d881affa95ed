//! Interfaces between dcaspt2gen and other software.

pub mod cli;
pub mod dfcoef;
pub mod input;
