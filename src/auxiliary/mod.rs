//! Helper items to assist the working of dcaspt2gen.

pub mod parameters;
pub mod ranges;
pub mod spinor;
