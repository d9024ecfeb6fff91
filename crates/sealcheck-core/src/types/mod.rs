//! Seal proof and certificate record types.

mod certificate;
mod proof;

pub use certificate::*;
pub use proof::*;
