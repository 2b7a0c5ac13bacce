//! CLI command implementations.

pub(crate) mod calc;
pub(crate) mod fields;
pub(crate) mod interactive;
pub(crate) mod sweep;
