//! CLI command implementations.

pub(crate) mod recommend;
pub(crate) mod sample;
