//! Correlation peak location.

pub(crate) mod peak;
