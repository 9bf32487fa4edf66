pub(crate) mod config;
pub(crate) mod filler;
pub(crate) mod partition;
