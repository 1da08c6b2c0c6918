//! CLI command implementations.

pub mod barcode;
pub mod classify;
pub mod inspect;
pub mod serve;
