//! API request handlers.

mod barcode;
mod classify;
mod health;
mod image;
mod report;

pub use barcode::*;
pub use classify::*;
pub use health::*;
pub use image::*;
pub use report::*;
