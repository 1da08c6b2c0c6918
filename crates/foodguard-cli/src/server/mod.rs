//! Local JSON API over the classifier.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
