//! Fuzz target for endpoint response handling.
//!
//! Any status and body must produce a report without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use foodguard::{AnalysisReport, AnalysisResponse, Classifier};

fuzz_target!(|input: (u16, String)| {
    let (status, body) = input;
    if body.len() > 100_000 {
        return;
    }

    let response = AnalysisResponse::from_http(status, &body);
    let _ = AnalysisReport::from_response(&response, &Classifier::new());
});
