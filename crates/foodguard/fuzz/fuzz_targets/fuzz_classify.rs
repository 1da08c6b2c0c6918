//! Fuzz target for the analysis classifier.
//!
//! This fuzzer tests that classification:
//! 1. Never panics on any UTF-8 input
//! 2. Is deterministic
//! 3. Never produces empty list items

#![no_main]

use libfuzzer_sys::fuzz_target;
use foodguard::{classify, classify::classify_legacy};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let first = classify(text);
        assert_eq!(first, classify(text));

        for item in first
            .key_points
            .iter()
            .chain(&first.indicators)
            .chain(&first.recommendations)
            .chain(&first.home_tests)
        {
            assert!(!item.is_empty());
        }

        let _ = classify_legacy(text);
    }
});
