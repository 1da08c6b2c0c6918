//! Validation of manually entered product barcodes.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest barcode the analysis endpoint accepts.
pub const MAX_BARCODE_LEN: usize = 20;

/// Why a barcode was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    #[error("Please enter a barcode number")]
    Empty,

    #[error("Please enter a valid numeric barcode")]
    NotNumeric,

    #[error("Barcode is longer than 20 digits ({0})")]
    TooLong(usize),
}

/// A trimmed, all-digit barcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode(String);

impl Barcode {
    /// Validate user input.
    pub fn parse(input: &str) -> Result<Self, BarcodeError> {
        let code = input.trim();
        if code.is_empty() {
            return Err(BarcodeError::Empty);
        }
        if !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(BarcodeError::NotNumeric);
        }
        if code.len() > MAX_BARCODE_LEN {
            return Err(BarcodeError::TooLong(code.len()));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Barcode {
    type Error = BarcodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Barcode::parse(&value)
    }
}

impl From<Barcode> for String {
    fn from(barcode: Barcode) -> Self {
        barcode.0
    }
}

/// Body posted to the barcode analysis endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeRequest {
    #[serde(rename = "Barcode")]
    pub barcode: Barcode,
}

impl BarcodeRequest {
    pub fn new(barcode: Barcode) -> Self {
        Self { barcode }
    }
}
