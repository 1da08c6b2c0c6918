//! FoodGuard: turns AI-generated food adulteration analyses into structured
//! sections.
//!
//! Analyses arrive as freeform model output with no guaranteed grammar. The
//! classifier partitions that text into a summary, key findings,
//! adulteration indicators, recommendations, home tests and a risk level,
//! using heading phrases, bullet markers and keywords.
//!
//! # Core Principles
//!
//! - **Never fails**: any text, including empty text, classifies
//! - **Order-preserving**: items keep their input order within a section
//! - **Stateless**: every call builds a fresh result
//!
//! # Example
//!
//! ```
//! use foodguard::{classify, RiskLevel};
//!
//! let result = classify("Key Findings:\n- Unusual sediment\nRisk Level: High");
//!
//! assert_eq!(result.key_points, vec!["Unusual sediment"]);
//! assert_eq!(result.risk_level, Some(RiskLevel::High));
//! ```

pub mod barcode;
pub mod classify;
pub mod error;
pub mod image;
pub mod report;
pub mod response;
pub mod risk;

pub use barcode::{Barcode, BarcodeError, BarcodeRequest};
pub use classify::{classify, ClassifiedAnalysis, Classifier, ClassifierConfig, Section, Strategy};
pub use error::{FoodGuardError, Result};
pub use image::{ImageError, ImageUpload};
pub use report::{AnalysisReport, ReportStatus};
pub use response::{AnalysisResponse, ImageDetails, Resolved};
pub use risk::RiskLevel;
