//! # Fincalc Core Types
//!
//! This crate defines the value types shared by every calculation crate in the
//! workspace, plus the text-to-number parsing boundary.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate depends on nothing else in the workspace. Every
//!   other crate depends on it.
//! - **Pure values:** Inputs and results are plain immutable data. A calculator
//!   consumes an input struct and produces a fresh result; nothing here is
//!   mutated after creation.
//! - **Lenient boundary:** Numeric fields arrive as free text from the CLI.
//!   The `parse` module owns the coerce-to-zero policy so the calculation
//!   engines never see a string.

pub mod inputs;
pub mod parse;
pub mod results;

// Re-export the core types to provide a clean public API.
pub use inputs::{CompoundInterestInput, MortgageInput};
pub use parse::{parse_or_default, parse_years_or_default};
pub use results::{
    AmortizationEntry, MortgageResult, ProjectionSummary, YearlyAmortization, YearlyProjection,
};
