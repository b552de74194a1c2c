//! # Mortgage Calculator
//!
//! Fixed-rate annuity calculations: the constant monthly payment for a loan,
//! its aggregate cost, and the month-by-month amortization schedule.
//!
//! ## Architectural Principles
//!
//! - **Pure logic crate:** depends only on `core-types`. No I/O and no
//!   configuration.
//! - **Stateless calculation:** `MortgageEngine` holds nothing between calls;
//!   identical inputs always produce identical results.
//! - **No-throw boundary conditions:** a zero rate or a zero-month term takes
//!   a defined fallback path instead of dividing by zero. The only error this
//!   crate can return is decimal overflow inside the annuity factor.

pub mod engine;
pub mod error;
pub mod schedule;

pub use engine::MortgageEngine;
pub use error::MortgageError;
pub use schedule::AmortizationSchedule;
