//! # Compound Interest Projector
//!
//! This crate answers the question "what will my savings look like in N
//! years?" for a starting amount plus a fixed monthly deposit.
//!
//! ## Architectural Principles
//!
//! - **Pure logic crate:** depends only on `core-types`. No I/O, no clock,
//!   no configuration.
//! - **Stateless calculation:** `ProjectionEngine` holds nothing between
//!   calls. The same input always reproduces the identical ledger.

pub mod engine;

pub use engine::ProjectionEngine;
