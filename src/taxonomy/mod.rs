//! Outcome classification taxonomy.
//!
//! The closed enumerant sets used to classify update attempts, download
//! phases, update checks, rollbacks, and certificate checks. Every value
//! that reaches the metrics backend is drawn from one of these sets.

pub mod attempt;
pub mod check;
pub mod download;

pub use attempt::*;
pub use check::*;
pub use download::*;
