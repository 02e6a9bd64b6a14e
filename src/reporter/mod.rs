//! Reporting surface.
//!
//! The capability interface the update-attempt driver calls into, its
//! production and no-op implementations, and the process-wide selection
//! of which one is in use.

pub mod interface;
pub mod registry;
pub mod update;

pub use interface::*;
pub use registry::*;
pub use update::*;
