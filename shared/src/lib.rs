//! Shared types for the launch decision pipeline
//!
//! Contains the data model exchanged between the launcher core, its
//! collaborators and the presentation layer, plus logging utilities used by
//! every component.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
pub use logging::Component;
