//! Shared types for VTERM, the simulated VPS teaching terminal.

pub mod error;

pub use error::{Result, VtermError};
