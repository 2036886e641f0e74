//! Utility Modules
//!
//! This module provides helper functions used across all processors.
//!
//! # Modules
//!
//! - `assertions`: Common validation checks (signer, writable, lifecycle, programs)
//! - `authority`: Derived mint authority and token account owner checks
//! - `cpi`: Creating accounts at program-derived addresses

pub mod assertions;
pub mod authority;
pub mod cpi;

// Re-export all utilities for easy access
pub use assertions::*;
pub use authority::*;
pub use cpi::*;
