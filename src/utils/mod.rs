//! Utility functions
//!
//! Provides validation and network helpers.

pub mod network;
pub mod validation;
