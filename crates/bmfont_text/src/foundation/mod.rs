//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types for pixel positions and draw transforms
//! - Logging utilities

pub mod logging;
pub mod math;
