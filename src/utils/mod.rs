//! Utility modules for common functionality
//!
//! This module provides various utility functions and types used throughout the application.

pub mod logger;
pub mod progress;
pub(crate) mod fs_utils;
