//! Unit tests for the scanning module
