//! Unit tests for the raster decoding module

mod pixel_format_tests;
