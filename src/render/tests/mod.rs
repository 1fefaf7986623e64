//! Tests for mesh export and preview rendering

mod export_tests;
