//! Tests for CLI commands

mod command_tests;
