//! # Validation Checks
//!
//! This module contains the individual rules a title is validated against.
//!
//! The checks are organized into submodules:
//! - `pattern`: Validates that the title contains a match for the configured regex
//! - `length`: Validates the title length against the configured bounds
//! - `prefix`: Validates that the title starts with one of the allowed prefixes
//!
//! These checks are used by the `TitleSentinel` engine, which runs them in a
//! fixed order and stops at the first failure.

pub mod length;
pub mod pattern;
pub mod prefix;
