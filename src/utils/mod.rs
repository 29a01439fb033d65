//! Utility functions used across the application.
//!
//! - [`code_generator`] - Random shortcode generation
//! - [`validation`] - Pure input validation predicates

pub mod code_generator;
pub mod validation;
