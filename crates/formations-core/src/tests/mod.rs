//! Behavioral tests for the view state machines
//!
//! BDD-style tests using given-when-then naming convention.

mod support;

pub mod edit_behaviors;
