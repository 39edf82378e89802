//! Behavioral tests for the console shell
//!
//! Given-when-then tests of routing and of the pure helpers behind the
//! components. DOM behaviour is covered by the browser tests in `tests/`.
