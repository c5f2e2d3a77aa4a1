//! Library surface for the tuido binary and its integration tests.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
