//! Unit tests for the board engine.
#![expect(
    clippy::expect_used,
    reason = "test fixtures fail fast on invalid setup"
)]

mod filter_tests;
