//! Adapter implementations of the board engine's ports.

pub mod memory;
