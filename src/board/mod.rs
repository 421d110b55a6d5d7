//! Task-board state engine.
//!
//! Holds the in-memory task collection, partitions it into ordered status
//! columns, and keeps that partition synchronized with a remote store under
//! drag-and-drop moves. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The single-writer task collection in [`store`]
//! - Pure column derivation in [`projection`]
//! - The remote-store contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod projection;
pub mod services;
pub mod store;

#[cfg(test)]
mod tests;
