//! Port contracts for the board engine.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod gateway;

pub use gateway::{SyncGateway, SyncGatewayError, SyncGatewayResult};
