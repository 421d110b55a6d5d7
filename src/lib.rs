//! Tessera: task-board state engine.
//!
//! This crate backs kanban- and scrum-style project-management views: it
//! owns the in-memory task collection, derives ordered status columns from
//! it, and keeps the columns synchronized with a remote persistence store
//! under user-driven drag-and-drop moves.
//!
//! # Architecture
//!
//! Tessera follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value objects and entities with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the remote store
//! - **Adapters**: Concrete implementations of ports
//!
//! Routing, theming, authentication, and other display chrome are external
//! collaborators; they interact with the engine only through the store's
//! mutator contract, the projection API, and the services in
//! [`board::services`].

pub mod board;
