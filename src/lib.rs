//! Ticklist: personal task-tracking core.
//!
//! This crate provides the non-visual core of a single-user todo manager:
//! the todo data model, grouped and sorted list views, persistence against a
//! remote table-like store, and on-request natural-language summaries of
//! pending work relayed to a chat channel.
//!
//! # Architecture
//!
//! Ticklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (remote store, local
//!   fakes)
//!
//! # Modules
//!
//! - [`todo`]: Todo records, list organisation, persistence, and summaries

pub mod todo;
