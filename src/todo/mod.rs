//! Todo management for Ticklist.
//!
//! This module implements the whole todo lifecycle: validated record
//! creation, editing, completion toggling, deletion, grouped and sorted list
//! views, and on-demand summary generation of pending work. Persistence is
//! delegated to a remote table-like store; the summary is composed and
//! relayed by a remote procedure. The module follows hexagonal architecture:
//!
//! - Domain types and list organisation in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The application state controller in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
