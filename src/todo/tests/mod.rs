//! Unit tests for the todo module.
//!
//! Tests are organised by layer: domain validation, list organisation, the
//! in-memory repository contract, and the session service's state
//! reconciliation.

mod domain_tests;
