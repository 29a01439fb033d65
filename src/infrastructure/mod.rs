//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer. Currently this is
//! persistence only; see [`persistence`].

pub mod persistence;
