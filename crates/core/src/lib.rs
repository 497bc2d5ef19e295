//! Domain building blocks shared by the storage and HTTP layers.
//!
//! Nothing in here touches the database or the network: id/timestamp
//! aliases, the domain error type, list-query parsing helpers and the
//! field validator with its message catalogue.

pub mod error;
pub mod listing;
pub mod types;
pub mod validation;
