//! Domain types and pure helpers shared by the store adapter and the API.
//!
//! Nothing in here touches the network or the database.

pub mod character;
pub mod error;
pub mod pagination;
