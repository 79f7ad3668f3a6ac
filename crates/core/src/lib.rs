//! Domain logic for the pokedex service.
//!
//! Everything here is free of database and HTTP dependencies so it can be
//! exercised by plain unit tests.

pub mod cascade;
pub mod error;
pub mod naming;
pub mod rating;
pub mod types;
