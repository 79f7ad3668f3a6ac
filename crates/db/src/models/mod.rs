//! Entity rows and their wire DTOs.
//!
//! Each module defines the persisted row (`sqlx::FromRow`), the DTO exchanged
//! over HTTP, and explicit `From` conversions in both directions. DTO ids
//! default to `0` when omitted so create payloads may leave them out.

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;
