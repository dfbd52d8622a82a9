//! Shared domain types and client-side logic of the kitchen showroom site.
//!
//! Everything here is platform independent: the frontend crate renders it,
//! the tests drive it natively.

pub mod domain;
pub mod shared;
pub mod usecases;
