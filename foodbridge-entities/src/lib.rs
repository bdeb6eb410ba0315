#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # foodbridge-entities
//!
//! Reusable, agnostic domain entities for tracking food donations
//! from restaurant pickup through warehouse storage to community
//! distribution.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod community;
pub mod delivery;
pub mod donation;
pub mod donation_request;
pub mod id;
pub mod restaurant;
pub mod time;
pub mod user;
pub mod warehouse;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
