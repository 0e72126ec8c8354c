//! # roster-domain
//!
//! Pure domain model for the roster employee registry.
//!
//! ## Responsibilities
//! - Foundational types: the store-assigned identifier, error conventions
//! - Define the **Employee** record and the id-less **`NewEmployee`** payload
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod employee;
pub mod error;
pub mod id;
