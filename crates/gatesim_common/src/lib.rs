//! Shared foundational types for the gatesim workspace.
//!
//! This crate provides the 3-valued [`Logic`] value type used by the
//! simulation engine and interned identifiers for net and element names.

#![warn(missing_docs)]

pub mod ident;
pub mod logic;

pub use ident::{Ident, Interner};
pub use logic::Logic;
