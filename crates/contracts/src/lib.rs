//! Wire contracts of the commission REST API.
//!
//! Field names follow the collaborator's JSON verbatim; everything here is
//! plain serde data with no I/O.

pub mod domain;
pub mod shared;
