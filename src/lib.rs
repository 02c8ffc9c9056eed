//! Validation engine for budget transaction CSV exports.
//!
//! Two pieces: a fixed category taxonomy partitioned into income and
//! expense subsets ([`taxonomy`]), and a file validator that checks one
//! export against the five-column schema and reports every row-level
//! problem it finds ([`validator`]). Callers own all I/O; the validator
//! is a pure function over file content.

pub mod error;
pub mod models;
pub mod taxonomy;
pub mod validator;
