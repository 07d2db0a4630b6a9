//! Data models for Jasmine spec results
//!
//! This module contains the result record and the ordered collection the
//! formatter reads from.

mod collection;
mod spec_result;

pub use collection::{ResultCollection, StatusCounts};
pub use spec_result::{Expectation, SpecResult, SpecStatus, FIELDS};
