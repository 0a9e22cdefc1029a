//! Dump Unicode code-point ranges, one line per scalar value, with the UTF-8 bytes, General
//! Category and name of each.

pub mod category;
pub mod code_point;
pub mod errors;
pub mod inspector;
pub mod range_spec;
pub mod report;

pub use code_point::CodePointRecord;
pub use errors::{InvalidRangeError, RangeSpecError, UnassignedNameWarning};
pub use inspector::{inspect, CodePointRange, CodePoints, Section};
