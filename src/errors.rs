use std::fmt::Display;
use std::fmt::Formatter;

use crate::range_spec::Rule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRangeError {
    Reversed { from: i64, to: i64 },
    Negative { bound: i64 },
    TooLarge { bound: i64 },
    Surrogate { bound: i64 },
}

impl Display for InvalidRangeError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            InvalidRangeError::Reversed{from, to} => write!(f, "Invalid code point range: \
                start {from:#x} is greater than end {to:#x}."),
            InvalidRangeError::Negative{bound} => write!(f, "Invalid code point range: \
                bound {bound} is negative."),
            InvalidRangeError::TooLarge{bound} => write!(f, "Invalid code point range: \
                bound {bound:#x} exceeds U+10FFFF."),
            InvalidRangeError::Surrogate{bound} => write!(f, "Invalid code point range: \
                bound U+{bound:04X} is a surrogate, not a scalar value."),
        }
    }
}

impl std::error::Error for InvalidRangeError {}

/// A code point that has no name in the Unicode character database. Never fatal: the record is
/// still produced, with a sentinel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnassignedNameWarning {
    pub scalar: char,
}

impl Display for UnassignedNameWarning {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "U+{:04X} has no assigned Unicode name.", self.scalar as u32)
    }
}

#[derive(Debug)]
pub enum RangeSpecError {
    IoError { error: std::io::Error },
    ParserError { error: Box<pest::error::Error<Rule>> },
    InvalidRange { error: InvalidRangeError },
}

impl Display for RangeSpecError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            RangeSpecError::IoError{error} => write!(f, "I/O Error while reading dump plan file: {error}"),
            RangeSpecError::ParserError{error} => write!(f, "Error parsing code point range: \n{error}"),
            RangeSpecError::InvalidRange{error} => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for RangeSpecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RangeSpecError::IoError{error} => Some(error),
            RangeSpecError::ParserError{error} => Some(error.as_ref()),
            RangeSpecError::InvalidRange{error} => Some(error),
        }
    }
}

impl From<std::io::Error> for RangeSpecError {
    fn from(error: std::io::Error) -> Self {
        RangeSpecError::IoError{error}
    }
}

impl From<pest::error::Error<Rule>> for RangeSpecError {
    fn from(error: pest::error::Error<Rule>) -> Self {
        RangeSpecError::ParserError{error: Box::new(error)}
    }
}

impl From<InvalidRangeError> for RangeSpecError {
    fn from(error: InvalidRangeError) -> Self {
        RangeSpecError::InvalidRange{error}
    }
}
