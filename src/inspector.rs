use std::ops::RangeInclusive;

use log::{debug, trace};

use crate::code_point::CodePointRecord;
use crate::errors::InvalidRangeError;

const MAX_SCALAR: i64 = 0x10ffff;
const SURROGATES: RangeInclusive<i64> = 0xd800..=0xdfff;

/// An inclusive range of Unicode scalar values. Both bounds are valid scalars and
/// `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange {
    from: char,
    to: char,
}

impl CodePointRange {
    pub fn new(from: i64, to: i64) -> Result<Self, InvalidRangeError> {
        let from_char = validate_bound(from)?;
        let to_char = validate_bound(to)?;
        if from > to {
            return Err(InvalidRangeError::Reversed{from, to});
        }
        return Ok(Self{from: from_char, to: to_char});
    }

    pub fn single(character: char) -> Self {
        return Self{from: character, to: character};
    }

    pub fn start(&self) -> char {
        self.from
    }

    pub fn end(&self) -> char {
        self.to
    }

    /// Inspects every scalar value in the range, in ascending order. Each call starts over.
    pub fn iter(&self) -> CodePoints {
        trace!("Inspecting U+{:04X}..=U+{:04X}", self.from as u32, self.to as u32);
        // `RangeInclusive<char>` steps over the surrogate gap on its own.
        return CodePoints{chars: self.from..=self.to};
    }
}

impl IntoIterator for &CodePointRange {
    type Item = CodePointRecord;
    type IntoIter = CodePoints;

    fn into_iter(self) -> CodePoints {
        self.iter()
    }
}

/// Lazy sequence of `CodePointRecord`s, produced by `CodePointRange::iter`.
#[derive(Debug, Clone)]
pub struct CodePoints {
    chars: RangeInclusive<char>,
}

impl Iterator for CodePoints {
    type Item = CodePointRecord;

    fn next(&mut self) -> Option<CodePointRecord> {
        return self.chars.next().map(CodePointRecord::new);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl DoubleEndedIterator for CodePoints {
    fn next_back(&mut self) -> Option<CodePointRecord> {
        return self.chars.next_back().map(CodePointRecord::new);
    }
}

/// A range dumped under its own header, optionally titled (e.g. with a Unicode block name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: Option<String>,
    pub range: CodePointRange,
}

impl Section {
    pub fn new(title: Option<String>, range: CodePointRange) -> Self {
        return Self{title, range};
    }
}

/// Returns the Unicode block containing `character` as a section titled with the block's name.
pub fn block_containing(character: char) -> Option<Section> {
    let block = unicode_blocks::find_unicode_block(character)?;
    // `character` is a scalar, so its block is never one of the surrogate blocks
    let range = CodePointRange::new(i64::from(block.start()), i64::from(block.end())).ok()?;
    debug!("U+{:04X} is in block '{}'", character as u32, block.name());
    return Some(Section::new(Some(block.name().to_string()), range));
}

/// Validates `[from, to]` and returns the records for every scalar value in it.
pub fn inspect(from: i64, to: i64) -> Result<CodePoints, InvalidRangeError> {
    return Ok(CodePointRange::new(from, to)?.iter());
}

fn validate_bound(bound: i64) -> Result<char, InvalidRangeError> {
    if bound < 0 {
        return Err(InvalidRangeError::Negative{bound});
    }
    if bound > MAX_SCALAR {
        return Err(InvalidRangeError::TooLarge{bound});
    }
    if SURROGATES.contains(&bound) {
        return Err(InvalidRangeError::Surrogate{bound});
    }
    // in range and not a surrogate, so always a scalar value
    return char::from_u32(bound as u32).ok_or(InvalidRangeError::Surrogate{bound});
}
