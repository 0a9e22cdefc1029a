use std::fs;
use std::num::IntErrorKind;
use std::path::Path;

use log::debug;
use pest::error::ErrorVariant;
use pest::iterators::{FlatPairs, Pair};
use pest::{Parser, Position};
use pest_derive::Parser;

use crate::errors::RangeSpecError;
use crate::inspector::{CodePointRange, Section};

#[derive(Parser)]
#[grammar = "range_spec_grammar.pest"]
pub struct RangeSpecParser;

/// Parses a range argument such as `U+2500..U+257F`, `0x2500-0x257f`, `9472` or `─`.
pub fn parse_range(spec: &str) -> Result<CodePointRange, RangeSpecError> {
    let range_arg = RangeSpecParser::parse(Rule::range_arg, spec)?;
    return build_range(range_arg.flatten(), Position::from_start(spec));
}

/// Parses every range argument into an untitled section. Fails on the first bad argument,
/// before any range has been inspected.
pub fn parse_ranges<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Section>, RangeSpecError> {
    return specs.iter()
        .map(|spec| Ok(Section::new(None, parse_range(spec.as_ref())?)))
        .collect();
}

/// A list of sections to dump, one per line of a plan file:
///
/// ```text
/// # Box Drawing and friends
/// U+2500..U+257F  Box Drawing
/// U+2580..U+259F  Block Elements
/// ```
pub struct DumpPlan {
    pub sections: Vec<Section>,
}

impl DumpPlan {
    pub fn from_file(path: &Path) -> Result<Self, RangeSpecError> {
        let unparsed_file = fs::read_to_string(path)?;
        return Self::parse(&unparsed_file);
    }

    pub fn parse(source: &str) -> Result<Self, RangeSpecError> {
        let mut sections: Vec<Section> = vec![];
        let rows = RangeSpecParser::parse(Rule::file, source)?
            .flat_map(|file| file.into_inner());
        for row in rows {
            if row.as_rule() != Rule::section {
                continue;
            }
            let title = row.clone().into_inner()
                .find(|entry| entry.as_rule() == Rule::title)
                .map(|entry| entry.as_str().trim().to_string());
            let start = row.as_span().start_pos();
            let range = build_range(row.into_inner().flatten(), start)?;
            debug!("Plan section {:?}: U+{:04X}..=U+{:04X}", title, range.start() as u32, range.end() as u32);
            sections.push(Section::new(title, range));
        }
        return Ok(DumpPlan{sections});
    }
}

/// Builds a range from the bound pairs among `pairs`. The grammar allows one or two bounds.
fn build_range(pairs: FlatPairs<Rule>, start: Position) -> Result<CodePointRange, RangeSpecError> {
    let bounds = pairs
        .filter(|pair| matches!(pair.as_rule(), Rule::hex_bound | Rule::char_bound | Rule::dec_bound))
        .map(bound_value)
        .collect::<Result<Vec<i64>, RangeSpecError>>()?;
    return match bounds.as_slice() {
        [single] => Ok(CodePointRange::new(*single, *single)?),
        [from, to] => Ok(CodePointRange::new(*from, *to)?),
        _ => Err(malformed(start, format!("expected one or two bounds, found {}", bounds.len()))),
    }
}

fn bound_value(bound: Pair<Rule>) -> Result<i64, RangeSpecError> {
    let start = bound.as_span().start_pos();
    let parsed = match bound.as_rule() {
        Rule::hex_bound => i64::from_str_radix(bound.into_inner().as_str(), 16),
        Rule::char_bound => return bound.as_str().parse::<char>()
            .map(|c| i64::from(u32::from(c)))
            .map_err(|e| malformed(start, e.to_string())),
        _ => bound.as_str().parse::<i64>(),
    };
    // Numbers past `i64` saturate, so range validation reports them like any other
    // out-of-range bound.
    return match parsed {
        Ok(value) => Ok(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        Err(e) => Err(malformed(start, e.to_string())),
    }
}

/// A parse error for input the grammar accepted but that still doesn't form a range.
fn malformed(start: Position, message: String) -> RangeSpecError {
    return pest::error::Error::<Rule>::new_from_pos(ErrorVariant::CustomError{message}, start).into();
}
