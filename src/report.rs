use std::fmt::Display;
use std::fmt::Formatter;
use std::io::{self, Write};

use log::debug;

use crate::code_point::{hex_escape, CodePointRecord};
use crate::inspector::Section;

const COMPART_URL: &str = "https://www.compart.com/en/unicode";

impl Display for CodePointRecord {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[{}] - '{}' - '{}' --> {}, {}",
            self.literal_rendering, self.scalar_escape, self.utf8_escape(), self.category, self.name)
    }
}

/// The three header lines printed above each dumped section, linking the block and both
/// bounds on compart.com.
#[derive(Debug)]
pub struct SectionHeader<'a> {
    section: &'a Section,
}

impl<'a> SectionHeader<'a> {
    pub fn new(section: &'a Section) -> Self {
        return Self{section}
    }
}

impl Display for SectionHeader<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let from = self.section.range.start() as u32;
        let to = self.section.range.end() as u32;
        match &self.section.title {
            Some(title) => writeln!(f, "--- '{title}' {COMPART_URL}/block/U+{from:04X} ---")?,
            None => writeln!(f, "--- U+{from:04X}..U+{to:04X} ---")?,
        }
        writeln!(f, "from: {COMPART_URL}/U+{from:04X}")?;
        write!(f, "  to: {COMPART_URL}/U+{to:04X}")
    }
}

/// What `write_sections` wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DumpSummary {
    pub dumped: usize,
    pub unnamed: usize,
}

/// Writes one record line per code point of every section. `show_header` puts a
/// `SectionHeader` above each section, `separate` ends each section with a blank line.
pub fn write_sections<W: Write>(out: &mut W, sections: &[Section], show_header: bool, separate: bool)
    -> io::Result<DumpSummary>
{
    let mut summary = DumpSummary::default();
    for section in sections.iter() {
        if show_header {
            writeln!(out, "{}", SectionHeader::new(section))?;
        }
        for record in section.range.iter() {
            if let Some(warning) = &record.warning {
                debug!("{warning}");
                summary.unnamed += 1;
            }
            writeln!(out, "{record}")?;
            summary.dumped += 1;
        }
        if separate {
            writeln!(out)?;
        }
    }
    return Ok(summary);
}

/// Builds the `echo -e` command that prints `text` byte for byte, e.g. `echo -e "\xe2\x96\x9e"`.
pub fn echo_command(text: &str) -> String {
    return format!("echo -e \"{}\"", hex_escape(text.as_bytes()));
}
