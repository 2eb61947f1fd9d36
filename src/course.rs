//! Course records and line parsing

use std::fmt;

/// A single course record as loaded from the catalog source.
///
/// `number` is the unique key. Key comparison is ordinal (byte-wise)
/// and case-sensitive; no normalization is applied anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course number, e.g. "CSCI200"
    pub number: String,
    /// Course title, may be empty
    pub title: String,
    /// Prerequisite course numbers in encounter order.
    /// Never validated against the catalog; duplicates are allowed.
    pub prerequisites: Vec<String>,
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.number, self.title)
    }
}

impl Course {
    /// Parse one delimited line into a course record.
    ///
    /// Field 1 is the course number, field 2 the title; both are required.
    /// A line with fewer than two fields yields `None` and is skipped by
    /// the loader. Remaining fields become prerequisites in encounter
    /// order.
    ///
    /// Each prerequisite field has at most one leading space stripped
    /// (the source format writes `, ` between entries, not a general
    /// whitespace trim); a field that is empty after the strip is
    /// dropped. No quoting or escaping is supported, so a delimiter
    /// inside a field splits it.
    ///
    /// A delimiter at the end of the line produces no field: the final
    /// empty segment is dropped, so `"X1,"` has only one field and is
    /// skipped, while `"X1,,"` still carries an empty title.
    pub fn parse_line(line: &str, delimiter: char) -> Option<Self> {
        let mut fields = line.split_terminator(delimiter);

        let (Some(number), Some(title)) = (fields.next(), fields.next()) else {
            return None;
        };

        let prerequisites = fields
            .map(|field| field.strip_prefix(' ').unwrap_or(field))
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        Some(Self {
            number: number.to_string(),
            title: title.to_string(),
            prerequisites,
        })
    }
}
