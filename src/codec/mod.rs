//! # Line-oriented text format
//!
//! One entity per line, whitespace-separated tokens, leading type tag:
//!
//! ```text
//! User          <name> <id> <privilegeLevel>
//! Student       <name> <id> <privilegeLevel> <group>
//! Teacher       <name> <id> <privilegeLevel> <department>
//! Administrator <name> <id> <privilegeLevel> <secret>
//! Resource      <name> <requiredLevel>
//! ```
//!
//! Text tokens are escaped (see [`token`]) so values containing whitespace survive a
//! round trip. Blank lines are ignored. What happens to a line whose tag is not listed
//! above depends on the [`ParseMode`].

pub mod error;
pub mod token;

pub use error::*;

use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use crate::model::{Record, RecordKind, Resource, ValidationError};

/// How the reader treats lines with an unrecognized tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Skip the line and log a warning.
    #[default]
    Lenient,
    /// Fail with [`ParseError::UnknownTag`].
    Strict,
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            other => Err(format!("unknown parse mode `{}` (expected strict or lenient)", other)),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Lenient => f.write_str("lenient"),
            ParseMode::Strict => f.write_str("strict"),
        }
    }
}

/// A single decoded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Record(Record),
    Resource(Resource),
}

/// Outcome of decoding one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Entry(Entry),
    Blank,
    /// Unknown tag, dropped in lenient mode.
    Skipped { tag: String },
}

pub fn encode_record(record: &Record) -> String {
    let mut line = format!(
        "{} {} {} {}",
        record.tag(),
        token::escape(record.name()),
        record.id(),
        record.privilege_level()
    );
    match record.kind() {
        RecordKind::User => {}
        RecordKind::Student { group } => {
            line.push(' ');
            line.push_str(&group.to_string());
        }
        RecordKind::Teacher { department } => {
            line.push(' ');
            line.push_str(&token::escape(department));
        }
        RecordKind::Administrator { secret } => {
            line.push(' ');
            line.push_str(&token::escape(secret));
        }
    }
    line
}

pub fn encode_resource(resource: &Resource) -> String {
    format!(
        "Resource {} {}",
        token::escape(resource.name()),
        resource.required_level()
    )
}

/// Decodes one line. `line_no` is 1-based and only used for error reporting.
pub fn decode_line(line_no: usize, text: &str, mode: ParseMode) -> Result<Decoded, ParseError> {
    let mut fields = Fields::new(line_no, text);
    let Some(tag) = fields.next_raw() else {
        return Ok(Decoded::Blank);
    };

    let entry = match tag {
        "User" | "Student" | "Teacher" | "Administrator" => {
            let name = fields.text("name")?;
            let id = fields.int("id")?;
            let level = fields.int("privilegeLevel")?;
            let kind = match tag {
                "User" => RecordKind::User,
                "Student" => RecordKind::Student {
                    group: fields.int("group")?,
                },
                "Teacher" => RecordKind::Teacher {
                    department: fields.text("department")?,
                },
                _ => RecordKind::Administrator {
                    secret: fields.text("secret")?,
                },
            };
            fields.finish()?;
            let record = Record::new(name, id, level, kind).map_err(|e| fields.invalid(e))?;
            Entry::Record(record)
        }
        "Resource" => {
            let name = fields.text("name")?;
            let level = fields.int("requiredLevel")?;
            fields.finish()?;
            Entry::Resource(Resource::new(name, level).map_err(|e| fields.invalid(e))?)
        }
        other => {
            return match mode {
                ParseMode::Lenient => Ok(Decoded::Skipped { tag: other.to_string() }),
                ParseMode::Strict => Err(ParseError::UnknownTag {
                    line: line_no,
                    tag: other.to_string(),
                }),
            };
        }
    };
    Ok(Decoded::Entry(entry))
}

/// Cursor over the tokens of a single line.
///
/// Shared with other line formats in this crate that use the same token rules.
pub(crate) struct Fields<'a> {
    line: usize,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(line: usize, text: &'a str) -> Self {
        Self {
            line,
            tokens: text.split_whitespace(),
        }
    }

    pub(crate) fn next_raw(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    fn require(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.tokens.next().ok_or(ParseError::MissingField {
            line: self.line,
            field,
        })
    }

    pub(crate) fn text(&mut self, field: &'static str) -> Result<String, ParseError> {
        let raw = self.require(field)?;
        token::unescape(raw).ok_or_else(|| ParseError::InvalidEscape {
            line: self.line,
            token: raw.to_string(),
        })
    }

    pub(crate) fn int(&mut self, field: &'static str) -> Result<i64, ParseError> {
        let raw = self.require(field)?;
        raw.parse().map_err(|_| ParseError::InvalidInteger {
            line: self.line,
            field,
            token: raw.to_string(),
        })
    }

    pub(crate) fn uint(&mut self, field: &'static str) -> Result<u32, ParseError> {
        let raw = self.require(field)?;
        raw.parse().map_err(|_| ParseError::InvalidInteger {
            line: self.line,
            field,
            token: raw.to_string(),
        })
    }

    pub(crate) fn finish(&mut self) -> Result<(), ParseError> {
        match self.tokens.next() {
            None => Ok(()),
            Some(extra) => Err(ParseError::TrailingTokens {
                line: self.line,
                token: extra.to_string(),
            }),
        }
    }

    pub(crate) fn invalid(&self, source: ValidationError) -> ParseError {
        ParseError::InvalidRecord {
            line: self.line,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> Entry {
        match decode_line(1, text, ParseMode::Strict) {
            Ok(Decoded::Entry(e)) => e,
            other => panic!("expected entry, got {:?}", other),
        }
    }

    #[test]
    fn encodes_each_kind() {
        let cases = [
            (Record::user("Ann", 4, 0).unwrap(), "User Ann 4 0"),
            (Record::student("Nick", 1, 1, 101).unwrap(), "Student Nick 1 1 101"),
            (Record::teacher("Ms. Brown", 2, 3, "Computer Science").unwrap(),
             "Teacher Ms.\\sBrown 2 3 Computer\\sScience"),
            (Record::administrator("Smith", 3, 5, "k1").unwrap(), "Administrator Smith 3 5 k1"),
        ];
        for (record, expected) in cases {
            assert_eq!(encode_record(&record), expected);
        }
        assert_eq!(
            encode_resource(&Resource::new("Server Room", 5).unwrap()),
            "Resource Server\\sRoom 5"
        );
    }

    #[test]
    fn decodes_plain_lines_from_unescaped_files() {
        assert_eq!(
            entry("Teacher   Brown 2 3   CS"),
            Entry::Record(Record::teacher("Brown", 2, 3, "CS").unwrap())
        );
        assert_eq!(
            entry("Resource Lab 3"),
            Entry::Resource(Resource::new("Lab", 3).unwrap())
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(decode_line(7, "   \t", ParseMode::Strict), Ok(Decoded::Blank));
    }

    #[test]
    fn unknown_tag_depends_on_mode() {
        assert_eq!(
            decode_line(2, "Janitor Bob 9 0", ParseMode::Lenient),
            Ok(Decoded::Skipped { tag: "Janitor".into() })
        );
        assert_eq!(
            decode_line(2, "Janitor Bob 9 0", ParseMode::Strict),
            Err(ParseError::UnknownTag { line: 2, tag: "Janitor".into() })
        );
    }

    #[test]
    fn arity_and_type_errors() {
        assert_eq!(
            decode_line(3, "Student Nick 1 1", ParseMode::Lenient),
            Err(ParseError::MissingField { line: 3, field: "group" })
        );
        assert_eq!(
            decode_line(3, "User Nick 1 1 extra", ParseMode::Lenient),
            Err(ParseError::TrailingTokens { line: 3, token: "extra".into() })
        );
        assert_eq!(
            decode_line(4, "Resource Lab high", ParseMode::Lenient),
            Err(ParseError::InvalidInteger {
                line: 4,
                field: "requiredLevel",
                token: "high".into()
            })
        );
    }

    #[test]
    fn invalid_values_report_validation_cause() {
        let err = decode_line(5, "User Nick -1 1", ParseMode::Lenient).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidRecord {
                line: 5,
                source: ValidationError::Negative { field: "User ID", value: -1 }
            }
        );
    }

    #[test]
    fn parse_mode_from_str() {
        assert_eq!("STRICT".parse::<ParseMode>(), Ok(ParseMode::Strict));
        assert_eq!("lenient".parse::<ParseMode>(), Ok(ParseMode::Lenient));
        assert!("loose".parse::<ParseMode>().is_err());
    }
}
