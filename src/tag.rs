//! Field annotations used to derive serialization keys.
//!
//! [`FieldTags`] is a small ordered map of annotation key to value, the
//! metadata a record type attaches to each of its fields. It can be built
//! directly or read from the conventional `key:"value" key2:"value"` form.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

/// The tag key consulted for serialization names.
pub const JSON_KEY: &str = "json";

fn pair_regex() -> &'static Regex {
    static PAIR: OnceLock<Regex> = OnceLock::new();
    PAIR.get_or_init(|| {
        Regex::new(r#"([^\x00-\x20:"\x7f]+):"((?:[^"\\]|\\.)*)""#).expect("tag pattern is valid")
    })
}

/// Ordered annotation key/value pairs for one field.
///
/// # Example
///
/// ```rust
/// use validkit::FieldTags;
///
/// let tags = FieldTags::parse(r#"json:"user_age,omitempty" valid:"range(0|150)""#).unwrap();
///
/// assert_eq!(tags.get("valid"), Some("range(0|150)"));
/// assert_eq!(tags.serialization_key(), Some("user_age"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldTags {
    entries: IndexMap<String, String>,
}

impl FieldTags {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a tag and returns self for chaining.
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Parses space-separated `key:"value"` pairs.
    ///
    /// A key is any run of printable characters other than space, `:` and
    /// `"`. Values are double-quoted strings with the usual backslash
    /// escapes (`\n`, `\t`, `\"`, `\uXXXX`, ...). A repeated key keeps its
    /// first value. Anything other than whitespace between pairs, or an
    /// unknown escape, is an error.
    pub fn parse(raw: &str) -> Result<Self, TagError> {
        let mut entries = IndexMap::new();
        let mut cursor = 0;

        for caps in pair_regex().captures_iter(raw) {
            let whole = caps.get(0).map_or(cursor..cursor, |m| m.range());
            if !raw[cursor..whole.start].trim().is_empty() {
                return Err(TagError::Malformed { position: cursor });
            }
            cursor = whole.end;

            let key = &caps[1];
            let value = match caps.get(2) {
                Some(m) => unescape(m.as_str(), m.start())?,
                None => String::new(),
            };
            entries.entry(key.to_string()).or_insert(value);
        }

        if !raw[cursor..].trim().is_empty() {
            return Err(TagError::Malformed { position: cursor });
        }

        tracing::trace!(tags = entries.len(), "parsed field tags");
        Ok(Self { entries })
    }

    /// Returns the value for `key`, or None when the field has no such tag.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the number of tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the field carries no tags.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the serialization name from the `json` tag.
    ///
    /// The tag value is split on `,` and the first segment is used; an empty
    /// segment (e.g. `json:",omitempty"`) or a missing tag yields None.
    pub fn serialization_key(&self) -> Option<&str> {
        let value = self.get(JSON_KEY)?;
        let name = value.split(',').next().unwrap_or_default();
        if name.is_empty() {
            tracing::trace!(tag = value, "json tag carries no field name");
            None
        } else {
            Some(name)
        }
    }
}

/// Decodes the backslash escapes of a quoted tag value starting at byte `offset`.
fn unescape(value: &str, offset: usize) -> Result<String, TagError> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let invalid = TagError::InvalidEscape { position: offset + i };
        let decoded = match chars.next().map(|(_, e)| e) {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('a') => '\u{07}',
            Some('b') => '\u{08}',
            Some('f') => '\u{0c}',
            Some('v') => '\u{0b}',
            Some('\\') => '\\',
            Some('"') => '"',
            Some('\'') => '\'',
            Some('x') => hex_char(&mut chars, 2).filter(char::is_ascii).ok_or(invalid)?,
            Some('u') => hex_char(&mut chars, 4).ok_or(invalid)?,
            Some('U') => hex_char(&mut chars, 8).ok_or(invalid)?,
            _ => return Err(invalid),
        };
        out.push(decoded);
    }
    Ok(out)
}

fn hex_char(chars: &mut std::str::CharIndices<'_>, digits: usize) -> Option<char> {
    let mut code = 0u32;
    for _ in 0..digits {
        let (_, c) = chars.next()?;
        code = code * 16 + c.to_digit(16)?;
    }
    char::from_u32(code)
}

/// Errors that can occur while reading a tag string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// Text at `position` is not a `key:"value"` pair.
    #[error("malformed field tag at byte {position}")]
    Malformed { position: usize },

    /// The escape sequence starting at `position` is not recognised.
    #[error("invalid escape in field tag at byte {position}")]
    InvalidEscape { position: usize },
}
