use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPathSegment {
    Key(String),
    Index(usize),
}

/// Locator of a value inside a plan document, rendered as `$.a[0].b`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<FieldPathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<FieldPathSegment>) -> Self {
        Self { segments }
    }

    /// Returns a copy of this path extended by an object key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut out = self.clone();
        out.segments.push(FieldPathSegment::Key(key.into()));
        out
    }

    /// Returns a copy of this path extended by an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut out = self.clone();
        out.segments.push(FieldPathSegment::Index(index));
        out
    }

    pub fn segments(&self) -> &[FieldPathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldPathParseError {
    #[error("field path must start with '$'")]
    MissingRoot,
    #[error("empty key segment at offset {0}")]
    EmptyKey(usize),
    #[error("invalid index segment at offset {0}")]
    InvalidIndex(usize),
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

impl std::str::FromStr for FieldPath {
    type Err = FieldPathParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let Some(rest) = input.strip_prefix('$') else {
            return Err(FieldPathParseError::MissingRoot);
        };

        let mut segments = Vec::new();
        let mut chars = rest.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            let offset = offset + 1;
            match c {
                '.' => {
                    let mut key = String::new();
                    while let Some((_, next)) = chars.next_if(|(_, next)| is_key_char(*next)) {
                        key.push(next);
                    }
                    if key.is_empty() {
                        return Err(FieldPathParseError::EmptyKey(offset));
                    }
                    segments.push(FieldPathSegment::Key(key));
                }
                '[' => {
                    let mut digits = String::new();
                    while let Some((_, next)) = chars.next_if(|(_, next)| next.is_ascii_digit()) {
                        digits.push(next);
                    }
                    if chars.next().map(|(_, close)| close) != Some(']') {
                        return Err(FieldPathParseError::InvalidIndex(offset));
                    }
                    let index = digits
                        .parse::<usize>()
                        .map_err(|_| FieldPathParseError::InvalidIndex(offset))?;
                    segments.push(FieldPathSegment::Index(index));
                }
                found => return Err(FieldPathParseError::UnexpectedChar { found, offset }),
            }
        }

        Ok(Self::from_segments(segments))
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                FieldPathSegment::Key(key) => write!(f, ".{key}")?,
                FieldPathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "field_path_test.rs"]
mod tests;
