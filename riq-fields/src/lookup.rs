//! Lookup arguments and name normalization.
//!
//! A lookup may be a display name, a symbol-style name, or an id. Callers
//! hand any of them to the same resolution functions; [`Lookup::kind`]
//! decides how each one is matched.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// A field or option lookup supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// A free-form name such as `"Deal Size"`.
    Name(String),
    /// A symbol-style name such as `deal_size`.
    Symbol(String),
    /// A numeric id.
    Id(i64),
}

/// How a lookup is matched after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKind {
    /// Compare against descriptor ids as strings.
    Id(String),
    /// Compare against normalized names or displays.
    Name(String),
}

static INTEGER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn integer_pattern() -> &'static Regex {
    INTEGER_PATTERN.get_or_init(|| Regex::new(r"^[+-]?\d+$").expect("Invalid integer regex"))
}

impl Lookup {
    /// Build a symbol-style lookup.
    pub fn symbol(name: impl Into<String>) -> Self {
        Lookup::Symbol(name.into())
    }

    /// The lookup rendered as text, before any normalization.
    pub fn as_text(&self) -> String {
        match self {
            Lookup::Name(s) | Lookup::Symbol(s) => s.clone(),
            Lookup::Id(id) => id.to_string(),
        }
    }

    /// Classify the lookup.
    ///
    /// Anything whose text form looks like an integer is an id lookup, even
    /// when it arrived as a name. Everything else, including malformed ids
    /// such as `"12a"`, is matched by name.
    pub fn kind(&self) -> LookupKind {
        let text = self.as_text();
        if integer_pattern().is_match(&text) {
            LookupKind::Id(text)
        } else {
            LookupKind::Name(to_snym(&text))
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Symbol(s) => write!(f, ":{s}"),
            Lookup::Name(s) => write!(f, "{s}"),
            Lookup::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for Lookup {
    fn from(value: &str) -> Self {
        Lookup::Name(value.to_string())
    }
}

impl From<String> for Lookup {
    fn from(value: String) -> Self {
        Lookup::Name(value)
    }
}

impl From<&String> for Lookup {
    fn from(value: &String) -> Self {
        Lookup::Name(value.clone())
    }
}

impl From<&Lookup> for Lookup {
    fn from(value: &Lookup) -> Self {
        value.clone()
    }
}

impl From<i64> for Lookup {
    fn from(value: i64) -> Self {
        Lookup::Id(value)
    }
}

impl From<i32> for Lookup {
    fn from(value: i32) -> Self {
        Lookup::Id(value.into())
    }
}

impl From<u32> for Lookup {
    fn from(value: u32) -> Self {
        Lookup::Id(value.into())
    }
}

/// Canonical form used to compare names and displays.
///
/// Lower-cases the input, collapses every run of non-alphanumeric characters
/// into a single `_` and trims separators from both ends, so `"Deal Size"`,
/// `"deal-size"` and `"Deal_Size"` all become `deal_size`.
pub fn to_snym(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_separator = false;
    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c);
        } else {
            pending_separator = true;
        }
    }
    out
}
