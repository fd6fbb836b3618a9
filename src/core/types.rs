use serde::{Deserialize, Serialize};

/// Positional class of an exon within its transcript, as called by HITindex.
///
/// The declaration order is the row/column order of every contingency matrix
/// built by this crate and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitId {
    First,
    FirstInternal,
    Internal,
    InternalLast,
    Last,
}

impl HitId {
    /// All categories in matrix order
    pub const ALL: [HitId; 5] = [
        HitId::First,
        HitId::FirstInternal,
        HitId::Internal,
        HitId::InternalLast,
        HitId::Last,
    ];

    /// Number of categories (matrix dimension)
    pub const COUNT: usize = Self::ALL.len();

    /// Row/column position of this category in a contingency matrix
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::FirstInternal => 1,
            Self::Internal => 2,
            Self::InternalLast => 3,
            Self::Last => 4,
        }
    }

    /// Canonical snake_case label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::FirstInternal => "first_internal",
            Self::Internal => "internal",
            Self::InternalLast => "internal_last",
            Self::Last => "last",
        }
    }

    /// Look up a category from its canonical label.
    /// Returns None for anything outside the five known labels.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

impl std::fmt::Display for HitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalize a raw HITindex `ID` value to its canonical label.
///
/// IDs beginning with an uppercase letter (e.g. `FirstInternal_medium`) are
/// cut at the first underscore and converted to snake case. Any other ID is
/// returned verbatim.
#[must_use]
pub fn normalize_hit_id(raw: &str) -> String {
    if !raw.starts_with(|c: char| c.is_ascii_uppercase()) {
        return raw.to_string();
    }

    let prefix: String = raw
        .chars()
        .take_while(|c| c.is_alphanumeric())
        .collect();

    camel_to_snake(&prefix)
}

/// Convert camel case to snake case: `FirstInternal` becomes `first_internal`.
///
/// A separator is inserted only at lowercase-to-uppercase boundaries, so runs
/// of capitals stay together (`HITIndex` becomes `hitindex`).
#[must_use]
pub fn camel_to_snake(camel: &str) -> String {
    let mut snake = String::with_capacity(camel.len() + 4);
    let mut prev_lower = false;

    for c in camel.chars() {
        if prev_lower && c.is_uppercase() {
            snake.push('_');
        }
        prev_lower = c.is_lowercase();
        snake.extend(c.to_lowercase());
    }

    snake
}
