//! List query: optional sort and head-limit

use books_shared::constants::SORT_BY_TITLE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Catalog order, i.e. order of insertion.
    #[default]
    Insertion,
    /// Ascending by title, compared as plain strings.
    ByTitle,
}

impl SortOrder {
    /// Only the exact value `by_title` sorts. Anything else is ignored.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(SORT_BY_TITLE) => Self::ByTitle,
            _ => Self::Insertion,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: SortOrder,
    /// Keep at most this many entries. Always > 0 when set.
    pub limit: Option<usize>,
}

impl ListQuery {
    pub fn new(sort: SortOrder, limit: Option<usize>) -> Self {
        Self {
            sort,
            limit: limit.filter(|n| *n > 0),
        }
    }

    /// Build from raw query-string values. A limit that does not parse as an
    /// integer, or is not strictly positive, means "no limit".
    pub fn from_raw(sort: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(SortOrder::from_raw(sort), limit.and_then(parse_limit))
    }
}

/// Integer text with an optional sign. Single `_` separators may sit
/// between digits, as in `1_000`.
fn parse_limit(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    let n = raw.replace('_', "").parse::<i64>().ok()?;
    if n > 0 {
        usize::try_from(n).ok()
    } else {
        None
    }
}
