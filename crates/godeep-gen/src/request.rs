//! Generation requests and skip selectors.

use std::collections::BTreeSet;

/// Selector paths whose subtrees are shallow-copied instead of recursed into.
///
/// Paths are built from the root of the generated type: `Field.Sub` for struct
/// fields, `[i]` for slice and array elements, `[k]` for map contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkipSet(BTreeSet<String>);

impl SkipSet {
    /// Parse a comma-separated selector list. Empty items are ignored.
    pub fn parse(selectors: &str) -> Self {
        selectors
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains(path)
    }
}

impl<S: Into<String>> FromIterator<S> for SkipSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// One type to generate a copier for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub type_name: String,
    pub skips: SkipSet,
}

impl Request {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            skips: SkipSet::default(),
        }
    }

    pub fn with_skips(mut self, skips: SkipSet) -> Self {
        self.skips = skips;
        self
    }
}

/// Pair the n-th skip list with the n-th type. Types past the end of the
/// skip lists get an empty set; extra skip lists are ignored.
pub fn pair_requests(types: &[String], skips: &[String]) -> Vec<Request> {
    types
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let skips = skips.get(i).map(|s| SkipSet::parse(s)).unwrap_or_default();
            Request::new(name.as_str()).with_skips(skips)
        })
        .collect()
}
