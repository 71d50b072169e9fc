//! Tag filter: restricts resolution to artifacts sharing at least one tag
//! with the caller-supplied set. An empty filter matches everything.

use std::collections::BTreeSet;

/// True if `filter` is empty or shares any element with `item`.
pub fn matches(filter: &BTreeSet<String>, item: &BTreeSet<String>) -> bool {
    filter.is_empty() || !filter.is_disjoint(item)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    tags: BTreeSet<String>,
}

impl TagFilter {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(Into::into)
                .filter(|t: &String| !t.is_empty())
                .collect(),
        }
    }

    /// Filter that lets every artifact through.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn matches(&self, item_tags: &BTreeSet<String>) -> bool {
        matches(&self.tags, item_tags)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(matches(&set(&[]), &set(&[])));
        assert!(matches(&set(&[]), &set(&["lobby"])));
        assert!(!TagFilter::disabled().is_enabled());
    }

    #[test]
    fn any_common_tag_matches() {
        let filter = set(&["lobby", "survival"]);
        assert!(matches(&filter, &set(&["survival", "economy"])));
        assert!(!matches(&filter, &set(&["creative"])));
        assert!(!matches(&filter, &set(&[])));
    }

    #[test]
    fn commutative() {
        let a = set(&["x", "y"]);
        let b = set(&["y", "z"]);
        let c = set(&["q"]);
        assert_eq!(matches(&a, &b), matches(&b, &a));
        assert_eq!(matches(&a, &c), matches(&c, &a));
    }

    #[test]
    fn filter_ignores_blank_tags() {
        let f = TagFilter::new(["", "lobby"]);
        assert!(f.is_enabled());
        assert_eq!(f.tags().collect::<Vec<_>>(), vec!["lobby"]);
        assert!(!TagFilter::new([""]).is_enabled());
    }
}
