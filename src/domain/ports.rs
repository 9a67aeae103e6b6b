use std::collections::HashSet;

/// Digit-only phone numbers known to be abusive. Matching is exact on the
/// normalized digit string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated list. Non-digits are stripped from each
    /// entry; entries left with no digits are dropped.
    pub fn from_delimited(list: &str) -> Self {
        Self::from_entries(list.split(','))
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| digits_only(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    pub fn contains(&self, digits: &str) -> bool {
        self.entries.contains(digits)
    }

    pub fn extend(&mut self, other: Blacklist) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Supplies the blacklist for one evaluation. Implementations are consulted
/// on every call and must not cache across calls.
pub trait BlacklistSource: Send + Sync {
    fn load(&self) -> Blacklist;
}

impl<T: BlacklistSource + ?Sized> BlacklistSource for Box<T> {
    fn load(&self) -> Blacklist {
        (**self).load()
    }
}

impl<T: BlacklistSource + ?Sized> BlacklistSource for &T {
    fn load(&self) -> Blacklist {
        (**self).load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_delimited_strips_punctuation() {
        let list = Blacklist::from_delimited("+1 (809) 555-1234, 555.123.4567");
        assert_eq!(list.len(), 2);
        assert!(list.contains("18095551234"));
        assert!(list.contains("5551234567"));
    }

    #[test]
    fn test_from_delimited_skips_blank_and_digitless_entries() {
        let list = Blacklist::from_delimited(" , ,abc,,8005551212");
        assert_eq!(list.len(), 1);
        assert!(!list.contains(""));
    }

    #[test]
    fn test_empty_list() {
        assert!(Blacklist::from_delimited("").is_empty());
    }
}
