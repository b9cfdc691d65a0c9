use std::collections::HashSet;

use crate::entries::types::EntryList;

/// One line of a hosts file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Line {
    /// An address with the names bound to it.
    Mapping { address: String, names: Vec<String> },
    /// A comment line, preserved verbatim.
    Comment(String),
    /// An empty or whitespace-only line.
    Blank,
    /// A line that could not be understood (an address with no names),
    /// removed by `clean`.
    Invalid(String),
}

/// A hosts file as an ordered sequence of classified lines.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HostsFile {
    pub lines: Vec<Line>,
}

impl HostsFile {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Merge new entries into this file.  Each entry is appended as
    /// its own mapping line and then the combined result is cleaned,
    /// so an entry which duplicates an existing (address, name)
    /// binding is not added again.
    pub fn merge(&mut self, entries: &EntryList) {
        for entry in &entries.entries {
            self.lines.push(Line::Mapping {
                address: entry.address.clone(),
                names: vec![entry.name.clone()],
            });
        }
        self.clean();
    }

    /// Remove duplicate (address, name) bindings and invalid lines.
    ///
    /// The first occurrence of a binding wins.  A mapping line only
    /// loses the names already bound to the same address earlier, and
    /// is dropped when no names remain.  Lines binding the same name
    /// to a different address, or the same address to a different
    /// name, are left alone.  Comments and blank lines are untouched.
    pub fn clean(&mut self) {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        self.lines.retain_mut(|line| match line {
            Line::Mapping { address, names } => {
                names.retain(|name| seen.insert((address.clone(), name.clone())));
                !names.is_empty()
            }
            Line::Invalid(raw) => {
                tracing::warn!(line = %raw, "dropping malformed hosts line");
                false
            }
            Line::Comment(_) | Line::Blank => true,
        });
    }
}

impl Default for HostsFile {
    fn default() -> Self {
        Self::new()
    }
}
