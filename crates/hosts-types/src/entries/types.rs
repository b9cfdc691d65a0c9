use serde::Deserialize;

/// One static address-to-name mapping.
///
/// The address is kept as a string: the tool writes out whatever it
/// was given, it does not validate addresses.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct Entry {
    #[serde(rename = "ip", alias = "IP", default)]
    pub address: String,

    #[serde(rename = "hostname", alias = "HostName", default)]
    pub name: String,
}

impl Entry {
    /// A usable entry has both fields non-empty.
    pub fn is_valid(&self) -> bool {
        !self.address.is_empty() && !self.name.is_empty()
    }
}

/// An ordered list of entries, in input-document order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EntryList {
    pub entries: Vec<Entry>,
    /// How many records were rejected during deserialisation.
    pub rejected: usize,
}

impl EntryList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            rejected: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for EntryList {
    fn default() -> Self {
        Self::new()
    }
}
