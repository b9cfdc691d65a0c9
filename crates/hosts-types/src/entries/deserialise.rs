use crate::entries::types::*;

impl EntryList {
    /// Parse a JSON document of host entries: an array of records with
    /// "ip" and "hostname" fields (the legacy "IP" / "HostName"
    /// spellings are also accepted).
    ///
    /// A record with an empty or missing field is not a parse error:
    /// it is logged and skipped, and counted on the returned list.
    ///
    /// # Errors
    ///
    /// If the document is not a JSON array of records.
    pub fn deserialise(document: &str) -> Result<Self, Error> {
        let records: Vec<Entry> =
            serde_json::from_str(document).map_err(|error| Error::BadDocument { error })?;

        let mut list = Self::new();
        for entry in records {
            if entry.is_valid() {
                list.entries.push(entry);
            } else {
                tracing::warn!(
                    address = %entry.address,
                    name = %entry.name,
                    "ignoring malformed host entry"
                );
                list.rejected += 1;
            }
        }
        Ok(list)
    }
}

/// An error that can occur reading an entry document.
#[derive(Debug)]
pub enum Error {
    BadDocument { error: serde_json::Error },
}
