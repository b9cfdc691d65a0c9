use std::fmt::Write as _;

use crate::entries::types::*;

impl EntryList {
    /// Render the entries as hosts-file lines, one
    /// `<address><tab><name>` per entry, in input order.
    pub fn serialise(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(&mut out, "{}\t{}", entry.address, entry.name);
        }
        out
    }
}
