use std::fmt::Write as _;

use crate::hostsfile::types::*;

impl HostsFile {
    /// Render the file back to text.  Mapping lines are normalised to
    /// `<address><tab><names>` (names separated by single spaces);
    /// comment and blank lines are kept as they were.
    pub fn serialise(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Mapping { address, names } => {
                    let _ = writeln!(&mut out, "{}\t{}", address, names.join(" "));
                }
                Line::Comment(text) | Line::Invalid(text) => {
                    let _ = writeln!(&mut out, "{text}");
                }
                Line::Blank => out.push('\n'),
            }
        }
        out
    }
}
