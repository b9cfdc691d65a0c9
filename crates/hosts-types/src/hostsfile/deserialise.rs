use crate::hostsfile::types::*;

impl HostsFile {
    /// Parse hosts-file text.
    ///
    /// This never fails: a line that cannot be understood is kept as
    /// `Line::Invalid` so that a later `clean` can remove it and
    /// report each one, rather than one bad line making the whole
    /// file unusable.
    pub fn deserialise(data: &str) -> Self {
        let mut file = Self::new();
        for line in data.lines() {
            file.lines.push(parse_line(line));
        }
        file
    }
}

/// Classify a single line.
fn parse_line(line: &str) -> Line {
    let mut state = State::SkipToAddress;
    let mut address = String::new();
    let mut names = Vec::new();

    for (i, c) in line.char_indices() {
        state = match (&state, c) {
            (State::SkipToAddress, '#') => return Line::Comment(line.to_string()),
            (State::ReadingName { start }, '#') => {
                names.push(line[*start..i].to_string());
                State::TrailingComment
            }
            (_, '#') => State::TrailingComment,
            (State::TrailingComment, _) => break,

            (State::SkipToAddress, c) if c.is_whitespace() => state,
            (State::SkipToAddress, _) => State::ReadingAddress { start: i },

            (State::ReadingAddress { start }, c) if c.is_whitespace() => {
                address = line[*start..i].to_string();
                State::SkipToName
            }
            (State::ReadingAddress { .. }, _) => state,

            (State::SkipToName, c) if c.is_whitespace() => state,
            (State::SkipToName, _) => State::ReadingName { start: i },

            (State::ReadingName { start }, c) if c.is_whitespace() => {
                names.push(line[*start..i].to_string());
                State::SkipToName
            }
            (State::ReadingName { .. }, _) => state,
        };
    }

    match state {
        State::SkipToAddress => Line::Blank,
        State::ReadingAddress { .. } => Line::Invalid(line.to_string()),
        State::ReadingName { start } => {
            names.push(line[start..].to_string());
            Line::Mapping { address, names }
        }
        State::SkipToName | State::TrailingComment => {
            if names.is_empty() {
                Line::Invalid(line.to_string())
            } else {
                Line::Mapping { address, names }
            }
        }
    }
}

/// States for the line parser
enum State {
    SkipToAddress,
    ReadingAddress { start: usize },
    SkipToName,
    ReadingName { start: usize },
    TrailingComment,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(address: &str, names: &[&str]) -> Line {
        Line::Mapping {
            address: address.to_string(),
            names: names.iter().map(|name| (*name).to_string()).collect(),
        }
    }

    #[test]
    fn parses_all() {
        let hosts_data = "# hark, a comment!\n\
                          1.2.3.4 one two three four\n\
                          \n\
                          127.0.0.1\tlocalhost\n\
                          ::1 localhost # and a trailing comment\n\
                          0.0.0.0";

        let file = HostsFile::deserialise(hosts_data);

        assert_eq!(
            vec![
                Line::Comment("# hark, a comment!".to_string()),
                mapping("1.2.3.4", &["one", "two", "three", "four"]),
                Line::Blank,
                mapping("127.0.0.1", &["localhost"]),
                mapping("::1", &["localhost"]),
                Line::Invalid("0.0.0.0".to_string()),
            ],
            file.lines
        );
    }

    #[test]
    fn parse_line_parses_an_address_with_names() {
        assert_eq!(
            mapping("1.2.3.4", &["foo", "bar"]),
            parse_line("1.2.3.4 foo bar")
        );
    }

    #[test]
    fn parse_line_classifies_an_address_without_names_as_invalid() {
        assert_eq!(Line::Invalid("1.2.3.4".to_string()), parse_line("1.2.3.4"));
        assert_eq!(
            Line::Invalid("1.2.3.4 # localhost".to_string()),
            parse_line("1.2.3.4 # localhost")
        );
    }

    #[test]
    fn parse_line_classifies_comments_and_blanks() {
        assert_eq!(
            Line::Comment("# a comment".to_string()),
            parse_line("# a comment")
        );
        assert_eq!(
            Line::Comment("  # an indented comment".to_string()),
            parse_line("  # an indented comment")
        );
        assert_eq!(Line::Blank, parse_line(""));
        assert_eq!(Line::Blank, parse_line("   \t"));
    }

    #[test]
    fn parse_line_stops_at_a_trailing_comment() {
        assert_eq!(
            mapping("1.2.3.4", &["foo"]),
            parse_line("1.2.3.4 foo # bar")
        );
        assert_eq!(
            mapping("1.2.3.4", &["foo"]),
            parse_line("1.2.3.4 foo#bar")
        );
    }
}
