use std::io::BufRead;

use crate::Error;

/// Produce the input document: the positional arguments joined with
/// spaces if any were given, otherwise one line read from `stdin`.
/// Arguments which are blank after trimming do not count as given.
///
/// # Errors
///
/// `Error::InputMissing` if both sources are empty after trimming, or
/// if stdin cannot be read.
pub fn read_document<R: BufRead>(args: &[String], mut stdin: R) -> Result<String, Error> {
    let joined = args.join(" ");
    if !joined.trim().is_empty() {
        return Ok(joined);
    }

    let mut line = String::new();
    if let Err(error) = stdin.read_line(&mut line) {
        tracing::warn!(?error, "could not read from stdin");
        return Err(Error::InputMissing);
    }

    if line.trim().is_empty() {
        Err(Error::InputMissing)
    } else {
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    #[test]
    fn arguments_take_precedence_over_stdin() {
        if let Ok(document) = read_document(
            &["[]".to_string()],
            Cursor::new("[{\"ip\":\"1.2.3.4\"}]\n"),
        ) {
            assert_eq!("[]", document);
        } else {
            panic!("unexpected input failure");
        }
    }

    #[test]
    fn multiple_arguments_are_joined_with_spaces() {
        let args = vec!["[{\"ip\":".to_string(), "\"1.2.3.4\"}]".to_string()];

        if let Ok(document) = read_document(&args, Cursor::new("")) {
            assert_eq!("[{\"ip\": \"1.2.3.4\"}]", document);
        } else {
            panic!("unexpected input failure");
        }
    }

    #[test]
    fn falls_back_to_one_line_of_stdin() {
        if let Ok(document) = read_document(&[], Cursor::new("[]\nleftover")) {
            assert_eq!("[]", document);
        } else {
            panic!("unexpected input failure");
        }
    }

    #[test]
    fn blank_arguments_fall_back_to_stdin() {
        if let Ok(document) = read_document(&["  ".to_string()], Cursor::new("[]\n")) {
            assert_eq!("[]", document);
        } else {
            panic!("unexpected input failure");
        }
    }

    #[test]
    fn empty_everything_is_missing_input() {
        assert!(matches!(
            read_document(&[], Cursor::new("")),
            Err(Error::InputMissing)
        ));
        assert!(matches!(
            read_document(&[], Cursor::new("   \n")),
            Err(Error::InputMissing)
        ));
    }
}
