#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod input;
pub mod manager;

use std::fmt;
use std::io;

use hosts_types::entries::deserialise as entries_deserialise;
use hosts_types::entries::types::EntryList;
use hosts_types::hostsfile::types::HostsFile;

use self::manager::HostsPaths;

/// Runtime behaviour flags, built once from the CLI arguments and
/// passed down explicitly: there is no process-global flag state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Print the resulting content instead of touching the filesystem.
    pub dry_run: bool,
    /// Merge entries into the existing file instead of replacing it.
    pub merge: bool,
    /// Log at DEBUG rather than INFO.
    pub verbose: bool,
    /// Wait for enter to be pressed before exiting.
    pub pause: bool,
}

/// An error which aborts the run.  Per-record problems in the input
/// document are not here: they are logged and skipped where they
/// occur.
#[derive(Debug)]
pub enum Error {
    /// No document given on the command line or stdin.
    InputMissing,
    /// The entries document could not be parsed at all.
    Parse { error: entries_deserialise::Error },
    /// The hosts file could not be read, or the backup copy could not
    /// be made.  The live file has not been touched.
    Backup { error: io::Error },
    /// Writing the new content failed.  The backup is intact; recovery
    /// from it is left to the operator.
    Write { error: io::Error },
    /// The written file could not be flushed or closed cleanly: the
    /// data reached the file but may not be durable.
    Close { error: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputMissing => {
                write!(f, "no host entries given on the command line or stdin")
            }
            Error::Parse {
                error: entries_deserialise::Error::BadDocument { error },
            } => write!(f, "could not parse entries document: {error}"),
            Error::Backup { error } => write!(f, "could not back up hosts file: {error}"),
            Error::Write { error } => write!(f, "could not write hosts file: {error}"),
            Error::Close { error } => write!(f, "could not finalise hosts file: {error}"),
        }
    }
}

/// Run the whole update: parse the document, compute the new hosts
/// file content, then back it up and write it.  In dry-run mode the
/// content is printed to stdout instead and nothing is touched.
///
/// # Errors
///
/// `Error::Parse` if the document is unusable (before any file
/// access); `Error::Backup` if the current file cannot be read or
/// copied aside (before any mutation); `Error::Write` / `Error::Close`
/// if writing the new content fails.
pub fn run(options: &Options, paths: &HostsPaths, document: &str) -> Result<(), Error> {
    tracing::debug!(%document, "entries document");

    let entries =
        EntryList::deserialise(document).map_err(|error| Error::Parse { error })?;
    if entries.rejected > 0 {
        tracing::info!(rejected = entries.rejected, "ignored malformed host entries");
    }
    if entries.is_empty() {
        tracing::info!("no valid host entries, nothing to do");
        return Ok(());
    }

    let current =
        manager::read_current(&paths.hosts).map_err(|error| Error::Backup { error })?;

    let new_content = if options.merge {
        let mut file = HostsFile::deserialise(current.as_deref().unwrap_or(""));
        file.merge(&entries);
        file.serialise()
    } else {
        entries.serialise()
    };

    tracing::debug!(content = %new_content, "new hosts file content");

    if options.dry_run {
        // a dry run must not touch the filesystem at all, so this
        // check comes before the backup as well as the write
        print!("{new_content}");
        return Ok(());
    }

    if current.is_some() {
        manager::backup(&paths.hosts, &paths.backup)
            .map_err(|error| Error::Backup { error })?;
    }
    manager::write(&paths.hosts, &new_content)?;

    tracing::info!(path = ?paths.hosts, entries = entries.len(), "hosts file updated");
    Ok(())
}
