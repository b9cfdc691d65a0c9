use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use crate::Error;

/// Where the hosts file and its backup live.  Carried explicitly,
/// rather than computed where it is used, so that tests can point the
/// tool at a scratch directory.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HostsPaths {
    pub hosts: PathBuf,
    pub backup: PathBuf,
}

impl HostsPaths {
    /// The conventional location: `System32\drivers\etc` under the
    /// directory named by the `SystemRoot` environment variable.  An
    /// unset variable degrades to a relative path rather than an
    /// error.
    pub fn from_env() -> Self {
        let dir = PathBuf::from(env::var_os("SystemRoot").unwrap_or_default())
            .join("System32")
            .join("drivers")
            .join("etc");
        Self::in_dir(&dir)
    }

    /// The hosts file and its backup in the given directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            hosts: dir.join("hosts"),
            backup: dir.join("hosts.bak"),
        }
    }
}

/// Read the current hosts file.  A missing file is `None`, not an
/// error: there is nothing to back up or merge with.
pub fn read_current(hosts: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(hosts) {
        Ok(data) => Ok(Some(data)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error),
    }
}

/// Copy the hosts file aside, replacing any previous backup.
pub fn backup(hosts: &Path, backup: &Path) -> io::Result<()> {
    fs::copy(hosts, backup)?;
    Ok(())
}

/// Write the new hosts file content.
///
/// The file is flushed and synced before returning, so that a failure
/// at close time surfaces as `Error::Close` instead of being
/// swallowed by `Drop`.  `Error::Write` means the content did not make
/// it out; `Error::Close` means it did, but may not be durable.
pub fn write(hosts: &Path, content: &str) -> Result<(), Error> {
    let file = File::create(hosts).map_err(|error| Error::Write { error })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .map_err(|error| Error::Write { error })?;
    let file = writer.into_inner().map_err(|error| Error::Close {
        error: error.into_error(),
    })?;
    file.sync_all().map_err(|error| Error::Close { error })
}
