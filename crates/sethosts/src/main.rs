use clap::Parser;
use std::io::{self, stdin};
use std::process;
use tracing_subscriber::EnvFilter;

use sethosts::input::read_document;
use sethosts::manager::HostsPaths;
use sethosts::{run, Options};

// the doc comments for this struct turn into the CLI help text
#[derive(Parser)]
/// Write the system hosts file from a JSON list of entries.
///
/// The entries are taken from the command line (or one line of stdin)
/// as a JSON array of records with "ip" and "hostname" fields.  The
/// current file is backed up to hosts.bak next to it and then
/// replaced; with --merge the entries are instead combined with the
/// existing content, keeping comments and dropping duplicates.
///
/// The hosts file lives at System32\drivers\etc\hosts under the
/// directory named by the SystemRoot environment variable.
///
/// Concurrent runs against the same hosts file are not coordinated:
/// there is no file locking, and the last writer wins.
struct Args {
    /// JSON entries document; read from stdin if not given
    document: Vec<String>,

    /// Print the resulting hosts file content instead of writing it
    #[clap(short, long)]
    dry_run: bool,

    /// Merge entries into the existing content instead of replacing it
    #[clap(short, long)]
    merge: bool,

    /// Enable extra diagnostic logging
    #[clap(short, long)]
    verbose: bool,

    /// Wait for enter to be pressed before exiting
    #[clap(short, long)]
    pause: bool,
}

fn main() {
    let args = Args::parse();

    let options = Options {
        dry_run: args.dry_run,
        merge: args.merge,
        verbose: args.verbose,
        pause: args.pause,
    };

    // stdout is reserved for dry-run output, so logs go to stderr
    let default_filter = if options.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let result = read_document(&args.document, stdin().lock())
        .and_then(|document| run(&options, &HostsPaths::from_env(), &document));

    let code = match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };

    if options.pause {
        println!("Press enter to exit");
        let mut buf = String::new();
        let _ = stdin().read_line(&mut buf);
    }

    process::exit(code);
}
