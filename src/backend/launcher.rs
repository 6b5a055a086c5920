use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use crate::config::Settings;
use crate::error::Error;

/// Textual process listing for a name filter. An `Err` means "nothing
/// matched this attempt", never a fatal condition; `pgrep` exits non-zero
/// when there is no match yet.
pub trait ProcessTable {
    fn query(&self, name: &str) -> io::Result<String>;
}

/// `pgrep -fl <name>`: one line per match, leading decimal PID followed by
/// the command line.
pub struct Pgrep;

impl ProcessTable for Pgrep {
    fn query(&self, name: &str) -> io::Result<String> {
        let output = Command::new("pgrep").args(["-fl", name]).output()?;
        if !output.status.success() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("pgrep exited with {}", output.status),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Asks the OS to launch an application bundle. Fire and forget: the PID is
/// discovered separately through the process table.
pub trait Opener {
    fn open(&self, bundle: &Path) -> io::Result<()>;
}

/// The platform `open` command. Its exit status is not interpreted beyond
/// "invocation issued", so the child is spawned and never waited on.
pub struct OpenCommand;

impl Opener for OpenCommand {
    fn open(&self, bundle: &Path) -> io::Result<()> {
        Command::new("open")
            .arg(bundle)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

/// Launch the configured application and return its PID.
///
/// Fails fast with `MissingBundle` before any launch attempt if the bundle
/// is not on disk.
pub fn launch(
    settings: &Settings,
    opener: &dyn Opener,
    table: &dyn ProcessTable,
    sleep: impl FnMut(Duration),
) -> Result<i32, Error> {
    let bundle = settings.bundle_path();
    if !bundle.exists() {
        return Err(Error::MissingBundle(bundle));
    }

    log::info!("Launching {}", bundle.display());
    opener.open(&bundle).map_err(|e| Error::Launch {
        path: bundle,
        source: e,
    })?;

    resolve_pid(
        &settings.app_name,
        settings.poll_attempts,
        settings.poll_interval,
        table,
        sleep,
    )
}

/// Poll the process table until a match for `name` appears or the attempt
/// budget runs out. A failed query counts as a miss for that attempt; the
/// sleep between attempts goes through `sleep` so tests run without delay.
pub fn resolve_pid(
    name: &str,
    attempts: u32,
    interval: Duration,
    table: &dyn ProcessTable,
    mut sleep: impl FnMut(Duration),
) -> Result<i32, Error> {
    for attempt in 1..=attempts {
        match table.query(name) {
            Ok(listing) => {
                if let Some(pid) = first_pid_match(&listing, name)? {
                    log::info!("Found PID for {}: {}", name, pid);
                    return Ok(pid);
                }
            }
            Err(e) => {
                log::debug!("Process table query failed on attempt {}: {}", attempt, e);
            }
        }
        if attempt < attempts {
            sleep(interval);
        }
    }

    Err(Error::PollExhausted {
        name: name.to_string(),
        attempts,
    })
}

/// First line containing `name` wins; its leading token is the PID.
/// A matching line that does not start with a decimal integer aborts the
/// whole resolution, the listing format is trusted and a violation means
/// something is badly wrong. Non-matching lines are never parsed.
fn first_pid_match(listing: &str, name: &str) -> Result<Option<i32>, Error> {
    for line in listing.lines() {
        if !line.contains(name) {
            continue;
        }
        let token = line.split_whitespace().next().unwrap_or("");
        let pid = token
            .parse::<i32>()
            .map_err(|_| Error::MalformedListing(line.to_string()))?;
        return Ok(Some(pid));
    }
    Ok(None)
}
