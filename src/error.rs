use std::io;
use std::path::PathBuf;

/// Fatal conditions. Everything here terminates the run; transient poll
/// misses never become an `Error`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot determine home directory")]
    NoHomeDir,

    #[error("failed to {op} {}: {source}", .path.display())]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("could not find application bundle at {}", .0.display())]
    MissingBundle(PathBuf),

    #[error("failed to invoke opener for {}: {source}", .path.display())]
    Launch { path: PathBuf, source: io::Error },

    #[error("malformed process listing line: {0:?}")]
    MalformedListing(String),

    #[error("no PID found for {name} after {attempts} launch attempts")]
    PollExhausted { name: String, attempts: u32 },
}

impl Error {
    /// Poll exhaustion gets its own exit code so callers can tell
    /// "app never showed up" apart from every other failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::PollExhausted { .. } => 2,
            _ => 1,
        }
    }

    pub fn fs(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Filesystem {
            op,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustion_exit_code_is_distinct() {
        let exhausted = Error::PollExhausted {
            name: "Safari".into(),
            attempts: 20,
        };
        let missing = Error::MissingBundle(PathBuf::from("/tmp/x.app"));
        assert_eq!(exhausted.exit_code(), 2);
        assert_eq!(missing.exit_code(), 1);
    }
}
