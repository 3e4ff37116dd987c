//! Remote vs. in-memory mode detection.

use std::fmt;

/// Which store the client talks to. Decided once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Delegate to the JSON backend over HTTP.
    Remote,
    /// Serve the in-memory dataset.
    Mock,
}

const LOOPBACK_MARKERS: [&str; 2] = ["localhost", "127.0.0.1"];

impl Mode {
    /// Detect the mode from the host the calling page is served from.
    ///
    /// Without a page host the caller runs next to the backend, so remote
    /// mode applies. A page served from a loopback host can reach the local
    /// backend too; any other host is a hosted preview.
    pub fn detect(page_host: Option<&str>) -> Self {
        match page_host {
            None => Mode::Remote,
            Some(host) if LOOPBACK_MARKERS.iter().any(|m| host.contains(m)) => Mode::Remote,
            Some(_) => Mode::Mock,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Remote => write!(f, "remote"),
            Mode::Mock => write!(f, "mock"),
        }
    }
}
