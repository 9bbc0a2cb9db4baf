use std::io;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

/// Acknowledgements shown on the about page.
pub const ABOUT_LINKS: &[Link] = &[
    Link {
        label: "Rust",
        url: "https://www.rust-lang.org/",
    },
    Link {
        label: "serde",
        url: "https://serde.rs/",
    },
    Link {
        label: "tracing",
        url: "https://docs.rs/tracing",
    },
];

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("invalid URL: {0}")]
    Invalid(#[from] url::ParseError),

    #[error("refusing to open {0} URL")]
    Scheme(String),

    #[error("no browser launcher on this platform")]
    Unsupported,

    #[error("failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct MoreInfoPage {
    links: &'static [Link],
}

impl MoreInfoPage {
    pub fn new() -> Self {
        Self { links: ABOUT_LINKS }
    }

    pub fn links(&self) -> &'static [Link] {
        self.links
    }

    /// Opens `url` in the default browser. The launcher is reaped in the background.
    pub fn open_link(&self, url: &str) -> Result<(), LinkError> {
        let result = Self::launch(url);
        if let Err(err) = &result {
            warn!(url, error = %err, "unable to open URL");
        }
        result
    }

    fn launch(raw: &str) -> Result<(), LinkError> {
        let url = Url::parse(raw)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LinkError::Scheme(url.scheme().to_string()));
        }
        let mut command = browser_command(&url).ok_or(LinkError::Unsupported)?;
        spawn_reaped(&mut command)?;
        debug!(%url, "opened link");
        Ok(())
    }
}

/// Starts `command` and waits for it on a background thread so the finished
/// launcher does not linger as a zombie.
pub(super) fn spawn_reaped(
    command: &mut Command,
) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command.spawn()?;
    Ok(thread::spawn(move || {
        let status = child.wait();
        if let Err(err) = &status {
            debug!(error = %err, "failed to reap browser launcher");
        }
        status
    }))
}

impl Default for MoreInfoPage {
    fn default() -> Self {
        Self::new()
    }
}

/// The platform command that opens `url` in the default browser.
pub fn browser_command(url: &Url) -> Option<Command> {
    let mut command = if cfg!(target_os = "windows") {
        let mut command = Command::new("rundll32");
        command.arg("url.dll,FileProtocolHandler");
        command
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "linux") {
        Command::new("xdg-open")
    } else {
        return None;
    };
    command.arg(url.as_str());
    Some(command)
}
