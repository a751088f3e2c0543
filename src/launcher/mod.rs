//! Start the game's dev server, wait for it to print its URL, open a browser tab,
//! and keep echoing the server output until it exits or Ctrl+C is pressed.

mod browser;
mod scan;

pub use browser::open_url;
pub use scan::{scan_line, strip_ansi};

use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no dev server command given")]
    EmptyCommand,

    #[error("{program} not found. {hint}")]
    RunnerNotFound { program: String, hint: &'static str },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to wait for dev server: {0}")]
    Wait(#[source] io::Error),

    #[error("dev server exited with {0}")]
    ChildFailed(ExitStatus),
}

/// Configuration for a dev server session
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Program and arguments
    pub command: Vec<String>,

    /// Directory to run the command in (None = current directory)
    pub working_dir: Option<PathBuf>,

    /// URL opened when the server never prints a `Local:` line
    pub default_url: String,

    pub open_browser: bool,

    /// Pause between spotting the URL and opening it
    pub settle: Duration,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            command: vec!["npm".to_string(), "run".to_string(), "dev".to_string()],
            working_dir: None,
            default_url: "http://localhost:5173".to_string(),
            open_browser: true,
            settle: Duration::from_secs(1),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// URL that was (or would have been) opened
    pub url: Option<String>,

    /// Session stopped by Ctrl+C rather than the server exiting
    pub interrupted: bool,
}

/// Run the dev server until it exits or the user presses Ctrl+C.
pub async fn run(config: &LaunchConfig) -> Result<LaunchOutcome, LaunchError> {
    run_until(config, async {
        // Without a signal handler there is nothing to wait for
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    })
    .await
}

/// Run the dev server until it exits or `interrupt` completes, whichever is first.
/// Completing `interrupt` kills the server and ends the session normally.
pub async fn run_until<F>(config: &LaunchConfig, interrupt: F) -> Result<LaunchOutcome, LaunchError>
where
    F: Future<Output = ()>,
{
    let (program, args) = config.command.split_first().ok_or(LaunchError::EmptyCommand)?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(ref dir) = config.working_dir {
        cmd.current_dir(dir);
    }

    let mut child = cmd.spawn().map_err(|e| spawn_error(program, e))?;

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    if let Some(stdout) = child.stdout.take() {
        forward_lines(stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        forward_lines(stderr, tx.clone());
    }
    drop(tx);

    tokio::pin!(interrupt);

    // Echo output until the server announces where it is listening
    let mut found = None;
    while found.is_none() {
        tokio::select! {
            line = rx.recv() => match line {
                Some(line) => {
                    println!("{}", line);
                    found = scan_line(&line, &config.default_url);
                }
                None => break,
            },
            _ = &mut interrupt => return shutdown(&mut child, None).await,
        }
    }
    let url = found.unwrap_or_else(|| config.default_url.clone());

    tokio::select! {
        _ = tokio::time::sleep(config.settle) => {}
        _ = &mut interrupt => return shutdown(&mut child, Some(url.clone())).await,
    }

    if config.open_browser {
        println!("\nOpening {} in your browser...", url);
        if let Err(e) = open_url(&url) {
            eprintln!("Warning: Failed to open browser: {}", e);
        }
    }

    println!("\nServer is running at {}. Press Ctrl+C to stop.\n", url);
    println!("{}", "=".repeat(50));

    loop {
        tokio::select! {
            line = rx.recv() => match line {
                Some(line) => println!("{}", line),
                None => break,
            },
            _ = &mut interrupt => return shutdown(&mut child, Some(url.clone())).await,
        }
    }

    let status = child.wait().await.map_err(LaunchError::Wait)?;
    if !status.success() {
        return Err(LaunchError::ChildFailed(status));
    }

    Ok(LaunchOutcome {
        url: Some(url),
        interrupted: false,
    })
}

async fn shutdown(child: &mut Child, url: Option<String>) -> Result<LaunchOutcome, LaunchError> {
    println!("\n\nShutting down server...");
    if let Err(e) = child.kill().await {
        eprintln!("Warning: Failed to stop dev server: {}", e);
    }
    println!("Done!");

    Ok(LaunchOutcome {
        url,
        interrupted: true,
    })
}

/// Push each line of `reader` into `tx` from a background task.
fn forward_lines<R>(reader: R, tx: mpsc::UnboundedSender<String>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf)
                        .trim_end_matches(|c: char| c == '\n' || c == '\r')
                        .to_string();
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

fn spawn_error(program: &str, source: io::Error) -> LaunchError {
    if source.kind() != io::ErrorKind::NotFound {
        return LaunchError::Spawn {
            program: program.to_string(),
            source,
        };
    }

    let hint = match program {
        "npm" | "npx" | "node" | "pnpm" | "yarn" => {
            "Make sure Node.js is installed.\nDownload from: https://nodejs.org/"
        }
        _ => "Make sure it is installed and on your PATH.",
    };
    LaunchError::RunnerNotFound {
        program: program.to_string(),
        hint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_npm_dev_on_vite_port() {
        let config = LaunchConfig::default();
        assert_eq!(config.command, ["npm", "run", "dev"]);
        assert_eq!(config.default_url, "http://localhost:5173");
        assert!(config.open_browser);
    }

    #[test]
    fn missing_npm_mentions_node() {
        let err = spawn_error("npm", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(
            err.to_string(),
            "npm not found. Make sure Node.js is installed.\nDownload from: https://nodejs.org/"
        );
    }

    #[test]
    fn other_spawn_failures_keep_source() {
        let err = spawn_error("npm", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, LaunchError::Spawn { .. }));
    }

    #[tokio::test]
    async fn empty_command_is_rejected() {
        let config = LaunchConfig {
            command: Vec::new(),
            ..LaunchConfig::default()
        };
        assert!(matches!(run(&config).await, Err(LaunchError::EmptyCommand)));
    }
}
