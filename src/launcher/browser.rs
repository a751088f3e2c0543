use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

/// Ask the desktop to open `url` in the default browser. Does not wait for it.
pub fn open_url(url: &str) -> io::Result<()> {
    spawn_reaped(opener_command(url))?;
    Ok(())
}

/// Spawn `cmd` with null stdio and reap it from a background thread.
fn spawn_reaped(mut cmd: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(thread::spawn(move || child.wait()))
}

fn opener_command(url: &str) -> Command {
    #[cfg(windows)]
    {
        // The empty argument is the window title `start` expects first
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    }
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }
    #[cfg(not(any(windows, target_os = "macos")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn opener_is_waited_on() {
        let handle = spawn_reaped(Command::new("true")).unwrap();
        let status = handle.join().unwrap().unwrap();
        assert!(status.success());
    }

    #[test]
    fn missing_opener_is_a_spawn_error() {
        let err = spawn_reaped(Command::new("pixelframe-no-such-opener")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
