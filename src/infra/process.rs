//! Deadline-bound child process execution
//!
//! Spawns child processes with fully captured output and a hard wall-clock
//! deadline. On Unix every child gets its own process group, and deadline
//! expiry kills the whole group so toolchain-spawned descendants cannot
//! outlive the deadline.

use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Captured result of one deadline-bound child process run
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Terminating signal, if the process was signalled (Unix only)
    pub signal: Option<i32>,
    /// Whether the deadline elapsed before the process finished
    pub timed_out: bool,
    /// Captured standard output, fully buffered
    pub stdout: String,
    /// Captured standard error, fully buffered
    pub stderr: String,
    /// Wall-clock time the process ran for
    pub elapsed: Duration,
}

impl CommandOutput {
    /// Whether the process exited cleanly with a zero status
    #[must_use]
    pub fn success(&self) -> bool {
        !self.timed_out && self.code == Some(0)
    }
}

/// Run a program to completion, bounded by a wall-clock deadline
///
/// Standard output and standard error are captured independently and in
/// full; no truncation, no streaming. If the deadline elapses first, the
/// child (and on Unix its whole process group) is forcibly terminated and
/// whatever output was produced so far is returned with `timed_out` set.
pub async fn run_with_deadline(
    program: &Path,
    args: &[&str],
    cwd: &Path,
    deadline: Duration,
) -> std::io::Result<CommandOutput> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    #[cfg(unix)]
    cmd.process_group(0);

    let start = Instant::now();
    let mut child = cmd.spawn()?;
    let pid = child.id();

    let mut stdout_pipe = child.stdout.take().expect("stdout was piped");
    let mut stderr_pipe = child.stderr.take().expect("stderr was piped");

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        let _ = stdout_pipe.read_to_end(&mut buf).await;
        buf
    });
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        let _ = stderr_pipe.read_to_end(&mut buf).await;
        buf
    });

    let (status, timed_out) = match tokio::time::timeout(deadline, child.wait()).await {
        Ok(status) => (Some(status?), false),
        Err(_) => {
            tracing::debug!(?pid, "deadline elapsed, killing process group");
            kill_process_group(pid);
            let _ = child.kill().await;
            // Reap so the exit status is collected and no zombie remains
            let status = child.wait().await.ok();
            (status, true)
        }
    };
    let elapsed = start.elapsed();

    // The reader tasks finish once every writer to the pipes is dead
    let stdout = stdout_task.await.unwrap_or_default();
    let stderr = stderr_task.await.unwrap_or_default();

    let code = status.and_then(|s| s.code());
    let signal = status.and_then(exit_signal);

    Ok(CommandOutput {
        code,
        signal,
        timed_out,
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
        elapsed,
    })
}

/// Send SIGKILL to the child's process group so descendants die with it
#[cfg(unix)]
fn kill_process_group(pid: Option<u32>) {
    if let Some(pid) = pid {
        // The child was spawned with process_group(0), so its pgid is its
        // own pid; a negative pid addresses the whole group.
        unsafe {
            libc::kill(-(pid as i32), libc::SIGKILL);
        }
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pid: Option<u32>) {
    // kill_on_drop and child.kill() cover the direct child on Windows
}

#[cfg(unix)]
fn exit_signal(status: std::process::ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: std::process::ExitStatus) -> Option<i32> {
    None
}
