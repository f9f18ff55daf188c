use std::ffi::OsStr;

use sysinfo::{Pid, ProcessStatus, Signal, System};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillResult {
    Success(u32),
    Failed(u32, String),
    NotFound(u32),
}

/// Sends `signal` to `pid`, falling back to the platform's plain kill where
/// the signal is not supported.
pub fn kill_process(sys: &System, pid: u32, signal: Signal) -> KillResult {
    let Some(process) = sys.process(Pid::from_u32(pid)) else {
        return KillResult::NotFound(pid);
    };

    match process.kill_with(signal) {
        Some(true) => KillResult::Success(pid),
        Some(false) => {
            KillResult::Failed(pid, format!("Failed to send {signal:?} to PID {pid}"))
        }
        None if process.kill() => KillResult::Success(pid),
        None => KillResult::Failed(
            pid,
            format!("Failed to kill PID {pid} (permission denied?)"),
        ),
    }
}

/// Lowest PID among non-zombie processes named exactly `name`.
pub fn first_pid_by_name(sys: &System, name: &str) -> Option<u32> {
    sys.processes_by_exact_name(OsStr::new(name))
        .filter(|p| p.thread_kind().is_none() && p.status() != ProcessStatus::Zombie)
        .map(|p| p.pid().as_u32())
        .min()
}
