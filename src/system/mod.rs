pub mod collector;
#[cfg(test)]
pub(crate) mod fake;
pub mod kill;
pub mod process;
pub mod snapshot;

use process::ProcessSample;

/// What happened when a process group was asked to terminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminateOutcome {
    /// A terminate request was delivered to this PID.
    Signaled(u32),
    /// No live process carries the name (or it exited before the signal).
    NotFound,
    /// A matching process exists but refused the signal.
    Failed(u32, String),
}

/// Everything the dashboard needs from the operating system.
///
/// Implementations swallow the transient conditions of a live process table
/// (a process exiting mid-query, zombies, permission errors) instead of
/// reporting them.
pub trait ProcessSource {
    /// One entry per live process visible right now.
    fn sample(&mut self) -> Vec<ProcessSample>;

    /// Whether at least one process named `name` exists and answers a liveness query.
    fn is_responsive(&mut self, name: &str) -> bool;

    /// Asks the first process named `name` to terminate. Only one process is signaled.
    fn terminate_by_name(&mut self, name: &str) -> TerminateOutcome;
}
