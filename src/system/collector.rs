use std::ffi::OsStr;

use sysinfo::{Pid, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, Signal, System};

use super::kill::{KillResult, first_pid_by_name, kill_process};
use super::process::ProcessSample;
use super::{ProcessSource, TerminateOutcome};

/// `ProcessSource` backed by `sysinfo`, which carries the per-platform
/// process table differences.
pub struct Collector {
    sys: System,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        Collector { sys }
    }

    pub fn system(&self) -> &System {
        &self.sys
    }

    /// Re-reads the given PIDs, dropping any that have exited.
    fn refresh_pids(&mut self, pids: &[Pid]) {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(pids),
            true,
            ProcessRefreshKind::nothing(),
        );
    }

    fn is_alive(&self, pid: Pid) -> bool {
        self.sys
            .process(pid)
            .is_some_and(|p| p.status() != ProcessStatus::Zombie)
    }
}

impl ProcessSource for Collector {
    fn sample(&mut self) -> Vec<ProcessSample> {
        let _span = tracing::debug_span!("collector.sample").entered();

        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        let mut live: Vec<(Pid, ProcessSample)> = self
            .sys
            .processes()
            .iter()
            // Linux lists threads next to their process; they share its RSS.
            .filter(|(_, p)| p.thread_kind().is_none())
            .map(|(pid, p)| {
                let name = p.name().to_string_lossy().to_string();
                (*pid, ProcessSample::new(name, p.memory()))
            })
            .collect();

        // The process map is unordered; PID order keeps equal totals from
        // swapping rows between cycles.
        live.sort_unstable_by_key(|(pid, _)| *pid);

        tracing::debug!(processes = live.len(), "sampled process table");
        live.into_iter().map(|(_, sample)| sample).collect()
    }

    fn is_responsive(&mut self, name: &str) -> bool {
        let pids: Vec<Pid> = self
            .sys
            .processes_by_exact_name(OsStr::new(name))
            .map(|p| p.pid())
            .collect();
        if !pids.is_empty() {
            self.refresh_pids(&pids);
            if pids.iter().any(|&pid| self.is_alive(pid)) {
                return true;
            }
        }

        // Every PID from the sample is gone; the name may have been restarted
        // under a new PID since then.
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );
        self.sys
            .processes_by_exact_name(OsStr::new(name))
            .any(|p| p.thread_kind().is_none() && p.status() != ProcessStatus::Zombie)
    }

    fn terminate_by_name(&mut self, name: &str) -> TerminateOutcome {
        let Some(pid) = first_pid_by_name(&self.sys, name) else {
            return TerminateOutcome::NotFound;
        };

        self.refresh_pids(&[Pid::from_u32(pid)]);
        if !self.is_alive(Pid::from_u32(pid)) {
            return TerminateOutcome::NotFound;
        }

        match kill_process(&self.sys, pid, Signal::Term) {
            KillResult::Success(pid) => TerminateOutcome::Signaled(pid),
            KillResult::Failed(pid, err) => TerminateOutcome::Failed(pid, err),
            KillResult::NotFound(_) => TerminateOutcome::NotFound,
        }
    }
}
