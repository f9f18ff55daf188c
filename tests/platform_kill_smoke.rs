#[cfg(unix)]
use std::fs;
#[cfg(unix)]
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use memdash::system::collector::Collector;
use memdash::system::kill::{KillResult, first_pid_by_name, kill_process};
use memdash::system::{ProcessSource, TerminateOutcome};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, Signal, System};

fn refresh_system(sys: &mut System) {
    sys.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::everything(),
    );
}

fn spawn_long_lived_child() -> Child {
    #[cfg(windows)]
    let mut cmd = {
        let mut c = Command::new("powershell");
        c.args([
            "-NoProfile",
            "-NonInteractive",
            "-Command",
            "Start-Sleep -Seconds 30",
        ]);
        c
    };

    #[cfg(not(windows))]
    let mut cmd = {
        let mut c = Command::new("sleep");
        c.arg("30");
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn child process")
}

fn wait_for_pid(sys: &mut System, pid: u32, timeout: Duration) -> bool {
    let sys_pid = Pid::from_u32(pid);
    let deadline = Instant::now() + timeout;
    loop {
        let pids = [sys_pid];
        sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&pids),
            true,
            ProcessRefreshKind::everything(),
        );
        if sys.process(sys_pid).is_some() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(50));
    }
}

#[test]
fn kill_nonexistent_pid_returns_not_found() {
    let mut sys = System::new();
    refresh_system(&mut sys);

    let result = kill_process(&sys, u32::MAX, Signal::Term);
    assert!(matches!(result, KillResult::NotFound(_)));
}

#[test]
fn kill_spawned_child_terminates() {
    let mut child = spawn_long_lived_child();
    let pid = child.id();

    let mut sys = System::new();
    if !wait_for_pid(&mut sys, pid, Duration::from_secs(3)) {
        let _ = child.kill();
        panic!("child process PID {pid} was not observed by sysinfo before kill attempt");
    }

    let signal = if cfg!(windows) {
        Signal::Kill
    } else {
        Signal::Term
    };
    let mut result = kill_process(&sys, pid, signal);
    if matches!(result, KillResult::NotFound(_) | KillResult::Failed(_, _)) {
        thread::sleep(Duration::from_millis(100));
        refresh_system(&mut sys);
        result = kill_process(&sys, pid, Signal::Kill);
    }

    match result {
        KillResult::Success(_) => {
            let deadline = Instant::now() + Duration::from_secs(5);
            loop {
                match child.try_wait() {
                    Ok(Some(_)) => break,
                    Ok(None) if Instant::now() < deadline => {
                        thread::sleep(Duration::from_millis(50));
                    }
                    Ok(None) => {
                        let _ = child.kill();
                        panic!("child process did not exit before timeout");
                    }
                    Err(err) => {
                        let _ = child.kill();
                        panic!("failed waiting for child exit: {err}");
                    }
                }
            }
        }
        KillResult::Failed(_, err) => {
            let _ = child.kill();
            panic!("kill_process reported failure: {err}");
        }
        KillResult::NotFound(_) => {
            let _ = child.kill();
            panic!("child process not found in sysinfo snapshot");
        }
    }
}

#[test]
fn first_pid_by_name_ignores_unknown_names() {
    let mut sys = System::new();
    refresh_system(&mut sys);

    assert_eq!(first_pid_by_name(&sys, "memdash-no-such-process-name"), None);
}

/// Copies `sleep` under a name no other process on the host uses, so that
/// signalling by name can only reach the spawned child.
#[cfg(unix)]
fn spawn_uniquely_named_sleeper(tag: &str) -> (Child, PathBuf) {
    // Linux reports at most 15 bytes of a process name.
    let name = format!("mdz{tag}{}", std::process::id());
    let path = std::env::temp_dir().join(&name);
    let sleep = ["/bin/sleep", "/usr/bin/sleep"]
        .into_iter()
        .map(Path::new)
        .find(|p| p.exists())
        .expect("no sleep binary found");
    fs::copy(sleep, &path).expect("failed to copy sleep binary");

    let mut attempts = 0;
    loop {
        let spawned = Command::new(&path)
            .arg("30")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => return (child, path),
            // ETXTBSY: a process forked by a parallel test still holds the
            // write handle from the copy.
            Err(err) if err.raw_os_error() == Some(26) && attempts < 20 => {
                attempts += 1;
                thread::sleep(Duration::from_millis(50));
            }
            Err(err) => {
                let _ = fs::remove_file(&path);
                panic!("failed to spawn {}: {err}", path.display());
            }
        }
    }
}

#[cfg(unix)]
fn observed_name(child: &mut Child, path: &Path) -> String {
    let pid = child.id();
    let mut sys = System::new();
    if !wait_for_pid(&mut sys, pid, Duration::from_secs(3)) {
        let _ = child.kill();
        let _ = fs::remove_file(path);
        panic!("child process PID {pid} was not observed by sysinfo");
    }
    sys.process(Pid::from_u32(pid))
        .map(|p| p.name().to_string_lossy().to_string())
        .expect("child vanished")
}

#[cfg(unix)]
#[test]
fn collector_terminates_by_name_and_reports_zombie_unresponsive() {
    let (mut child, path) = spawn_uniquely_named_sleeper("t");
    let pid = child.id();
    let name = observed_name(&mut child, &path);

    let mut collector = Collector::new();
    let sampled = collector.sample().iter().any(|s| s.name == name);
    let responsive_before = collector.is_responsive(&name);
    let outcome = collector.terminate_by_name(&name);

    // The child is not reaped until wait(), so it lingers as a zombie.
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut responsive_after = true;
    while Instant::now() < deadline {
        if !collector.is_responsive(&name) {
            responsive_after = false;
            break;
        }
        thread::sleep(Duration::from_millis(50));
    }
    let second = collector.terminate_by_name(&name);

    let _ = child.kill();
    let _ = child.wait();
    let _ = fs::remove_file(&path);

    assert!(sampled, "child `{name}` missing from sample");
    assert!(responsive_before, "child `{name}` reported unresponsive while running");
    assert_eq!(outcome, TerminateOutcome::Signaled(pid));
    assert!(!responsive_after, "zombie `{name}` still reported responsive");
    assert_eq!(second, TerminateOutcome::NotFound);
}

#[cfg(unix)]
#[test]
fn collector_sees_process_started_after_sample() {
    let mut collector = Collector::new();
    collector.sample();

    let (mut child, path) = spawn_uniquely_named_sleeper("r");
    let name = observed_name(&mut child, &path);

    let responsive = collector.is_responsive(&name);

    let _ = child.kill();
    let _ = child.wait();
    let _ = fs::remove_file(&path);

    assert!(responsive, "`{name}` started after the sample reported unresponsive");
}

#[test]
fn kill_with_sigkill_reports_success() {
    let mut child = spawn_long_lived_child();
    let pid = child.id();

    let mut sys = System::new();
    if !wait_for_pid(&mut sys, pid, Duration::from_secs(3)) {
        let _ = child.kill();
        panic!("child process PID {pid} was not observed by sysinfo before kill attempt");
    }

    let result = kill_process(&sys, pid, Signal::Kill);
    let _ = child.kill();
    let _ = child.wait();

    assert_eq!(result, KillResult::Success(pid));
}

#[test]
fn terminate_by_unknown_name_is_a_no_op() {
    let mut collector = Collector::new();
    assert_eq!(
        collector.terminate_by_name("memdash-no-such-process-name"),
        TerminateOutcome::NotFound
    );
}
