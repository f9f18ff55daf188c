use super::process::ProcessSample;
use super::{ProcessSource, TerminateOutcome};

/// Scripted process table for controller and UI tests.
#[derive(Debug, Default)]
pub struct FakeSource {
    pub samples: Vec<ProcessSample>,
    /// Names that answer liveness queries and accept termination.
    pub alive: Vec<String>,
    pub terminate_calls: Vec<String>,
}

impl FakeSource {
    pub fn with_samples(samples: Vec<ProcessSample>) -> Self {
        let mut alive: Vec<String> = Vec::new();
        for sample in &samples {
            if !alive.contains(&sample.name) {
                alive.push(sample.name.clone());
            }
        }
        Self {
            samples,
            alive,
            terminate_calls: Vec::new(),
        }
    }
}

impl ProcessSource for FakeSource {
    fn sample(&mut self) -> Vec<ProcessSample> {
        self.samples.clone()
    }

    fn is_responsive(&mut self, name: &str) -> bool {
        self.alive.iter().any(|n| n == name)
    }

    fn terminate_by_name(&mut self, name: &str) -> TerminateOutcome {
        self.terminate_calls.push(name.to_string());
        if self.alive.iter().any(|n| n == name) {
            TerminateOutcome::Signaled(4242)
        } else {
            TerminateOutcome::NotFound
        }
    }
}
