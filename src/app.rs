use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::Config;
use crate::highlight::HighlightTracker;
use crate::system::process::aggregate_by_name;
use crate::system::snapshot::RankedSnapshot;
use crate::system::{ProcessSource, TerminateOutcome};
use crate::ui::theme::Theme;

pub const NO_SUCH_INDEX_MESSAGE: &str = "No process with that index number found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

/// Everything the renderer needs for one dashboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub index: usize,
    pub name: String,
    pub memory_mb: f64,
    pub highlighted: bool,
    pub responsive: bool,
}

pub struct App<S: ProcessSource> {
    pub state: RunState,
    pub source: S,
    pub snapshot: RankedSnapshot,
    pub highlights: HighlightTracker,
    /// Shown on the bottom line until the next cycle starts.
    pub inline_message: Option<String>,
    pub theme: Theme,
    refresh_interval: Duration,
    highlight_duration: Duration,
}

impl<S: ProcessSource> App<S> {
    pub fn new(source: S, config: &Config) -> Self {
        App {
            state: RunState::Running,
            source,
            snapshot: RankedSnapshot::default(),
            highlights: HighlightTracker::new(),
            inline_message: None,
            theme: Theme::from_config(&config.colors),
            refresh_interval: config.general.refresh_interval(),
            highlight_duration: Duration::from_secs(config.general.highlight_secs),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Starts a cycle: resample, rerank, and forget last cycle's message.
    pub fn refresh_data(&mut self) {
        let samples = self.source.sample();
        self.snapshot = aggregate_by_name(&samples);
        self.inline_message = None;
        self.highlights.prune(Instant::now());
    }

    /// The first `limit` rows, with responsiveness queried now.
    pub fn visible_rows(&mut self, limit: usize, now: Instant) -> Vec<RowView> {
        let Self {
            snapshot,
            source,
            highlights,
            ..
        } = self;

        snapshot
            .rows()
            .take(limit)
            .map(|(index, aggregate)| RowView {
                index,
                name: aggregate.name.clone(),
                memory_mb: aggregate.total_memory_mb,
                highlighted: highlights.is_armed(index, now),
                responsive: source.is_responsive(&aggregate.name),
            })
            .collect()
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Raw mode swallows SIGINT, so Ctrl+C is wired to quit as well.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Char('0') => Action::Quit,
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(|d| Action::Terminate(d as usize))
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                tracing::info!("quit requested");
                self.state = RunState::Terminated;
            }
            Action::Terminate(row) => self.terminate_row(row),
            Action::None => {}
        }
    }

    /// Resolves `row` against this cycle's snapshot and terminates that group.
    fn terminate_row(&mut self, row: usize) {
        let Some(name) = self.snapshot.row(row).map(|a| a.name.clone()) else {
            tracing::debug!(row, rows = self.snapshot.len(), "selection out of range");
            self.inline_message = Some(NO_SUCH_INDEX_MESSAGE.to_string());
            return;
        };

        let _span = tracing::info_span!("app.terminate", row, name = %name).entered();
        match self.source.terminate_by_name(&name) {
            TerminateOutcome::Signaled(pid) => {
                tracing::info!(pid, "terminate request sent");
                self.highlights.arm(row, self.highlight_duration);
            }
            TerminateOutcome::NotFound => {
                tracing::debug!("no live process to terminate");
            }
            TerminateOutcome::Failed(pid, err) => {
                tracing::warn!(pid, error = %err, "terminate request refused");
            }
        }
    }
}
