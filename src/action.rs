#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Terminate the process group on this 1-based row.
    Terminate(usize),
    None,
}
