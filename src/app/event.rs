use crate::quiz::LockToken;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One second of quiz time elapsed
    Tick,

    /// Feedback delay elapsed for a locked question
    AutoAdvance(LockToken),
}
