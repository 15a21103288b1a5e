use crate::quiz::LockToken;
use std::time::Duration;

/// Side effects requested by the handler, carried out by the main loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    ScheduleAdvance { token: LockToken, delay: Duration },
    Quit,
}
