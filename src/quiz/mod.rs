//! Quiz domain: questions, the question bank, and the session engine.
//!
//! The engine is fully synchronous. Timers live in the display layer, which
//! feeds [`engine::QuizEngine::tick`] once per second and hands lock tokens
//! back through [`engine::QuizEngine::advance_if_current`].

pub mod bank;
pub mod engine;
pub mod error;
pub mod question;
pub mod verdict;

pub use engine::{LockToken, Outcome, QuizEngine};
