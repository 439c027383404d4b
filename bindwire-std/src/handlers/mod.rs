//! The two event-execution strategies.
//!
//! Both visit actions in fixed registration order. They differ in what
//! happens between steps:
//!
//! - [`ParallelHandler`] (the default) issues every call without waiting
//!   for completion and returns immediately.
//! - [`SequentialHandler`] awaits each action's settlement before starting
//!   the next, containing per-step failures.

mod parallel;
mod sequential;

pub use parallel::ParallelHandler;
pub use sequential::SequentialHandler;
