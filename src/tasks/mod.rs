//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Reaper: sweeps stale entries out of the response cache every interval

mod reaper;

pub(crate) use reaper::spawn_reaper;
