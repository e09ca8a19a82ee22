//! Real-time chat delivery.
//!
//! One persistent WebSocket per active chat view, coordinated with the REST
//! chat API for history: on every (re)connect the manager replays history
//! first, then switches to live push, with duplicate suppression across the
//! two paths.

pub mod dedup;
pub mod error;
pub mod event;
pub mod manager;
mod socket;

pub use error::{ChatError, Result};
pub use event::ChatEvent;
pub use manager::{ChatHandle, ChatManager};
