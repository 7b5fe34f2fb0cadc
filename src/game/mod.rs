//! Game state machine and its controller.
//!
//! ## Key Types
//!
//! - `GameSession`: One play-through; consumes taps, yields outcomes
//! - `MemoryGame`: Owns the active session and talks to the presenter
//! - `TapOutcome` / `ResolveOutcome`: What a transition did
//! - `Notification`: Presentation intents queued by the controller
//!
//! ## Mismatch Timing
//!
//! A mismatch locks the board. The presenter shows both faces for as long
//! as it likes, then calls `resolve_mismatch_for(session)`. Sessions
//! replaced in the meantime turn that callback into a no-op.

pub mod controller;
pub mod notification;
pub mod outcome;
pub mod session;

pub use controller::{MemoryGame, NotificationQueue};
pub use notification::{Notification, Sound};
pub use outcome::{GamePhase, IgnoreReason, ResolveOutcome, TapOutcome};
pub use session::GameSession;
