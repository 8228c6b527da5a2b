//! Application layer - editing-session workflow over the criteria engine.
//!
//! Coordinates the snapshot adapter, the engine and the caller-owned state
//! for hosts that prefer not to thread the state through themselves.

mod session;

pub use session::EditingSession;
