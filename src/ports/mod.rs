//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContentSnapshot` - Read access to the authoring form's current field values

mod content_snapshot;

pub use content_snapshot::ContentSnapshot;
