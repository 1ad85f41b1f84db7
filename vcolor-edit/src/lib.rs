//! Vcolor Edit Crate
//!
//! Vertex color editing logic over an injected mesh representation.
//!
//! ## Modules
//!
//! - [`host`]: the narrow trait boundary to the host's mesh storage
//! - [`ops`]: the Get (pick) and Apply operations
//! - [`session`]: per-document UI state (current color, auto-pick flag)
//! - [`sync`]: the live-sync guard run on selection-change notifications
//! - [`handlers`]: named update-handler registry with idempotent
//!   subscribe/unsubscribe

pub mod error;
pub mod handlers;
pub mod host;
pub mod ops;
pub mod session;
pub mod sync;

pub use error::EditError;
pub use handlers::{AUTO_PICK_HANDLER, UpdateHandlers, register_auto_pick, unregister_auto_pick};
pub use host::CornerMesh;
pub use session::{ColorSession, EditorContext, EditorMode};
pub use sync::{COLOR_EPSILON, SyncOutcome, auto_pick};
