//! Visual-novel side panel binders.
//!
//! Every binder takes an [`ElementRegistry`](crate::dom::ElementRegistry),
//! looks up the elements it owns by id, and leaves anything the page doesn't
//! render alone. Binders hold no state between calls.

pub mod affinity;
pub mod cast;
pub mod dynamics;
pub mod route;
pub mod scene;
pub mod snapshot;
pub mod ticks;

pub use affinity::{AffinityMap, hide_affinity_panel, update_affinity_panel};
pub use snapshot::StorySnapshot;
