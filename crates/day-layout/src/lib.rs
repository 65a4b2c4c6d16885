//! # day-layout
//!
//! Deterministic single-day calendar layout.
//!
//! Given the appointments of one day as `[start, end)` minute ranges,
//! day-layout computes a column, a pixel width, and a pixel left offset for
//! every event, so that events happening at the same time sit side by side
//! and never overlap, while events with no concurrent neighbour use the
//! full available width.
//!
//! ## Modules
//!
//! - [`event`] — Event value type, identity, and the half-open overlap rule
//! - [`cluster`] — Partition events into connected collision clusters
//! - [`column`] — Greedy lowest-free-column packing within each cluster
//! - [`expand`] — Widen events rightward into columns no overlapping event holds
//! - [`emit`] — Column placement → pixel `left`/`width`/`top`
//! - [`layout`](mod@layout) — Validation and the full pipeline
//! - [`input`] — JSON ingestion of event feeds
//! - [`time_axis`] — Time-of-day sidebar ticks
//! - [`error`] — Error types

pub mod cluster;
pub mod column;
pub mod emit;
pub mod error;
pub mod event;
pub mod expand;
pub mod input;
pub mod layout;
pub mod time_axis;

pub use emit::OutputEvent;
pub use error::LayoutError;
pub use event::{Event, EventId};
pub use input::{events_from_json, events_from_str};
pub use layout::{layout, layout_with_details, LayoutDetails, Placement};
pub use time_axis::{generate_ticks, AxisOptions, Tick};
