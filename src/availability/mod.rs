//! Turning raw centers into the 7-day availability grid.
//!
//! ```text
//! centers ──filter(rule)──→ eligible ──index by date──→ 7 fixed columns
//! ```
//!
//! The same projector serves every deployment flavour; they differ only in
//! the [`EligibilityRule`] and in the fetch date offset.

pub mod dates;
mod eligibility;
mod index;
mod projection;
mod text;

pub use eligibility::{AgeBracket, EligibilityRule};
pub use index::SessionIndex;
pub use projection::{eligible_centers, project, AvailabilityGrid, Cell, GridRow, Projection};
pub use text::render_text;
