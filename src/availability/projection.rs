use chrono::NaiveDate;

use crate::api::Center;
use crate::availability::dates::{self, WINDOW_DAYS};
use crate::availability::eligibility::EligibilityRule;
use crate::availability::index::SessionIndex;

/// One grid cell: a session on that date, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Absent,
    Slots {
        capacity: u32,
        min_age_limit: u32,
        vaccine: String,
    },
}

impl Cell {
    /// True when the session still has free slots.
    pub fn is_open(&self) -> bool {
        matches!(self, Cell::Slots { capacity, .. } if *capacity > 0)
    }

    pub fn capacity(&self) -> Option<u32> {
        match self {
            Cell::Slots { capacity, .. } => Some(*capacity),
            Cell::Absent => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub center_id: u64,
    pub block_name: String,
    pub name: String,
    pub pincode: u32,
    pub cells: [Cell; WINDOW_DAYS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityGrid {
    pub dates: [NaiveDate; WINDOW_DAYS],
    pub rows: Vec<GridRow>,
}

/// Render-ready view of fetched centers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// No center has a session matching the rule.
    NoAvailability,
    Grid(AvailabilityGrid),
}

impl Projection {
    pub fn grid(&self) -> Option<&AvailabilityGrid> {
        match self {
            Projection::Grid(grid) => Some(grid),
            Projection::NoAvailability => None,
        }
    }
}

/// Centers with at least one session the rule admits, in upstream order.
pub fn eligible_centers<'a>(
    centers: &'a [Center],
    rule: &'a EligibilityRule,
) -> impl Iterator<Item = &'a Center> + 'a {
    centers
        .iter()
        .filter(move |center| center.sessions.iter().any(|session| rule.admits(session)))
}

/// Filter `centers` by `rule` and lay them out over the week starting at
/// `today`.
///
/// Cells show every session on that date, not only admitted ones: the rule
/// decides which centers are listed, the grid shows what they offer.
pub fn project(centers: &[Center], rule: &EligibilityRule, today: NaiveDate) -> Projection {
    let window = dates::window(today);
    let keys: [String; WINDOW_DAYS] = window.map(dates::session_key);

    let rows: Vec<GridRow> = eligible_centers(centers, rule)
        .map(|center| {
            let index = SessionIndex::build(&center.sessions);
            let cells = std::array::from_fn(|i| match index.get(&keys[i]) {
                Some(session) => Cell::Slots {
                    capacity: session.available_capacity,
                    min_age_limit: session.min_age_limit,
                    vaccine: session.vaccine.clone(),
                },
                None => Cell::Absent,
            });
            GridRow {
                center_id: center.center_id,
                block_name: center.block_name.clone(),
                name: center.name.clone(),
                pincode: center.pincode,
                cells,
            }
        })
        .collect();

    if rows.is_empty() {
        return Projection::NoAvailability;
    }

    Projection::Grid(AvailabilityGrid {
        dates: window,
        rows,
    })
}
