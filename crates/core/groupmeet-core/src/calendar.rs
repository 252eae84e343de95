//! The weekday availability calendar.
//!
//! The grid is a pure function of an [`AvailabilitySelection`]: callers own the
//! selection, render [`CalendarGrid::rows`], and feed clicks back through
//! [`CalendarGrid::toggle`], which reports what changed as a [`SlotToggled`] event.

use crate::selection::AvailabilitySelection;
use crate::slot::{self, TIME_RANGES, WEEKDAYS};

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    /// Column day
    pub day: &'static str,
    /// Wire-form slot id of the cell
    pub slot: String,
    /// Whether the slot is in the selection
    pub selected: bool,
}

/// One time-range row of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRow {
    /// Row label
    pub time_range: &'static str,
    /// Cells, one per weekday
    pub cells: Vec<CalendarCell>,
}

/// Emitted when a cell is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotToggled {
    /// Wire-form slot id
    pub slot: String,
    /// State after the toggle
    pub selected: bool,
}

/// Renders and updates the weekday × time-range calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarGrid;

impl CalendarGrid {
    /// Column headers.
    #[must_use]
    pub const fn days() -> &'static [&'static str] {
        &WEEKDAYS
    }

    /// Rows of the grid with selection state filled in.
    #[must_use]
    pub fn rows(selection: &AvailabilitySelection) -> Vec<CalendarRow> {
        TIME_RANGES
            .iter()
            .map(|&time_range| CalendarRow {
                time_range,
                cells: WEEKDAYS
                    .iter()
                    .map(|&day| {
                        let slot = slot::to_wire_form(day, time_range);
                        let selected = selection.contains(&slot);
                        CalendarCell {
                            day,
                            slot,
                            selected,
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    /// Toggles the cell at `day`/`time_range`.
    pub fn toggle(
        selection: &mut AvailabilitySelection,
        day: &str,
        time_range: &str,
    ) -> SlotToggled {
        let slot = slot::to_wire_form(day, time_range);
        let selected = selection.toggle(slot.clone());
        tracing::trace!(%slot, selected, "calendar slot toggled");
        SlotToggled { slot, selected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_every_day_and_range() {
        let rows = CalendarGrid::rows(&AvailabilitySelection::new());
        assert_eq!(rows.len(), TIME_RANGES.len());
        assert!(rows.iter().all(|r| r.cells.len() == WEEKDAYS.len()));
        assert_eq!(rows[0].cells[0].slot, "Monday-8am-10am");
        assert_eq!(rows[5].cells[4].slot, "Friday-6pm-8pm");
        assert!(rows.iter().flat_map(|r| &r.cells).all(|c| !c.selected));
    }

    #[test]
    fn toggle_event_and_rendered_state_agree() {
        let mut selection = AvailabilitySelection::new();
        let event = CalendarGrid::toggle(&mut selection, "Wednesday", "12pm-2pm");
        assert_eq!(
            event,
            SlotToggled {
                slot: "Wednesday-12pm-2pm".into(),
                selected: true
            }
        );

        let rows = CalendarGrid::rows(&selection);
        let selected: Vec<_> = rows
            .iter()
            .flat_map(|r| &r.cells)
            .filter(|c| c.selected)
            .map(|c| c.slot.as_str())
            .collect();
        assert_eq!(selected, vec!["Wednesday-12pm-2pm"]);

        let event = CalendarGrid::toggle(&mut selection, "Wednesday", "12pm-2pm");
        assert!(!event.selected);
        assert!(selection.is_empty());
    }

    #[test]
    fn off_grid_selections_are_not_rendered() {
        let selection: AvailabilitySelection = ["Saturday-8am-10am"].into_iter().collect();
        let rows = CalendarGrid::rows(&selection);
        assert!(rows.iter().flat_map(|r| &r.cells).all(|c| !c.selected));
    }
}
