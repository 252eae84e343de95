//! The student's slot selection while filling in a submission.

use indexmap::IndexSet;

use crate::slot::{self, PreferenceSlot};

/// A student's in-progress availability selection.
///
/// Slots are stored in wire form, deduplicated, and kept in the order they
/// were first selected so rendering stays stable. Equality is set equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySelection {
    slots: IndexSet<String>,
}

impl AvailabilitySelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the slot if absent, removes it if present.
    ///
    /// Returns `true` when the slot is selected afterwards. Removal keeps the
    /// relative order of the remaining slots.
    pub fn toggle(&mut self, wire_slot: impl Into<String>) -> bool {
        let wire_slot = wire_slot.into();
        if self.slots.shift_remove(&wire_slot) {
            false
        } else {
            self.slots.insert(wire_slot);
            true
        }
    }

    /// Replaces the whole selection with display-form entries.
    ///
    /// The previous selection is always discarded, even when `display_slots` is empty.
    pub fn set_all<I, S>(&mut self, display_slots: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.slots.clear();
        self.slots.extend(
            display_slots
                .into_iter()
                .map(|s| slot::from_display_form(s.as_ref())),
        );
    }

    /// Selection made on the preference form.
    ///
    /// Half-day slots contain no hyphen, so they export exactly as `"Mon_AM"`.
    pub fn from_preference_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = PreferenceSlot>,
    {
        slots.into_iter().map(PreferenceSlot::as_str).collect()
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Display-form strings, one per selected slot, in selection order.
    #[must_use]
    pub fn export_display_form(&self) -> Vec<String> {
        self.slots.iter().map(|s| slot::to_display_form(s)).collect()
    }

    /// True when the wire-form slot is selected.
    #[must_use]
    pub fn contains(&self, wire_slot: &str) -> bool {
        self.slots.contains(wire_slot)
    }

    /// Number of selected slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Selected slots in wire form.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AvailabilitySelection {
    /// Collects wire-form slots.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn set_all_then_export_round_trips() {
        let mut selection = AvailabilitySelection::new();
        selection.set_all(["Monday 8am-10am"]);
        assert_eq!(selection.export_display_form(), vec!["Monday 8am-10am"]);
        assert!(selection.contains("Monday-8am-10am"));
    }

    #[test]
    fn set_all_replaces_rather_than_merges() {
        let mut selection = AvailabilitySelection::new();
        selection.toggle("Friday-4pm-6pm");
        selection.set_all(["Tuesday 10am-12pm", "Thursday 2pm-4pm"]);
        assert_eq!(
            selection.export_display_form(),
            vec!["Tuesday 10am-12pm", "Thursday 2pm-4pm"]
        );

        selection.set_all(Vec::<String>::new());
        assert!(selection.is_empty());
    }

    #[test]
    fn set_all_deduplicates() {
        let mut selection = AvailabilitySelection::new();
        selection.set_all(["Monday 8am-10am", "Monday 8am-10am"]);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut selection = AvailabilitySelection::new();
        assert!(selection.toggle("Monday-8am-10am"));
        assert!(!selection.toggle("Monday-8am-10am"));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_off_keeps_order_of_the_rest() {
        let mut selection: AvailabilitySelection =
            ["Monday-8am-10am", "Tuesday-8am-10am", "Wednesday-8am-10am"]
                .into_iter()
                .collect();
        selection.toggle("Tuesday-8am-10am");
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec!["Monday-8am-10am", "Wednesday-8am-10am"]
        );
    }

    #[test]
    fn clear_empties() {
        let mut selection: AvailabilitySelection = ["Monday-8am-10am"].into_iter().collect();
        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.export_display_form().is_empty());
    }

    #[test]
    fn preference_slots_export_unchanged() {
        let selection = AvailabilitySelection::from_preference_slots([
            PreferenceSlot::TuePm,
            PreferenceSlot::MonAm,
            PreferenceSlot::TuePm,
        ]);
        assert_eq!(selection.export_display_form(), vec!["Tue_PM", "Mon_AM"]);
        assert!(selection.iter().all(|s| !slot::is_calendar_slot(s)));
    }

    proptest! {
        /// Toggling the same slot twice restores the prior selection.
        #[test]
        fn prop_double_toggle_is_identity(
            initial in prop::collection::vec("[A-Z][a-z]{2,8}-[0-9]{1,2}(am|pm)", 0..8),
            slot in "[A-Z][a-z]{2,8}-[0-9]{1,2}(am|pm)",
        ) {
            let mut selection: AvailabilitySelection = initial.into_iter().collect();
            let before = selection.clone();
            selection.toggle(slot.clone());
            selection.toggle(slot);
            prop_assert_eq!(selection, before);
        }
    }
}
