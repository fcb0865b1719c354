//! Dashboard state object.
//!
//! [`Dashboard`] owns the loaded data, the draft filter and the debounced
//! update loop. The only way to change the current [`Cycle`] is to fire
//! the latest debounce ticket, so at most one recomputation per burst of
//! filter changes ever lands.

use crate::aggregate::{calculate_statistics, Snapshot};
use crate::debounce::{Debouncer, Ticket};
use crate::filter::{FilterController, FilterSelection};
use samu_risk::{HazardEvent, Municipality, ProbabilityCodes, TerritoryRecord};
use std::rc::Rc;

/// One completed recomputation: the applied selection, the territories it
/// matched and the snapshot computed from them.
///
/// Cycles are shared behind `Rc` so deferred render callbacks can hold on
/// to the exact pair they were scheduled for.
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    /// Increases by one for each committed cycle.
    pub generation: u64,
    pub selection: FilterSelection,
    pub territories: Vec<TerritoryRecord>,
    pub snapshot: Snapshot,
}

/// Result of firing a debounce ticket.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// A new cycle was committed.
    Updated(Rc<Cycle>),
    /// The selection matched nothing; the previous cycle is kept.
    Empty,
    /// A newer ticket exists, or the window has not elapsed yet.
    Superseded,
}

#[derive(Debug)]
pub struct Dashboard {
    territories: Vec<TerritoryRecord>,
    municipalities: Vec<Municipality>,
    events: Vec<HazardEvent>,
    codes: ProbabilityCodes,
    filter: FilterController,
    updates: Debouncer<FilterSelection>,
    current: Option<Rc<Cycle>>,
    generation: u64,
}

impl Dashboard {
    /// Set up the dashboard for one page load.
    ///
    /// Returns `None` when there are no territories to analyze. Call
    /// [`apply_filter`](Self::apply_filter) afterwards to schedule the
    /// first update.
    pub fn initialize(
        territories: Vec<TerritoryRecord>,
        municipalities: Vec<Municipality>,
        events: Vec<HazardEvent>,
        codes: ProbabilityCodes,
    ) -> Option<Self> {
        if territories.is_empty() {
            log::warn!("No territories to analyze, statistics not initialized");
            return None;
        }
        log::info!(
            "Initializing statistics: {} territories, {} municipalities, {} events, {} probability codes",
            territories.len(),
            municipalities.len(),
            events.len(),
            codes.len()
        );
        let filter = FilterController::new(&territories);
        Some(Self {
            territories,
            municipalities,
            events,
            codes,
            filter,
            updates: Debouncer::default(),
            current: None,
            generation: 0,
        })
    }

    /// Use a different quiescence window.
    pub fn with_window(mut self, window_ms: u64) -> Self {
        self.updates = Debouncer::new(window_ms);
        self
    }

    pub fn select_district(&mut self, district: Option<String>) {
        self.filter.select_district(&self.territories, district);
    }

    pub fn select_municipality(&mut self, municipality: Option<String>) {
        self.filter.select_municipality(municipality);
    }

    /// Schedule a recomputation with the current draft selection.
    pub fn apply_filter(&mut self, now_ms: u64) -> Ticket {
        let selection = self.filter.selection().clone();
        log::debug!("Filter applied: {}", selection.label());
        self.updates.schedule(now_ms, selection)
    }

    /// Run the recomputation for `ticket` if it is still the latest one and
    /// its window has elapsed.
    pub fn fire(&mut self, ticket: Ticket, now_ms: u64) -> UpdateOutcome {
        match self.updates.fire(ticket, now_ms) {
            Some(selection) => self.recompute(selection),
            None => UpdateOutcome::Superseded,
        }
    }

    /// Recompute immediately with the draft selection, bypassing the
    /// debounce window.
    pub fn update_now(&mut self) -> UpdateOutcome {
        let selection = self.filter.selection().clone();
        self.recompute(selection)
    }

    fn recompute(&mut self, selection: FilterSelection) -> UpdateOutcome {
        let territories = selection.apply(&self.territories);
        if territories.is_empty() {
            log::warn!(
                "No territories left after filtering ({}), keeping previous statistics",
                selection.label()
            );
            return UpdateOutcome::Empty;
        }

        let snapshot = calculate_statistics(&territories, &self.codes);
        self.generation += 1;
        let cycle = Rc::new(Cycle {
            generation: self.generation,
            selection,
            territories,
            snapshot,
        });
        log::info!(
            "Statistics updated (cycle {}): {} territories, {}",
            cycle.generation,
            cycle.snapshot.total,
            cycle.selection.label()
        );
        self.current = Some(Rc::clone(&cycle));
        UpdateOutcome::Updated(cycle)
    }

    pub fn current(&self) -> Option<Rc<Cycle>> {
        self.current.clone()
    }

    pub fn filter(&self) -> &FilterController {
        &self.filter
    }

    pub fn codes(&self) -> &ProbabilityCodes {
        &self.codes
    }

    pub fn territories(&self) -> &[TerritoryRecord] {
        &self.territories
    }

    pub fn municipalities(&self) -> &[Municipality] {
        &self.municipalities
    }

    pub fn events(&self) -> &[HazardEvent] {
        &self.events
    }

    pub fn is_update_pending(&self) -> bool {
        self.updates.is_pending()
    }

    /// Deadline of `ticket` if it is still the pending one.
    pub fn deadline(&self, ticket: Ticket) -> Option<u64> {
        if self.updates.is_current(ticket) {
            self.updates.due_at()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{codes, region};
    use crate::QUIESCENCE_MS;

    fn dashboard() -> Dashboard {
        Dashboard::initialize(region(), Vec::new(), Vec::new(), codes()).unwrap()
    }

    fn updated(outcome: UpdateOutcome) -> Rc<Cycle> {
        match outcome {
            UpdateOutcome::Updated(cycle) => cycle,
            other => panic!("expected an update, got {other:?}"),
        }
    }

    #[test]
    fn empty_territories_is_a_no_op() {
        assert!(Dashboard::initialize(Vec::new(), Vec::new(), Vec::new(), codes()).is_none());
    }

    #[test]
    fn first_update_covers_entire_region() {
        let mut d = dashboard();
        assert!(d.current().is_none());
        let t = d.apply_filter(0);
        let cycle = updated(d.fire(t, QUIESCENCE_MS));
        assert_eq!(cycle.generation, 1);
        assert_eq!(cycle.snapshot.total, 6);
        assert_eq!(cycle.selection.label(), "Entire region");
    }

    #[test]
    fn burst_of_applies_recomputes_once_with_last_state() {
        let mut d = dashboard();

        d.select_district(Some("Žilina".into()));
        let t1 = d.apply_filter(0);
        d.select_district(Some("Čadca".into()));
        let t2 = d.apply_filter(100);
        d.select_municipality(Some("Turzovka".into()));
        let t3 = d.apply_filter(200);

        let mut updates = Vec::new();
        for (ticket, now) in [(t1, 300), (t2, 400), (t3, 500)] {
            if let UpdateOutcome::Updated(cycle) = d.fire(ticket, now) {
                updates.push(cycle);
            }
        }
        assert_eq!(updates.len(), 1);
        assert_eq!(d.deadline(t3), None);
        let cycle = &updates[0];
        assert_eq!(cycle.generation, 1);
        assert_eq!(cycle.selection.label(), "Municipality: Turzovka");
        assert_eq!(cycle.snapshot.total, 2);
        assert!(!d.is_update_pending());
    }

    #[test]
    fn empty_filter_result_keeps_previous_cycle() {
        let mut d = dashboard();
        let first = updated(d.update_now());

        d.select_district(Some("Žilina".into()));
        d.select_municipality(Some("Krásno".into()));
        let t = d.apply_filter(1_000);
        assert_eq!(d.fire(t, 1_300), UpdateOutcome::Empty);

        let current = d.current().unwrap();
        assert!(Rc::ptr_eq(&current, &first));
    }

    #[test]
    fn stale_cycle_stays_valid_after_newer_update() {
        let mut d = dashboard();
        let old = updated(d.update_now());
        d.select_district(Some("Čadca".into()));
        let new = updated(d.update_now());

        assert!(new.generation > old.generation);
        // The old cycle still describes the whole region.
        assert_eq!(old.snapshot.total, 6);
        assert_eq!(old.territories.len(), 6);
        assert_eq!(new.snapshot.total, 3);
    }

    #[test]
    fn filter_options_follow_district() {
        let mut d = dashboard();
        d.select_district(Some("Čadca".into()));
        assert_eq!(d.filter().municipality_options(), ["Krásno", "Turzovka"]);
        d.select_district(None);
        assert_eq!(d.filter().municipality_options().len(), 4);
    }
}
