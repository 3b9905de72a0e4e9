//! States list with a destination count per state.

use std::collections::HashMap;

use crate::db::{Catalog, DataSource};
use crate::models::State;

use super::{Loadable, PageSlot};

#[derive(Debug, Clone, PartialEq)]
pub struct StateEntry {
    pub state: State,
    pub destination_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatesView {
    /// Alphabetical by name
    pub entries: Vec<StateEntry>,
}

/// Count destinations per state id in one pass. Destinations without a state are skipped.
pub fn tally_destinations<'a, I>(state_ids: I) -> HashMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a Option<String>>,
{
    let mut counts = HashMap::new();
    for state_id in state_ids.into_iter().flatten() {
        *counts.entry(state_id.as_str()).or_insert(0) += 1;
    }
    counts
}

pub struct StatesPage<D> {
    catalog: Catalog<D>,
    slot: PageSlot<(), StatesView>,
}

impl<D: DataSource> StatesPage<D> {
    pub fn new(catalog: Catalog<D>) -> Self {
        Self {
            catalog,
            slot: PageSlot::new(),
        }
    }

    pub async fn mount(&self) {
        let ticket = self.slot.begin(()).await;
        let (states, state_ids) = tokio::join!(
            self.catalog.states(),
            self.catalog.destination_state_ids()
        );

        // Counts only once the destination fetch has settled
        let state_ids = state_ids.unwrap_or_default();
        let counts = tally_destinations(&state_ids);

        let entries = states
            .unwrap_or_default()
            .into_iter()
            .map(|state| StateEntry {
                destination_count: counts.get(state.id.as_str()).copied().unwrap_or(0),
                state,
            })
            .collect();

        self.slot.commit(ticket, StatesView { entries }).await;
    }

    pub async fn view(&self) -> Loadable<StatesView> {
        self.slot.view().await
    }
}
