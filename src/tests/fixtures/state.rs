use std::sync::Arc;

use crate::modules::activities::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::activities::test_catalog;

/// A fresh store per test; the store handle lets tests inspect rosters directly.
pub fn make_test_state() -> (Arc<InMemoryRosterStore>, AppState) {
    let store = Arc::new(InMemoryRosterStore::new(test_catalog()));
    let state = AppState::new(store.clone());
    (store, state)
}
