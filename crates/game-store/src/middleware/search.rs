//! Search Middleware
//!
//! Every edit of the search input schedules a search after the debounce
//! delay. The search runs against the catalog as it is when the delay is over.
//! A search whose criteria no longer match the input (edited again, or
//! cleared) is dropped when it comes due.

use crate::actions::{Action, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::view_models::search;

#[derive(Debug, Default)]
pub struct SearchMiddleware;

impl SearchMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Search(SearchAction::InputChanged(input)) => {
                if !input.is_empty() {
                    let ticket = dispatcher.dispatch_after(
                        state.config.search_debounce(),
                        Action::Search(SearchAction::Run(input.criteria())),
                    );
                    log::debug!("SearchMiddleware: search scheduled as {:?}", ticket);
                }
                true
            }

            Action::Search(SearchAction::Run(criteria)) => {
                let input = &state.search.input;
                if input.is_empty() || *criteria != input.criteria() {
                    log::debug!("SearchMiddleware: dropping stale search {:?}", criteria);
                    return false;
                }
                let results = search(&state.store.catalog, criteria)
                    .into_iter()
                    .cloned()
                    .collect();
                dispatcher.dispatch(Action::Search(SearchAction::SetResults(results)));
                false
            }

            Action::Search(SearchAction::Clear) => {
                dispatcher.dispatch(Action::Search(SearchAction::SetResults(Vec::new())));
                true
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CatalogAction;
    use crate::scheduler::{Clock, ManualClock};
    use crate::state::SearchInput;
    use crate::store::Store;
    use chrono::DateTime;
    use std::sync::Arc;
    use std::time::Duration;

    fn setup() -> (Store, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        ));
        let mut store = Store::new(AppState::default(), clock.clone() as Arc<dyn Clock>);
        store.add_middleware(Box::new(SearchMiddleware::new()));
        (store, clock)
    }

    fn type_query(store: &mut Store, query: &str) {
        store.dispatch(Action::Search(SearchAction::InputChanged(SearchInput {
            query: query.to_string(),
            ..Default::default()
        })));
    }

    fn titles(store: &Store) -> Vec<String> {
        store
            .state()
            .store
            .search_results
            .iter()
            .map(|g| g.title.clone())
            .collect()
    }

    #[test]
    fn test_search_runs_after_debounce() {
        let (mut store, clock) = setup();
        type_query(&mut store, "night");
        assert!(store.state().search.searching);

        clock.advance(Duration::from_millis(499));
        store.tick();
        assert!(titles(&store).is_empty());

        clock.advance(Duration::from_millis(1));
        store.tick();
        assert_eq!(titles(&store), vec!["Cyberpunk 2077"]);
        assert!(!store.state().search.searching);
    }

    #[test]
    fn test_latest_input_wins() {
        let (mut store, clock) = setup();
        type_query(&mut store, "n");
        clock.advance(Duration::from_millis(200));
        type_query(&mut store, "ring");
        clock.advance(Duration::from_millis(600));
        store.tick();

        assert_eq!(titles(&store), vec!["Elden Ring"]);
    }

    #[test]
    fn test_empty_input_schedules_nothing() {
        let (mut store, _clock) = setup();
        type_query(&mut store, "");
        assert_eq!(store.pending(), 0);
        assert!(!store.state().search.searching);
    }

    #[test]
    fn test_search_sees_catalog_at_run_time() {
        let (mut store, clock) = setup();
        type_query(&mut store, "ring");
        store.dispatch(Action::Catalog(CatalogAction::Delete(3)));
        clock.advance(Duration::from_millis(500));
        store.tick();
        assert!(titles(&store).is_empty());
    }

    #[test]
    fn test_clear_before_debounce_keeps_results_empty() {
        let (mut store, clock) = setup();
        type_query(&mut store, "ring");
        store.dispatch(Action::Search(SearchAction::Clear));
        clock.advance(Duration::from_millis(500));
        store.tick();

        assert!(titles(&store).is_empty());
        assert!(store.state().search.input.is_empty());
        assert_eq!(store.pending(), 0);
    }

    #[test]
    fn test_searching_until_latest_input_is_served() {
        let (mut store, clock) = setup();
        type_query(&mut store, "r");
        clock.advance(Duration::from_millis(300));
        type_query(&mut store, "ring");

        clock.advance(Duration::from_millis(200));
        store.tick();
        assert!(titles(&store).is_empty());
        assert!(store.state().search.searching);

        clock.advance(Duration::from_millis(300));
        store.tick();
        assert_eq!(titles(&store), vec!["Elden Ring"]);
        assert!(!store.state().search.searching);
    }

    #[test]
    fn test_clear_drops_results() {
        let (mut store, clock) = setup();
        type_query(&mut store, "ring");
        clock.advance(Duration::from_millis(500));
        store.tick();
        store.dispatch(Action::Search(SearchAction::Clear));

        assert!(titles(&store).is_empty());
        assert!(store.state().search.input.is_empty());
    }
}
