//! Search Reducer
//!
//! Stored results are replaced wholesale; the search page keeps its own input
//! and progress state.

use crate::actions::SearchAction;
use crate::state::{SearchState, StoreState};

/// Store side: replace the last search results
pub fn reduce_search_results(mut state: StoreState, action: &SearchAction) -> StoreState {
    if let SearchAction::SetResults(results) = action {
        log::debug!("Search: {} results", results.len());
        state.search_results = results.clone();
    }
    state
}

/// View side: input, focus, progress and selection
pub fn reduce_search_view(
    mut state: SearchState,
    action: &SearchAction,
    result_count: usize,
) -> SearchState {
    match action {
        SearchAction::InputChanged(input) => {
            state.input = input.clone();
            state.searching = !input.is_empty();
        }
        SearchAction::FocusNext => state.focus = state.focus.next(),
        SearchAction::FocusPrevious => state.focus = state.focus.prev(),
        SearchAction::SetResults(_) => {
            state.searching = false;
            state.selected = 0;
        }
        SearchAction::Clear => {
            state = SearchState::default();
        }
        SearchAction::SelectNext => {
            if state.selected + 1 < result_count {
                state.selected += 1;
            }
        }
        SearchAction::SelectPrevious => {
            state.selected = state.selected.saturating_sub(1);
        }
        SearchAction::Run(_) => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::seed_catalog;
    use crate::state::{SearchField, SearchInput};

    #[test]
    fn test_set_results_replaces() {
        let mut state = StoreState::seeded();
        state.search_results = seed_catalog();
        let results = vec![seed_catalog().remove(4)];
        let state = reduce_search_results(state, &SearchAction::SetResults(results.clone()));
        assert_eq!(state.search_results, results);

        let state = reduce_search_results(state, &SearchAction::SetResults(Vec::new()));
        assert!(state.search_results.is_empty());
    }

    #[test]
    fn test_input_marks_searching() {
        let input = SearchInput {
            query: "ring".to_string(),
            ..Default::default()
        };
        let state = reduce_search_view(
            SearchState::default(),
            &SearchAction::InputChanged(input.clone()),
            0,
        );
        assert!(state.searching);
        assert_eq!(state.input, input);

        let state = reduce_search_view(state, &SearchAction::SetResults(Vec::new()), 0);
        assert!(!state.searching);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = SearchState::default();
        state.focus = SearchField::MaxPrice;
        state.input.query = "x".to_string();
        state.selected = 2;
        let state = reduce_search_view(state, &SearchAction::Clear, 3);
        assert_eq!(state, SearchState::default());
    }

    #[test]
    fn test_selection_is_bounded() {
        let mut state = SearchState::default();
        for _ in 0..5 {
            state = reduce_search_view(state, &SearchAction::SelectNext, 2);
        }
        assert_eq!(state.selected, 1);
        state = reduce_search_view(state, &SearchAction::SelectPrevious, 2);
        state = reduce_search_view(state, &SearchAction::SelectPrevious, 2);
        assert_eq!(state.selected, 0);
    }
}
