//! Search page actions

use crate::domain_models::Game;
use crate::state::SearchInput;
use crate::view_models::SearchCriteria;

#[derive(Debug, Clone)]
pub enum SearchAction {
    /// Query or filters edited
    InputChanged(SearchInput),
    /// Move focus to the next search field
    FocusNext,
    /// Move focus to the previous search field
    FocusPrevious,
    /// Debounced search is due, evaluated by `SearchMiddleware`
    Run(SearchCriteria),
    /// Replace the stored search results
    SetResults(Vec<Game>),
    /// Reset query, filters and results
    Clear,
    SelectNext,
    SelectPrevious,
}
