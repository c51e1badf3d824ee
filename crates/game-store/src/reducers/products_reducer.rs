//! Products Reducer
//!
//! Sort and filter choices of the games page. Changing a filter resets the
//! selection to the top of the listing.

use crate::actions::ProductsAction;
use crate::domain_models::Game;
use crate::state::ProductsState;
use crate::view_models::{cycle_option, genres, product_listing, PLATFORMS};

pub fn reduce_products(
    mut state: ProductsState,
    action: &ProductsAction,
    catalog: &[Game],
) -> ProductsState {
    match action {
        ProductsAction::CycleSort => {
            state.sort = state.sort.next();
            log::debug!("Products: sort by {}", state.sort);
        }
        ProductsAction::CycleGenre => {
            state.genre = cycle_option(state.genre.as_deref(), &genres(catalog));
            state.selected = 0;
        }
        ProductsAction::CyclePlatform => {
            state.platform = cycle_option(state.platform.as_deref(), &PLATFORMS);
            state.selected = 0;
        }
        ProductsAction::SelectNext => {
            let count = product_listing(catalog, &state.filter(), state.sort).len();
            if state.selected + 1 < count {
                state.selected += 1;
            }
        }
        ProductsAction::SelectPrevious => {
            state.selected = state.selected.saturating_sub(1);
        }
    }
    state
}
