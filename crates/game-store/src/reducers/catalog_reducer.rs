//! Catalog Reducer
//!
//! Admin add/update/delete over the catalog.

use crate::actions::CatalogAction;
use crate::state::StoreState;

pub fn reduce_catalog(mut state: StoreState, action: &CatalogAction) -> StoreState {
    match action {
        CatalogAction::Add(game) => {
            log::info!("Catalog: added #{} {}", game.id, game.title);
            state.catalog.push(game.clone());
        }

        CatalogAction::Update(game) => {
            match state.catalog.iter_mut().find(|g| g.id == game.id) {
                Some(existing) => {
                    *existing = game.clone();
                    log::info!("Catalog: updated #{} {}", game.id, game.title);
                }
                None => log::warn!("Catalog: update for unknown game #{}", game.id),
            }
        }

        CatalogAction::Delete(id) => {
            let before = state.catalog.len();
            state.catalog.retain(|g| g.id != *id);
            if state.catalog.len() == before {
                log::warn!("Catalog: delete for unknown game #{}", id);
            } else {
                log::info!("Catalog: deleted #{}", id);
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::seed_catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_appends() {
        let mut game = seed_catalog().remove(0);
        game.id = 7;
        game.title = "Hades".to_string();
        let state = reduce_catalog(StoreState::seeded(), &CatalogAction::Add(game.clone()));
        assert_eq!(state.catalog.len(), 7);
        assert_eq!(state.catalog.last(), Some(&game));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut game = seed_catalog().remove(2);
        game.in_stock = false;
        let state = reduce_catalog(StoreState::seeded(), &CatalogAction::Update(game.clone()));
        assert_eq!(state.catalog[2], game);
        assert_eq!(state.catalog.len(), 6);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut game = seed_catalog().remove(0);
        game.id = 99;
        let state = reduce_catalog(StoreState::seeded(), &CatalogAction::Update(game));
        assert_eq!(state, StoreState::seeded());
    }

    #[test]
    fn test_delete() {
        let state = reduce_catalog(StoreState::seeded(), &CatalogAction::Delete(3));
        let ids: Vec<u64> = state.catalog.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_delete_unknown_leaves_catalog_unchanged() {
        let state = reduce_catalog(StoreState::seeded(), &CatalogAction::Delete(404));
        assert_eq!(state.catalog, seed_catalog());
    }
}
