//! Product listing view state

use crate::view_models::{CatalogFilter, SortOrder};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductsState {
    pub sort: SortOrder,
    /// `None` shows all genres
    pub genre: Option<String>,
    /// `None` shows all platforms
    pub platform: Option<String>,
    /// Index into the filtered and sorted listing
    pub selected: usize,
}

impl ProductsState {
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter {
            genre: self.genre.clone(),
            platform: self.platform.clone(),
        }
    }
}
