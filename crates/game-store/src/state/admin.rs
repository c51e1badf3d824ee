//! Admin dashboard view state

use crate::domain_models::GameId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
pub enum AdminTab {
    #[default]
    #[strum(to_string = "Games Management")]
    Games,
    Orders,
}

impl AdminTab {
    pub fn toggle(self) -> Self {
        match self {
            AdminTab::Games => AdminTab::Orders,
            AdminTab::Orders => AdminTab::Games,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminState {
    pub tab: AdminTab,
    /// Index into the catalog (games tab) or orders (orders tab)
    pub selected: usize,
    /// Game waiting for a second delete key press
    pub pending_delete: Option<GameId>,
}
