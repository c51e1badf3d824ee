//! Admin Reducer

use crate::actions::{Action, AdminAction};
use crate::state::{AdminState, AdminTab};

pub fn reduce_admin(
    mut state: AdminState,
    action: &Action,
    game_count: usize,
    order_count: usize,
) -> AdminState {
    let row_count = match state.tab {
        AdminTab::Games => game_count,
        AdminTab::Orders => order_count,
    };

    // Any other admin or catalog action abandons a pending delete
    match action {
        Action::Admin(AdminAction::RequestDelete(_)) => {}
        Action::Admin(_) | Action::Catalog(_) => state.pending_delete = None,
        _ => {}
    }

    match action {
        Action::Admin(AdminAction::RequestDelete(id)) => {
            state.pending_delete = Some(*id);
        }
        Action::Admin(AdminAction::SwitchTab) => {
            state.tab = state.tab.toggle();
            state.selected = 0;
            return state;
        }
        Action::Admin(AdminAction::SelectNext) => {
            if state.selected + 1 < row_count {
                state.selected += 1;
            }
        }
        Action::Admin(AdminAction::SelectPrevious) => {
            state.selected = state.selected.saturating_sub(1);
        }
        _ => {}
    }

    state.selected = state.selected.min(row_count.saturating_sub(1));
    state
}
