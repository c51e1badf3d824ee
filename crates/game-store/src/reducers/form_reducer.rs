//! Form Reducer
//!
//! Text editing for the login, registration and contact forms.

use crate::actions::FormAction;
use crate::state::FormState;

pub fn reduce_form(mut state: FormState, action: &FormAction) -> FormState {
    match action {
        FormAction::Input(_, c) => state.push_char(*c),
        FormAction::Backspace(_) => state.backspace(),
        FormAction::FocusNext(_) => state.focus_next(),
        FormAction::FocusPrevious(_) => state.focus_prev(),
        FormAction::Reset(_) => state.reset(),
    }
    state
}

/// Which form an action targets
pub fn target(action: &FormAction) -> crate::actions::FormId {
    match action {
        FormAction::Input(id, _)
        | FormAction::Backspace(id)
        | FormAction::FocusNext(id)
        | FormAction::FocusPrevious(id)
        | FormAction::Reset(id) => *id,
    }
}
