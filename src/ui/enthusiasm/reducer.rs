use crate::ui::enthusiasm::intent::EnthusiasmIntent;
use crate::ui::enthusiasm::state::AppState;
use crate::ui::mvi::Reducer;

pub struct EnthusiasmReducer;

impl Reducer for EnthusiasmReducer {
    type State = AppState;
    type Intent = EnthusiasmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // No clamping: zero and negative levels are representable.
        let enthusiasm_level = match intent {
            EnthusiasmIntent::Increment => state.enthusiasm_level.saturating_add(1),
            EnthusiasmIntent::Decrement => state.enthusiasm_level.saturating_sub(1),
        };
        AppState {
            enthusiasm_level,
            language_name: state.language_name,
        }
    }
}
