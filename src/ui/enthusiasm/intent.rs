use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnthusiasmIntent {
    Increment,
    Decrement,
}

impl Intent for EnthusiasmIntent {
    fn kind(&self) -> &'static str {
        match self {
            EnthusiasmIntent::Increment => "INCREMENT_ENTHUSIASM",
            EnthusiasmIntent::Decrement => "DECREMENT_ENTHUSIASM",
        }
    }
}
