use crate::model::choice::ChoiceValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Chosen(ChoiceValue),
    TimedOut,
}

impl PromptOutcome {
    pub fn chosen(self) -> Option<ChoiceValue> {
        match self {
            PromptOutcome::Chosen(value) => Some(value),
            PromptOutcome::TimedOut => None,
        }
    }
}
