use crate::model::command::ParseCommandError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("either a preset or a set of reactions must be given")]
    MissingChoices,
    #[error("cannot have both a preset and a set of reactions")]
    ConflictingChoices,
    #[error("a choice set needs at least one reaction")]
    EmptyChoiceSet,
    #[error("{0:?} is not a reaction")]
    InvalidChoice(String),
    #[error("reaction {0} appears more than once in the choice set")]
    DuplicateChoice(String),
    #[error("unable to parse command")]
    InvalidCommand(#[from] ParseCommandError),
    #[error("the prompt was dropped before anyone answered")]
    Abandoned,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
