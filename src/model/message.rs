use std::fmt::{self, Display};

use crate::error::Error;
use crate::model::choice::{ChoiceSet, ChoiceValue};

use serenity::model::{id::UserId, mention::Mentionable};

pub enum Message {
    Help,
    Question {
        asked_to: UserId,
        question: String,
        choices: ChoiceSet,
    },
    Answered(UserId, ChoiceValue),
    NoAnswer(UserId),
    HandleError(Error),
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Message::Help => f.write_str(
                "Mention me or use `!prompt` to ask something.

**Examples**
- `!prompt yesno Pizza tonight?`
- `!prompt digit How many slices?`
- `!prompt choose 🍎 apple, 🍌 banana: Which fruit?`
",
            ),
            Message::Question {
                asked_to,
                question,
                choices,
            } => {
                writeln!(f, "{} {}", asked_to.mention(), question)?;
                let mut iter = choices.iter();
                if let Some((symbol, value)) = iter.next() {
                    write!(f, "{} {}", symbol, value)?;
                }
                for (symbol, value) in iter {
                    write!(f, " / {} {}", symbol, value)?;
                }
                Ok(())
            }
            Message::Answered(id, value) => write!(f, "{} answered **{}**", id.mention(), value),
            Message::NoAnswer(id) => write!(f, "{} did not answer in time", id.mention()),
            Message::HandleError(e) => fmt_error(f, e),
        }
    }
}

fn fmt_error(f: &mut fmt::Formatter, e: &Error) -> fmt::Result {
    match e {
        Error::InvalidCommand(_) => f.write_str("I don't understand that command"),
        Error::DuplicateChoice(symbol) => write!(f, "{} is offered twice", symbol),
        Error::InvalidChoice(symbol) => write!(f, "{:?} is not a reaction I can add", symbol),
        Error::EmptyChoiceSet => f.write_str("give me at least one choice"),
        _ => f.write_str("something went wrong"),
    }
}
