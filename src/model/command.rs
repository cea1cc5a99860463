use std::fmt::{self, Display};
use std::str::FromStr;

use crate::model::choice::Preset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceSpecifier {
    Preset(Preset),
    Custom(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ask {
        choices: ChoiceSpecifier,
        question: String,
    },
    Help,
}

#[derive(Debug, Clone)]
pub struct ParseCommandError {
    got: Option<String>,
    expected: peg::error::ExpectedSet,
}

impl Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} is expected", self.expected)?;
        if let Some(got) = &self.got {
            write!(f, ", but got {}", got)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseCommandError {}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Command, Self::Err> {
        parser::command(input).map_err(|e| ParseCommandError {
            got: input.get(e.location.offset..).map(ToOwned::to_owned),
            expected: e.expected,
        })
    }
}

peg::parser! {
  grammar parser() for str {
    rule _() = [' ']*

    rule __() = [' ']+

    rule question() -> String
      = q:$([_]+) {?
          let q = q.trim();
          if q.is_empty() { Err("question") } else { Ok(q.to_owned()) }
      }

    // custom emoji look like <:name:id>, so they may contain ':'
    rule symbol() -> &'input str
      = $(['<'] (!['>'] [_])+ ['>'])
      / $((!([' ' | ',' | ':']) [_])+)

    rule label() -> &'input str
      = $((!([',' | ':']) [_])+)

    rule entry() -> (String, String)
      = s:symbol() __ l:label() {?
          let l = l.trim();
          if l.is_empty() { Err("label") } else { Ok((s.to_owned(), l.to_owned())) }
      }

    rule entries() -> Vec<(String, String)>
      = l:entry() ++ (_ [','] _) { l }

    rule yes_no() = "yesno" / "yn" / "y/n"

    rule digit() = "digits" / "digit"

    pub rule command() -> Command
      = "help" _ { Command::Help }
      / yes_no() __ q:question() {
          Command::Ask { choices: ChoiceSpecifier::Preset(Preset::YesNo), question: q }
      }
      / digit() __ q:question() {
          Command::Ask { choices: ChoiceSpecifier::Preset(Preset::Digits), question: q }
      }
      / "choose" __ l:entries() _ [':'] _ q:question() {
          Command::Ask { choices: ChoiceSpecifier::Custom(l), question: q }
      }
  }
}

#[cfg(test)]
mod tests {
    use super::{ChoiceSpecifier, Command};
    use crate::model::choice::Preset;

    fn ask(choices: ChoiceSpecifier, question: &str) -> Command {
        Command::Ask {
            choices,
            question: question.to_owned(),
        }
    }

    #[test]
    fn test_help() {
        assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            "yesno  pizza tonight?".parse::<Command>().unwrap(),
            ask(ChoiceSpecifier::Preset(Preset::YesNo), "pizza tonight?")
        );
        assert_eq!(
            "digit how many slices?".parse::<Command>().unwrap(),
            ask(ChoiceSpecifier::Preset(Preset::Digits), "how many slices?")
        );
    }

    #[test]
    fn test_choose() {
        assert_eq!(
            "choose 🍎 apple, 🍌 green banana: which fruit?"
                .parse::<Command>()
                .unwrap(),
            ask(
                ChoiceSpecifier::Custom(vec![
                    ("🍎".to_owned(), "apple".to_owned()),
                    ("🍌".to_owned(), "green banana".to_owned()),
                ]),
                "which fruit?"
            )
        );
    }

    #[test]
    fn test_choose_custom_emoji() {
        assert_eq!(
            "choose <:ferris:1234> crab: who?".parse::<Command>().unwrap(),
            ask(
                ChoiceSpecifier::Custom(vec![("<:ferris:1234>".to_owned(), "crab".to_owned())]),
                "who?"
            )
        );
    }

    #[test]
    fn test_invalid() {
        assert!("yesno".parse::<Command>().is_err());
        assert!("choose 🍎: which?".parse::<Command>().is_err());
        assert!("choose 🍎 apple which?".parse::<Command>().is_err());
        assert!("hello there".parse::<Command>().is_err());
    }
}
