use std::fmt::{self, Display};

use crate::error::{Error, Result};

const VARIATION_SELECTOR: char = '\u{fe0f}';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChoiceValue {
    Text(String),
    Number(i64),
}

impl<'a> From<&'a str> for ChoiceValue {
    fn from(value: &'a str) -> Self {
        ChoiceValue::Text(value.to_owned())
    }
}

impl From<String> for ChoiceValue {
    fn from(value: String) -> Self {
        ChoiceValue::Text(value)
    }
}

impl From<i64> for ChoiceValue {
    fn from(value: i64) -> Self {
        ChoiceValue::Number(value)
    }
}

impl Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChoiceValue::Text(s) => f.write_str(s),
            ChoiceValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Built-in choice sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 👍 is `"yes"`, 👎 is `"no"`.
    YesNo,
    /// Keycaps 0️⃣ to 9️⃣, each mapped to its digit as a number.
    Digits,
}

impl Preset {
    pub fn choices(self) -> ChoiceSet {
        let entries = match self {
            Preset::YesNo => vec![
                ("\u{1f44d}".to_owned(), ChoiceValue::from("yes")),
                ("\u{1f44e}".to_owned(), ChoiceValue::from("no")),
            ],
            Preset::Digits => (0..10)
                .map(|i| (format!("{}\u{fe0f}\u{20e3}", i), ChoiceValue::Number(i)))
                .collect(),
        };
        ChoiceSet { entries }
    }
}

/// Ordered mapping from reaction symbol to the value it stands for.
///
/// Symbols are compared with the emoji variation selector (U+FE0F) ignored,
/// since the gateway reports keycaps as `3️⃣` even when they were added as `3⃣`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet {
    entries: Vec<(String, ChoiceValue)>,
}

fn same_symbol(a: &str, b: &str) -> bool {
    a.chars()
        .filter(|c| *c != VARIATION_SELECTOR)
        .eq(b.chars().filter(|c| *c != VARIATION_SELECTOR))
}

impl ChoiceSet {
    pub fn new<I, S, V>(entries: I) -> Result<ChoiceSet>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<ChoiceValue>,
    {
        let mut set = ChoiceSet {
            entries: Vec::new(),
        };
        for (symbol, value) in entries {
            let symbol = symbol.into();
            if symbol
                .chars()
                .all(|c| c == VARIATION_SELECTOR || c.is_whitespace())
            {
                return Err(Error::InvalidChoice(symbol));
            }
            if set.get(&symbol).is_some() {
                return Err(Error::DuplicateChoice(symbol));
            }
            set.entries.push((symbol, value.into()));
        }

        if set.entries.is_empty() {
            return Err(Error::EmptyChoiceSet);
        }
        Ok(set)
    }

    /// Picks the choice set for a prompt; exactly one of `preset` and `custom` must be given.
    pub fn select(preset: Option<Preset>, custom: Option<ChoiceSet>) -> Result<ChoiceSet> {
        match (preset, custom) {
            (Some(preset), None) => Ok(preset.choices()),
            (None, Some(custom)) => Ok(custom),
            (Some(_), Some(_)) => Err(Error::ConflictingChoices),
            (None, None) => Err(Error::MissingChoices),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&ChoiceValue> {
        self.entries
            .iter()
            .find(|(s, _)| same_symbol(s, symbol))
            .map(|(_, v)| v)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChoiceValue)> {
        self.entries.iter().map(|(s, v)| (s.as_str(), v))
    }
}
