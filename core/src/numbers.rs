//! Spoken-number parsing.
//!
//! Collapses runs of number words ("nineteen", "eighty", "four") into digit
//! strings. The reduction rules are a set of heuristics for the phrasings that
//! show up in transcripts (years, counts, spelled-out digit strings), not a
//! general number grammar. Anything outside those patterns falls back to the
//! space-separated values of each entry.

use tracing::trace;

/// Number of single digits that are still concatenated into one number.
const MAX_CONCATENATED_DIGITS: usize = 10;

/// Lexical class of a number word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberCategory {
    /// zero..nine
    Ones,
    /// ten..nineteen
    Teens,
    /// twenty..ninety
    Tens,
    /// hundred, thousand, million
    Powers,
}

/// A number word recognised inside a phrase, or a partially reduced value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberEntry {
    pub category: NumberCategory,
    pub value: u64,
}

impl NumberEntry {
    pub fn new(category: NumberCategory, value: u64) -> Self {
        Self { category, value }
    }
}

const ONES: &[(&str, u64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

const TEENS: &[(&str, u64)] = &[
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: &[(&str, u64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const POWERS: &[(&str, u64)] = &[("hundred", 100), ("thousand", 1_000), ("million", 1_000_000)];

/// Look up a (lowercase) word in the number tables.
pub fn lookup(word: &str) -> Option<NumberEntry> {
    [
        (NumberCategory::Ones, ONES),
        (NumberCategory::Teens, TEENS),
        (NumberCategory::Tens, TENS),
        (NumberCategory::Powers, POWERS),
    ]
    .into_iter()
    .find_map(|(category, table)| {
        table
            .iter()
            .find(|(name, _)| *name == word)
            .map(|&(_, value)| NumberEntry::new(category, value))
    })
}

/// Reduce the entries of one number phrase to its output text.
///
/// The result may contain spaces when the phrase does not match any of the
/// recognised patterns.
pub fn reduce(entries: &[NumberEntry]) -> String {
    if let [only] = entries {
        return only.value.to_string();
    }

    if entries.iter().all(|e| e.category == NumberCategory::Ones) {
        if entries.len() <= MAX_CONCATENATED_DIGITS {
            return entries.iter().map(|e| e.value.to_string()).collect();
        }
        return join_values(entries);
    }

    if let [first, last] = entries {
        if last.category == NumberCategory::Teens {
            // nineteen nineteen
            return first.value.saturating_mul(100).saturating_add(last.value).to_string();
        }
        if first.category == NumberCategory::Powers {
            return first.value.saturating_add(last.value).to_string();
        }
    }

    join_values(entries)
}

fn join_values(entries: &[NumberEntry]) -> String {
    entries
        .iter()
        .map(|e| e.value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parser state between tokens.
#[derive(Debug, Default)]
enum ParseState {
    #[default]
    Idle,
    /// Inside a number phrase; owns the accumulated entries.
    InNumber(Vec<NumberEntry>),
}

/// Single-pass state machine turning number words into digit strings.
#[derive(Debug, Default)]
pub struct NumberPhraseParser {
    state: ParseState,
    output: Vec<String>,
}

impl NumberPhraseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next token.
    pub fn push(&mut self, token: &str) {
        let Some(entry) = lookup(token) else {
            self.flush();
            self.output.push(token.to_string());
            return;
        };

        match &mut self.state {
            ParseState::Idle => self.state = ParseState::InNumber(vec![entry]),
            ParseState::InNumber(acc) => accumulate(acc, entry),
        }
    }

    /// Flush any pending phrase and return the output tokens.
    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        self.output
    }

    fn flush(&mut self) {
        if let ParseState::InNumber(acc) = std::mem::take(&mut self.state) {
            let reduced = reduce(&acc);
            trace!(entries = acc.len(), reduced = %reduced, "Reduced number phrase");
            self.output.push(reduced);
        }
    }
}

/// Apply one number word to the accumulator of the current phrase.
fn accumulate(acc: &mut Vec<NumberEntry>, entry: NumberEntry) {
    let Some(last) = acc.last_mut() else {
        acc.push(entry);
        return;
    };

    match entry.category {
        NumberCategory::Ones if last.category == NumberCategory::Tens => {
            // fifty one
            last.value = last.value.saturating_add(entry.value);
        }
        NumberCategory::Ones | NumberCategory::Teens => acc.push(entry),
        NumberCategory::Tens => {
            let value = match last.category {
                // nine twenty, twenty twenty
                NumberCategory::Ones | NumberCategory::Teens | NumberCategory::Tens => {
                    last.value.saturating_mul(100).saturating_add(entry.value)
                }
                // hundred twenty
                NumberCategory::Powers => last.value.saturating_add(entry.value),
            };
            *last = NumberEntry::new(NumberCategory::Tens, value);
        }
        NumberCategory::Powers => {
            *last = NumberEntry::new(NumberCategory::Powers, last.value.saturating_mul(entry.value));
        }
    }
}

/// Convert spoken number phrases in `tokens` into digit strings.
///
/// Non-number tokens pass through unchanged, including tokens that are
/// already digit strings.
pub fn ennumberize<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = NumberPhraseParser::new();
    for token in tokens {
        parser.push(token.as_ref());
    }
    parser.finish()
}

#[cfg(test)]
#[path = "numbers_test.rs"]
mod tests;
