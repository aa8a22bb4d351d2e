use std::collections::BTreeSet;
use std::fmt;

/// English letters ordered by frequency of use.
pub const LETTERS: &str = "etaoinsrhldcumfpgwybvkxjqz";
/// [`LETTERS`] without vowels.
pub const LETTERS_NO_VOWELS: &str = "tnsrhldcmfpgwbvkxjqz";
/// Decimal digits, in catalog order.
pub const NUMBERS: &str = "1234567890";
/// Punctuation alphabet. The empty symbol yields the punctuation-free charsets.
pub const PUNCTUATION: [&str; 26] = [
    "", "~", "!", "@", "#", "$", "%", "&", "*", "(", ")", "-", "_", "+", "=", ",", ".", "?",
    "/", "<", ">", ";", ":", "[", "]", "'",
];

const SHORTEST_LETTER_PREFIX: usize = 10;
const NUMBERED_LETTER_PREFIXES: [usize; 5] = [10, 14, 18, 22, 26];
const PUNCTUATION_RUNS: [usize; 3] = [4, 8, 16];

/// Ordered alphabet whose 1-based positions are encoding digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Charset {
    symbols: Vec<char>,
}

impl Charset {
    /// Builds a charset from its symbols in digit order.
    pub fn new(symbols: &str) -> Self {
        Self {
            symbols: symbols.chars().collect(),
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when the charset has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Positional base of values encoded with this charset; digit 0 is reserved.
    pub fn base(&self) -> usize {
        self.symbols.len() + 1
    }

    /// Zero-based position of `symbol`.
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&c| c == symbol)
    }

    /// Symbol at zero-based `position`.
    pub fn symbol(&self, position: usize) -> Option<char> {
        self.symbols.get(position).copied()
    }

    /// True when `symbol` belongs to the charset.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// True when every symbol of `wanted` belongs to the charset.
    pub fn covers(&self, wanted: &BTreeSet<char>) -> bool {
        wanted.iter().all(|&c| self.contains(c))
    }
}

impl From<&str> for Charset {
    fn from(symbols: &str) -> Self {
        Self::new(symbols)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Every charset an amount can reference, shortest first.
///
/// The order is part of the wire format: an amount carries the index of its
/// charset, so two catalogs must agree entry for entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    charsets: Vec<Charset>,
}

impl Catalog {
    /// Generates the catalog.
    ///
    /// For each punctuation grouping the following are emitted, each behind a
    /// leading space: letter prefixes of length 10 through 26; the prefixes
    /// 10, 14, 18, 22 and 26 followed by the digits; the vowel-free letters
    /// alone and with digits; the digits alone. The list is then stably sorted
    /// by length, so ties keep emission order.
    pub fn generate() -> Self {
        let letters: Vec<char> = LETTERS.chars().collect();
        let prefix = |len: usize| letters[..len].iter().collect::<String>();

        let mut charsets = Vec::new();
        for punctuation in punctuation_groupings() {
            for len in SHORTEST_LETTER_PREFIX..=letters.len() {
                charsets.push(format!(" {}{}", prefix(len), punctuation));
            }
            for len in NUMBERED_LETTER_PREFIXES {
                charsets.push(format!(" {}{}{}", prefix(len), NUMBERS, punctuation));
            }
            charsets.push(format!(" {}{}", LETTERS_NO_VOWELS, punctuation));
            charsets.push(format!(" {}{}{}", LETTERS_NO_VOWELS, NUMBERS, punctuation));
            charsets.push(format!(" {}{}", NUMBERS, punctuation));
        }

        let mut charsets: Vec<Charset> = charsets.iter().map(|s| Charset::new(s)).collect();
        // `sort_by_key` is stable.
        charsets.sort_by_key(Charset::len);
        Self { charsets }
    }

    /// Number of charsets.
    pub fn len(&self) -> usize {
        self.charsets.len()
    }

    /// True when the catalog holds no charsets.
    pub fn is_empty(&self) -> bool {
        self.charsets.is_empty()
    }

    /// Charset at `index`.
    pub fn get(&self, index: usize) -> Option<&Charset> {
        self.charsets.get(index)
    }

    /// Charsets in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Charset> {
        self.charsets.iter()
    }

    /// Characters of `text` absent from every charset, in order of first appearance.
    pub fn unsupported(&self, text: &str) -> String {
        let mut seen = BTreeSet::new();
        text.chars()
            .filter(|&c| seen.insert(c))
            .filter(|&c| !self.charsets.iter().any(|charset| charset.contains(c)))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::generate()
    }
}

/// Punctuation groupings: each symbol alone, the concatenated alphabet cut
/// into runs of 4, 8 and 16, then the whole alphabet.
fn punctuation_groupings() -> Vec<String> {
    let mut groupings: Vec<String> = PUNCTUATION.iter().map(|p| p.to_string()).collect();
    let joined: Vec<char> = PUNCTUATION.concat().chars().collect();
    for run in PUNCTUATION_RUNS {
        groupings.extend(joined.chunks(run).map(|chunk| chunk.iter().collect::<String>()));
    }
    groupings.push(joined.iter().collect());
    groupings
}
