//! Building a target string by concatenating words from a bank.
//!
//! Residuals are suffixes of the target: using a word that prefixes the
//! residual leaves the rest of it. Table indices are byte offsets into the
//! target, so cell `i` answers for the prefix `target[..i]`.
//!
//! The recursive tiers put each word in front of the combination returned for
//! the suffix, and the tabulated tier appends it after the combination for the
//! prefix. Either way a combination reads in concatenation order.

use crate::engine::Solver;
use crate::outcome::{AllCombinations, Count, Decision};
use crate::traits::Decomposition;

/// Can the target be built from the words?
pub type CanConstruct<'a> = Solver<WordBank<'a>, Decision>;

/// In how many ways can the target be built?
pub type CountConstruct<'a> = Solver<WordBank<'a>, Count>;

/// Every way to build the target.
pub type AllConstruct<'a> = Solver<WordBank<'a>, AllCombinations>;

/// A target string and the words available to build it.
///
/// Words may be reused any number of times. Empty words never shorten a
/// residual and are ignored.
#[derive(Clone, Copy, Debug)]
pub struct WordBank<'a> {
    target: &'a str,
    words: &'a [&'a str],
}

impl<'a> WordBank<'a> {
    pub fn new(target: &'a str, words: &'a [&'a str]) -> Self {
        Self { target, words }
    }

    pub fn target_str(&self) -> &'a str {
        self.target
    }

    pub fn words(&self) -> &'a [&'a str] {
        self.words
    }
}

impl<'a> Decomposition for WordBank<'a> {
    type Residual = &'a str;
    type Part = &'a str;

    fn target(&self) -> &'a str {
        self.target
    }

    fn parts(&self) -> &[&'a str] {
        self.words
    }

    fn is_base(&self, residual: &'a str) -> bool {
        residual.is_empty()
    }

    fn reduce(&self, residual: &'a str, word: &'a str) -> Option<&'a str> {
        if word.is_empty() {
            return None;
        }
        residual.strip_prefix(word)
    }

    fn attach(&self, word: &'a str, combination: &mut Vec<&'a str>) {
        combination.insert(0, word);
    }

    fn extent(&self) -> usize {
        self.target.len()
    }

    fn advance(&self, index: usize, word: &'a str) -> Option<usize> {
        if word.is_empty() {
            return None;
        }
        self.target
            .get(index..)
            .filter(|rest| rest.starts_with(word))
            .map(|_| index + word.len())
    }
}
