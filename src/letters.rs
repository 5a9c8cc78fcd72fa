//! Letters shared by every word of a word list.
//!
//! Two semantics are available. [`common_letters`] treats each word as a multiset, so a
//! letter repeated in every word is repeated in the result. [`present_letters`] only asks
//! whether a letter occurs somewhere in every word. In both cases the first word is the
//! reference: the result follows its order.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::InvalidInputError;

/// Occurrence count of each character in a word.
pub type FrequencyMap = HashMap<char, usize>;

pub fn frequencies(word: &str) -> FrequencyMap {
    word.chars().counts()
}

/// Multiset intersection of `words`, ordered by the first word.
///
/// Each character appears `min(count in w)` times over all words `w`, at the positions of
/// its first occurrences in the first word. A single word is returned as is, duplicates
/// included.
pub fn common_letters<S>(words: &[S]) -> Vec<char>
where
    S: AsRef<str>,
{
    let (reference, others) = match words {
        [] => return Vec::new(),
        [only] => return only.as_ref().chars().collect(),
        [first, rest @ ..] => (first.as_ref(), rest),
    };

    let others = others
        .iter()
        .map(|w| frequencies(w.as_ref()))
        .collect::<Vec<_>>();

    // How many copies of each reference character survive the intersection. Characters
    // missing from any word are left out entirely.
    let limits: FrequencyMap = frequencies(reference)
        .into_iter()
        .map(|(c, n)| {
            let limit = others
                .iter()
                .map(|m| m.get(&c).copied().unwrap_or(0))
                .fold(n, usize::min);
            (c, limit)
        })
        .filter(|&(_, limit)| limit > 0)
        .collect();

    trace!(
        words = words.len(),
        distinct = limits.len(),
        "intersected frequency maps"
    );

    let mut emitted = FrequencyMap::with_capacity(limits.len());
    reference
        .chars()
        .filter(|c| match limits.get(c) {
            Some(&limit) => {
                let seen = emitted.entry(*c).or_insert(0);
                if *seen < limit {
                    *seen += 1;
                    true
                } else {
                    false
                }
            }
            None => false,
        })
        .collect()
}

/// Distinct characters of the first word that occur at least once in every other word.
///
/// Repetition is ignored: every character is reported at most once, in the order of its
/// first occurrence in the first word.
pub fn present_letters<S>(words: &[S]) -> Vec<char>
where
    S: AsRef<str>,
{
    let Some((reference, others)) = words.split_first() else {
        return Vec::new();
    };

    let others = others
        .iter()
        .map(|w| w.as_ref().chars().collect::<HashSet<_>>())
        .collect::<Vec<_>>();

    reference
        .as_ref()
        .chars()
        .unique()
        .filter(|c| others.iter().all(|set| set.contains(c)))
        .collect()
}

/// Selects how letters are intersected.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum Semantics {
    /// Respect how often a letter repeats, see [`common_letters`].
    #[default]
    Multiset,
    /// Only check that a letter occurs in every word, see [`present_letters`].
    Presence,
}

impl Semantics {
    pub fn extract<S>(self, words: &[S]) -> Vec<char>
    where
        S: AsRef<str>,
    {
        match self {
            Semantics::Multiset => common_letters(words),
            Semantics::Presence => present_letters(words),
        }
    }
}

impl FromStr for Semantics {
    type Err = String;

    fn from_str(s: &str) -> Result<Semantics, String> {
        match s {
            "multiset" => Ok(Semantics::Multiset),
            "presence" => Ok(Semantics::Presence),
            _ => Err(format!(
                "unknown semantics {:?}, expected \"multiset\" or \"presence\"",
                s
            )),
        }
    }
}

impl fmt::Display for Semantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Semantics::Multiset => "multiset",
            Semantics::Presence => "presence",
        })
    }
}

/// Like [`Semantics::extract`], for words that have not been checked to be UTF-8 yet.
///
/// Every word is validated before anything is computed. The first invalid word fails the
/// whole call.
pub fn try_common_letters<B>(
    words: &[B],
    semantics: Semantics,
) -> Result<Vec<char>, InvalidInputError>
where
    B: AsRef<[u8]>,
{
    let words = words
        .iter()
        .enumerate()
        .map(|(index, w)| {
            std::str::from_utf8(w.as_ref()).map_err(|e| {
                debug!(index, error = %e, "rejecting word");
                InvalidInputError::new(index, e)
            })
        })
        .collect::<Result<Vec<&str>, _>>()?;

    Ok(semantics.extract(&words))
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rayon::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty_input() {
        let words: [&str; 0] = [];
        assert_eq!(common_letters(&words), chars(""));
        assert_eq!(present_letters(&words), chars(""));
    }

    #[test]
    fn test_single_empty_word() {
        assert_eq!(common_letters(&[""]), chars(""));
        assert_eq!(present_letters(&[""]), chars(""));
    }

    #[test]
    fn test_single_word_keeps_duplicates() {
        assert_eq!(common_letters(&["hello"]), chars("hello"));
    }

    #[test]
    fn test_common_letters() {
        let cases: &[(&[&str], &str)] = &[
            (&["hello", "heath", "heaps"], "he"),
            (&["abc", "def", "ghi"], ""),
            (&["ace", "ace", "ace"], "ace"),
            (&["abca", "bacb", "abac"], "abc"),
            (&["xyz", "uvw", "rst"], ""),
            (&["abcdef", "abdfgh", "abdjkl"], "abd"),
        ];

        for (words, expected) in cases {
            assert_eq!(common_letters(words), chars(expected), "words: {:?}", words);
        }
    }

    #[test]
    fn test_repeated_letters() {
        assert_eq!(common_letters(&["aab", "aa"]), chars("aa"));
        assert_eq!(common_letters(&["aab", "ab"]), chars("ab"));
        assert_eq!(common_letters(&["banana", "ananas"]), chars("anana"));
        // The reference decides the order, later words only bound the counts.
        assert_eq!(common_letters(&["abab", "bbaa", "ba"]), chars("ab"));
        assert_eq!(common_letters(&["bella", "label", "roller"]), chars("ell"));
    }

    #[test]
    fn test_empty_word_among_others() {
        assert_eq!(common_letters(&["abc", "", "cba"]), chars(""));
        assert_eq!(common_letters(&["", "abc"]), chars(""));
        assert_eq!(present_letters(&["abc", ""]), chars(""));
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(common_letters(&["żółw", "łów", "wół"]), chars("ółw"));
        assert_eq!(common_letters(&["日本日", "日日"]), chars("日日"));
    }

    #[test]
    fn test_no_case_folding() {
        assert_eq!(common_letters(&["Aa", "a"]), chars("a"));
    }

    #[test]
    fn test_present_letters() {
        assert_eq!(present_letters(&["aab", "aa"]), chars("a"));
        assert_eq!(present_letters(&["hello", "heath", "heaps"]), chars("he"));
        assert_eq!(present_letters(&["hello"]), chars("helo"));
        assert_eq!(present_letters(&["abca", "bacb", "abac"]), chars("abc"));
    }

    #[test]
    fn test_semantics() {
        assert_eq!(Semantics::default(), Semantics::Multiset);
        assert_eq!("multiset".parse::<Semantics>(), Ok(Semantics::Multiset));
        assert_eq!("presence".parse::<Semantics>(), Ok(Semantics::Presence));
        assert!("set".parse::<Semantics>().is_err());
        assert_eq!(Semantics::Presence.to_string(), "presence");

        assert_eq!(Semantics::Multiset.extract(&["aab", "aa"]), chars("aa"));
        assert_eq!(Semantics::Presence.extract(&["aab", "aa"]), chars("a"));
    }

    #[test]
    fn test_frequencies() {
        let map = frequencies("abca");
        assert_eq!(map.len(), 3);
        assert_eq!(map[&'a'], 2);
        assert_eq!(map[&'b'], 1);
        assert_eq!(map[&'c'], 1);
        assert!(frequencies("").is_empty());
    }

    #[test]
    fn test_try_common_letters() {
        let words: [&[u8]; 2] = [b"hello", b"heath"];
        assert_eq!(
            try_common_letters(&words, Semantics::Multiset),
            Ok(chars("he"))
        );

        let words: [&[u8]; 0] = [];
        assert_eq!(try_common_letters(&words, Semantics::Multiset), Ok(chars("")));
    }

    #[test]
    fn test_try_common_letters_invalid_utf8() {
        let words: [&[u8]; 4] = [b"abc", b"a\xffc", b"\xc3", b"abc"];
        let err = try_common_letters(&words, Semantics::Multiset).unwrap_err();

        assert_eq!(err.index, 1);
        assert_eq!(err.source.valid_up_to(), 1);
        assert_eq!(err.to_string(), "word 1 is not valid UTF-8");

        // A single word is still validated.
        let words: [&[u8]; 1] = [b"\xff"];
        let err = try_common_letters(&words, Semantics::Presence).unwrap_err();
        assert_eq!(err.index, 0);
    }

    #[test]
    fn test_concurrent_calls() {
        let words = ["hello", "heath", "heaps"];
        let results = (0..64)
            .into_par_iter()
            .map(|_| common_letters(&words))
            .collect::<Vec<_>>();

        assert!(results.iter().all(|r| r == &chars("he")));
    }

    fn count(word: &str, c: char) -> usize {
        word.chars().filter(|&x| x == c).count()
    }

    fn is_subsequence(needle: &[char], haystack: &str) -> bool {
        let mut haystack = haystack.chars();
        needle.iter().all(|c| haystack.any(|h| h == *c))
    }

    proptest! {
        #[test]
        fn prop_counts_are_minimum(words in prop::collection::vec("[a-e]{0,8}", 1..6)) {
            let result = common_letters(&words);
            let result = result.iter().collect::<String>();

            for c in 'a'..='e' {
                let expected = words.iter().map(|w| count(w, c)).min().unwrap_or(0);
                prop_assert_eq!(count(&result, c), expected, "letter {:?}", c);
            }
        }

        #[test]
        fn prop_result_follows_reference(words in prop::collection::vec("[a-e]{0,8}", 1..6)) {
            let result = common_letters(&words);
            prop_assert!(is_subsequence(&result, &words[0]));
        }

        #[test]
        fn prop_presence_is_distinct_multiset(words in prop::collection::vec("[a-e]{0,8}", 1..6)) {
            let expected = common_letters(&words).into_iter().unique().collect::<Vec<_>>();
            prop_assert_eq!(present_letters(&words), expected);
        }
    }
}
