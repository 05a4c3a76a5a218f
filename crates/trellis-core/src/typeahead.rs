//! Incremental typeahead search over an ordered label sequence.
//!
//! Characters accumulate into a case-folded buffer matched as a
//! substring against every label. A character that would leave zero
//! matches is rejected outright: the buffer reverts, the failed query is
//! recorded, and the match set survives untouched. Backspace relaxes the
//! query, which can only ever grow the match set. Match indices refer to
//! positions in the label sequence the caller supplied and are
//! invalidated by any structural change, so callers clear the state on
//! expand/collapse/rebuild.

use unicode_segmentation::UnicodeSegmentation;

/// Result of feeding a character or backspace into [`Typeahead`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The buffer matched; `index` is the active match position in the
    /// label sequence the caller should move the cursor to.
    Matched {
        /// Index of the active match in the searched sequence.
        index: usize,
    },
    /// The extended buffer had zero matches and was rejected; prior
    /// state is preserved bit-for-bit apart from the recorded query.
    NoMatches {
        /// The query that failed, for "no matches for X" narration.
        query: String,
    },
    /// The buffer emptied and the whole search state was cleared.
    Cleared,
    /// Nothing to do (backspace with no active search).
    Inactive,
}

/// Incremental substring search state for one menu session.
#[derive(Debug, Clone, Default)]
pub struct Typeahead {
    buffer: String,
    matches: Vec<usize>,
    match_cursor: usize,
    last_failed_query: Option<String>,
}

impl Typeahead {
    /// Creates an empty search state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a search buffer is currently active.
    pub fn is_active(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// The accumulated, case-folded query.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current match indices, ascending by sequence position.
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// The most recent query that produced zero matches, if any.
    pub fn last_failed_query(&self) -> Option<&str> {
        self.last_failed_query.as_deref()
    }

    /// Drops all search state. Called on any structural change to the
    /// tree, since match indices do not survive re-flattening.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.matches.clear();
        self.match_cursor = 0;
        self.last_failed_query = None;
    }

    /// Appends a character to the query and recomputes matches.
    ///
    /// On zero matches the character is rejected rather than resetting
    /// the search: `buffer`, `matches`, and the match cursor keep their
    /// prior values and only the failed query is recorded. On success
    /// the active match is the first one at or after `cursor`, wrapping
    /// to the first match overall.
    pub fn process_char<S: AsRef<str>>(
        &mut self,
        c: char,
        labels: &[S],
        cursor: usize,
    ) -> SearchOutcome {
        let mut candidate = self.buffer.clone();
        candidate.extend(c.to_lowercase());
        let found = Self::collect_matches(&candidate, labels);
        if found.is_empty() {
            tracing::trace!(
                target: crate::logging::targets::TYPEAHEAD,
                query = %candidate,
                "typeahead query rejected"
            );
            self.last_failed_query = Some(candidate.clone());
            return SearchOutcome::NoMatches { query: candidate };
        }
        self.buffer = candidate;
        self.matches = found;
        self.last_failed_query = None;
        self.activate_from(cursor)
    }

    /// Removes the last grapheme from the query.
    ///
    /// An emptied buffer clears the state entirely; otherwise matches
    /// are recomputed against the shorter query (a strict prefix
    /// relaxation, so the match set can only grow or stay the same) and
    /// the active match repositions relative to `cursor`.
    pub fn process_backspace<S: AsRef<str>>(&mut self, labels: &[S], cursor: usize) -> SearchOutcome {
        if self.buffer.is_empty() {
            return SearchOutcome::Inactive;
        }
        if let Some(last) = self.buffer.graphemes(true).next_back() {
            let cut = self.buffer.len() - last.len();
            self.buffer.truncate(cut);
        }
        if self.buffer.is_empty() {
            self.clear();
            return SearchOutcome::Cleared;
        }
        self.matches = Self::collect_matches(&self.buffer, labels);
        if self.matches.is_empty() {
            // Only reachable if the labels shifted under us without the
            // caller clearing the search; treat it as a full reset.
            self.clear();
            return SearchOutcome::Cleared;
        }
        self.last_failed_query = None;
        self.activate_from(cursor)
    }

    /// The next match strictly after `current`, wrapping to the first.
    pub fn next_match(&self, current: usize) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        self.matches
            .iter()
            .copied()
            .find(|&m| m > current)
            .or_else(|| self.matches.first().copied())
    }

    /// The previous match strictly before `current`, wrapping to the
    /// last.
    pub fn previous_match(&self, current: usize) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        self.matches
            .iter()
            .rev()
            .copied()
            .find(|&m| m < current)
            .or_else(|| self.matches.last().copied())
    }

    fn activate_from(&mut self, cursor: usize) -> SearchOutcome {
        let pos = self
            .matches
            .iter()
            .position(|&m| m >= cursor)
            .unwrap_or(0);
        self.match_cursor = pos;
        SearchOutcome::Matched {
            index: self.matches[pos],
        }
    }

    fn collect_matches<S: AsRef<str>>(query: &str, labels: &[S]) -> Vec<usize> {
        labels
            .iter()
            .enumerate()
            .filter(|(_, label)| label.as_ref().to_lowercase().contains(query))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [&str; 3] = ["Apple", "Banana", "Apricot"];

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let mut search = Typeahead::new();
        assert_eq!(
            search.process_char('N', &LABELS, 0),
            SearchOutcome::Matched { index: 1 }
        );
        assert_eq!(search.buffer(), "n");
        assert_eq!(search.matches(), &[1]);
    }

    #[test]
    fn test_active_match_starts_at_or_after_cursor() {
        let mut search = Typeahead::new();
        // "a" hits every label; from cursor 1 the active match is 1.
        assert_eq!(
            search.process_char('a', &LABELS, 1),
            SearchOutcome::Matched { index: 1 }
        );
        // From past the last match it wraps to the first.
        let mut search = Typeahead::new();
        assert_eq!(
            search.process_char('p', &LABELS, 1),
            SearchOutcome::Matched { index: 2 }
        );
        assert_eq!(search.matches(), &[0, 2]);
        let mut search = Typeahead::new();
        search.process_char('p', &LABELS, 0);
        assert_eq!(
            search.process_char('r', &LABELS, 0),
            SearchOutcome::Matched { index: 2 }
        );
    }

    #[test]
    fn test_narrowing_never_grows_matches() {
        let mut search = Typeahead::new();
        search.process_char('a', &LABELS, 0);
        let broad = search.matches().to_vec();
        search.process_char('p', &LABELS, 0);
        let narrow = search.matches().to_vec();
        assert!(narrow.iter().all(|m| broad.contains(m)));
        assert_eq!(search.buffer(), "ap");
        assert_eq!(narrow, vec![0, 2]);
    }

    #[test]
    fn test_match_cycling_wraps_both_ways() {
        let mut search = Typeahead::new();
        search.process_char('a', &LABELS, 0);
        search.process_char('p', &LABELS, 0);
        // Matches are [0, 2].
        assert_eq!(search.next_match(0), Some(2));
        assert_eq!(search.next_match(2), Some(0));
        assert_eq!(search.previous_match(0), Some(2));
        assert_eq!(search.previous_match(2), Some(0));
        assert_eq!(search.next_match(1), Some(2));
    }

    #[test]
    fn test_rejected_character_preserves_state() {
        let labels = ["Apple", "Banana"];
        let mut search = Typeahead::new();
        assert_eq!(
            search.process_char('z', &labels, 0),
            SearchOutcome::NoMatches {
                query: "z".to_string()
            }
        );
        assert_eq!(search.buffer(), "");
        assert!(search.matches().is_empty());
        assert_eq!(search.last_failed_query(), Some("z"));
        assert!(!search.is_active());

        // Rejection after a committed buffer keeps the old matches.
        search.process_char('a', &labels, 0);
        let matches = search.matches().to_vec();
        assert_eq!(
            search.process_char('z', &labels, 0),
            SearchOutcome::NoMatches {
                query: "az".to_string()
            }
        );
        assert_eq!(search.buffer(), "a");
        assert_eq!(search.matches(), matches.as_slice());
        assert_eq!(search.last_failed_query(), Some("az"));
    }

    #[test]
    fn test_backspace_relaxes_and_then_clears() {
        let mut search = Typeahead::new();
        search.process_char('a', &LABELS, 0);
        search.process_char('p', &LABELS, 0);
        let narrow = search.matches().to_vec();

        assert_eq!(
            search.process_backspace(&LABELS, 0),
            SearchOutcome::Matched { index: 0 }
        );
        assert_eq!(search.buffer(), "a");
        assert!(narrow.iter().all(|m| search.matches().contains(m)));

        assert_eq!(search.process_backspace(&LABELS, 0), SearchOutcome::Cleared);
        assert!(!search.is_active());
        assert_eq!(search.process_backspace(&LABELS, 0), SearchOutcome::Inactive);
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        let labels = ["Café au lait", "Tea"];
        let mut search = Typeahead::new();
        for c in "café".chars() {
            search.process_char(c, &labels, 0);
        }
        assert_eq!(search.buffer(), "café");
        search.process_backspace(&labels, 0);
        assert_eq!(search.buffer(), "caf");
    }
}
