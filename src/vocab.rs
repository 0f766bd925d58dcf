use indexmap::IndexMap;

use crate::types::Term;

/// One ranked vocabulary entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermCount {
    /// The term itself (single word or extracted phrase).
    pub term: Term,
    /// Occurrences across the whole corpus.
    pub count: usize,
}

/// Corpus vocabulary ordered by descending frequency.
///
/// Single words and multi-word phrases share one namespace. Equal counts keep
/// first-occurrence order from the input stream, so rankings are stable
/// across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VocabularyRanking {
    entries: Vec<TermCount>,
}

impl VocabularyRanking {
    /// Count every distinct term in `terms` and rank by descending count.
    pub fn rank(terms: &[Term]) -> Self {
        let mut counts: IndexMap<Term, usize> = IndexMap::new();
        for term in terms {
            if let Some(slot) = counts.get_mut(term.as_str()) {
                *slot += 1;
            } else {
                counts.insert(term.clone(), 1);
            }
        }
        let mut entries: Vec<TermCount> = counts
            .into_iter()
            .map(|(term, count)| TermCount { term, count })
            .collect();
        // Stable sort over insertion order: equal counts keep first-seen order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ranking holds no terms.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `limit` highest-ranked entries, clamped to the ranking size.
    pub fn top(&self, limit: usize) -> &[TermCount] {
        &self.entries[..limit.min(self.entries.len())]
    }

    /// Occurrence count for `term`, if it appeared at all.
    pub fn count(&self, term: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.term == term)
            .map(|entry| entry.count)
    }

    /// Iterate entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &TermCount> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_orders_by_descending_count() {
        let terms = to_terms(["axle", "brake", "axle", "cab", "brake", "axle"]);
        let ranking = VocabularyRanking::rank(&terms);
        let ordered: Vec<(&str, usize)> = ranking
            .iter()
            .map(|entry| (entry.term.as_str(), entry.count))
            .collect();
        assert_eq!(ordered, vec![("axle", 3), ("brake", 2), ("cab", 1)]);
    }

    #[test]
    fn rank_breaks_ties_by_first_appearance() {
        let terms = to_terms(["winch", "derrick", "winch", "derrick", "mast"]);
        let ranking = VocabularyRanking::rank(&terms);
        let ordered: Vec<&str> = ranking.iter().map(|entry| entry.term.as_str()).collect();
        assert_eq!(ordered, vec!["winch", "derrick", "mast"]);
    }

    #[test]
    fn counts_never_increase_down_the_ranking() {
        let terms = to_terms(["a", "b", "c", "b", "c", "c", "d", "a"]);
        let ranking = VocabularyRanking::rank(&terms);
        let counts: Vec<usize> = ranking.iter().map(|entry| entry.count).collect();
        assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn phrases_and_words_share_one_namespace() {
        let terms = to_terms(["toy hauler", "winch", "toy hauler"]);
        let ranking = VocabularyRanking::rank(&terms);
        assert_eq!(ranking.count("toy hauler"), Some(2));
        assert_eq!(ranking.count("winch"), Some(1));
        assert_eq!(ranking.count("hauler"), None);
    }

    #[test]
    fn top_clamps_to_the_vocabulary_size() {
        let terms = to_terms(["one", "two"]);
        let ranking = VocabularyRanking::rank(&terms);
        assert_eq!(ranking.top(10).len(), 2);
        assert_eq!(ranking.top(1).len(), 1);
        assert_eq!(ranking.top(0).len(), 0);
    }

    #[test]
    fn empty_stream_ranks_nothing() {
        let ranking = VocabularyRanking::rank(&[]);
        assert!(ranking.is_empty());
        assert_eq!(ranking.top(5).len(), 0);
    }

    fn to_terms<const N: usize>(words: [&str; N]) -> Vec<Term> {
        words.iter().map(|word| word.to_string()).collect()
    }
}
