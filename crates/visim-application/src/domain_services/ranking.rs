//! Bounded top-K result collection
//!
//! Accumulates similarity matches during a catalog scan and yields the K
//! best in descending score order. Uses a size-K min-heap so a scan over N
//! candidates costs O(N log K) instead of the O(N log N) of collecting
//! everything and sorting.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use visim_domain::value_objects::SimilarityMatch;

/// Heap entry carrying the insertion sequence number for tie-breaking
///
/// Uses reverse ordering so `BinaryHeap` acts as a min-heap: the entry at
/// the top is the current worst (lowest score; among equal scores, the one
/// encountered latest).
struct ScoredEntry {
    score: f32,
    seq: u64,
    matched: SimilarityMatch,
}

impl PartialEq for ScoredEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredEntry {}

impl Ord for ScoredEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse score ordering for min-heap behavior; on equal scores the
        // later insertion is "worse" so encounter order wins at the boundary
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for ScoredEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Bounded, ordered collection of similarity matches
///
/// Holds at most `capacity` matches. Ranking rules:
///
/// - descending score
/// - exact score ties preserve insertion (catalog encounter) order
///
/// The output is identical to collecting every match, stable-sorting by
/// descending score, and truncating to `capacity` - the cheaper heap only
/// changes the cost, never the order. Exists for the duration of one query.
pub struct RankedResultSet {
    capacity: usize,
    next_seq: u64,
    heap: BinaryHeap<ScoredEntry>,
}

impl RankedResultSet {
    /// Create a result set that retains at most `capacity` matches
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            next_seq: 0,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1)),
        }
    }

    /// Offer a match to the collection
    ///
    /// Kept when the set is not yet full or when it strictly beats the
    /// current worst entry. An incoming match that exactly ties the worst
    /// entry's score is dropped: the earlier-encountered entry wins.
    pub fn push(&mut self, matched: SimilarityMatch) {
        let entry = ScoredEntry {
            score: matched.score,
            seq: self.next_seq,
            matched,
        };
        self.next_seq += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(entry);
        } else if let Some(worst) = self.heap.peek() {
            if entry.score > worst.score {
                self.heap.pop();
                self.heap.push(entry);
            }
        }
    }

    /// Number of matches currently retained
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no match has been retained
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consume the set, yielding matches ranked best-first
    pub fn into_ranked(self) -> Vec<SimilarityMatch> {
        let mut entries = self.heap.into_vec();
        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        entries.into_iter().map(|e| e.matched).collect()
    }
}
