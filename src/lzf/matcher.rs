//! Match finder: turns a byte sequence into an ordered token sequence.
//!
//! Greedy left-to-right scan over the input. At each position the 3-byte
//! prefix is looked up in an incremental index of prior occurrences; the
//! longest match within the encodable window wins, with ties settled in
//! favor of the nearest occurrence (smaller distances cost nothing extra to
//! encode but keep the offset field small). Positions covered by an emitted
//! token, including the interior of a match, are fed back into the index so
//! later lookups can reference them.

use std::collections::{HashMap, VecDeque};

use super::tokens::Token;
use super::{MAX_DISTANCE, MAX_MATCH, MIN_MATCH};

/// Index key width: the 3-byte prefix at each input position
const TRIPLE: usize = 3;

/// Maps each 3-byte prefix to the input positions where it has occurred,
/// oldest first.
///
/// Buckets are pruned lazily: a lookup at position `pos` drops entries that
/// have aged out of the back-reference window, so per-key memory stays
/// bounded by the window size without any eager sweep.
struct TripleIndex {
    buckets: HashMap<[u8; 3], VecDeque<u32>>,
}

impl TripleIndex {
    fn new() -> Self {
        Self { buckets: HashMap::new() }
    }

    fn insert(&mut self, key: [u8; 3], pos: usize) {
        self.buckets.entry(key).or_default().push_back(pos as u32);
    }

    /// Candidate positions for `key` still within reach of `pos`, or None
    /// if every recorded occurrence has aged out.
    fn candidates(&mut self, key: [u8; 3], pos: usize) -> Option<&VecDeque<u32>> {
        let bucket = self.buckets.get_mut(&key)?;
        while let Some(&front) = bucket.front() {
            if pos - front as usize > MAX_DISTANCE {
                bucket.pop_front();
            } else {
                break;
            }
        }
        if bucket.is_empty() {
            None
        } else {
            Some(bucket)
        }
    }
}

#[inline]
fn triple_at(data: &[u8], pos: usize) -> [u8; 3] {
    [data[pos], data[pos + 1], data[pos + 2]]
}

/// Length of the common prefix of `data[from..]` and `data[at..]`, capped at
/// `limit`. The match source may run past `at` into bytes the match itself
/// produces; that is the usual LZ77 overlap and the decoder handles it.
#[inline]
fn match_length(data: &[u8], from: usize, at: usize, limit: usize) -> usize {
    let mut len = 0;
    while len < limit && data[from + len] == data[at + len] {
        len += 1;
    }
    len
}

/// Tokenize `data` into literals and back-references covering it exactly once.
///
/// The consumed sizes of the returned tokens always sum to `data.len()`.
pub fn tokenize(data: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut index = TripleIndex::new();

    let mut i = 0;
    while i < data.len() {
        if i + TRIPLE > data.len() {
            // Too little lookahead for a match key; flush the tail as literals
            for &byte in &data[i..] {
                tokens.push(Token::Literal(byte));
            }
            break;
        }

        let key = triple_at(data, i);
        let limit = MAX_MATCH.min(data.len() - i);

        let best = index.candidates(key, i).map(|bucket| {
            let mut best_pos = 0;
            let mut best_len = 0;
            // Newest candidates first, so equal lengths settle on the
            // smallest distance
            for &p in bucket.iter().rev() {
                let len = match_length(data, p as usize, i, limit);
                if len > best_len {
                    best_len = len;
                    best_pos = p as usize;
                    if best_len == limit {
                        break;
                    }
                }
            }
            (best_pos, best_len)
        });

        let consumed = match best {
            Some((p, len)) if len >= MIN_MATCH => {
                tokens.push(Token::Backref { length: len as u16, distance: (i - p) as u16 });
                len
            }
            _ => {
                tokens.push(Token::Literal(data[i]));
                1
            }
        };

        // Register every triple the consumed run exposes, interior positions
        // of a match included; skipping those weakens repetitive inputs
        let last_key_pos = data.len() - (TRIPLE - 1);
        for pos in i..(i + consumed).min(last_key_pos) {
            index.insert(triple_at(data, pos), pos);
        }

        i += consumed;
    }

    tokens
}
