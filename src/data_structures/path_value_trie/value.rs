// Copyright (c) 2025 Kilo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Payload capability and the ranking order shared by tries and groups.

use std::cmp::Ordering;

/// Scores closer than this are treated as equal.
pub const SCORE_EPSILON: f32 = 1e-6;

/// Capability every payload stored in a [`PathValueTrie`](super::PathValueTrie) must expose.
///
/// The query text identifies a payload within a node and must be non-empty.
/// The score ranks payloads; higher is better.
pub trait Value {
    /// Query text used as the identity key within a node.
    fn query(&self) -> &str;

    /// Ranking score.
    fn score(&self) -> f32;
}

/// Compares two scores with epsilon-tolerant equality.
///
/// Returns `Equal` when the absolute difference is below [`SCORE_EPSILON`],
/// `Less` when `a < b`, and `Greater` otherwise.
pub fn score_cmp(a: f32, b: f32) -> Ordering {
    if (a - b).abs() < SCORE_EPSILON {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Best-first ordering of two payloads.
///
/// `Less` means `a` ranks ahead of `b`. A higher score ranks ahead; on
/// (epsilon-)equal scores the lexicographically greater query text ranks ahead.
/// Sorting ascending by this ordering yields a best-first list.
pub fn rank_order<A, B>(a: &A, b: &B) -> Ordering
where
    A: Value + ?Sized,
    B: Value + ?Sized,
{
    match score_cmp(a.score(), b.score()) {
        Ordering::Greater => Ordering::Less,
        Ordering::Less => Ordering::Greater,
        Ordering::Equal => b.query().cmp(a.query()),
    }
}

/// Returns `true` when `a` ranks strictly ahead of `b`.
#[inline]
pub fn ranks_ahead<A, B>(a: &A, b: &B) -> bool
where
    A: Value + ?Sized,
    B: Value + ?Sized,
{
    rank_order(a, b) == Ordering::Less
}
