// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Segment detection and majority voting.
//!
//! Raw samples are shifted right, then split into segments at separator
//! colours. Runs of separators never open empty segments, and the last open
//! segment is flushed whether or not a separator follows it. Each segment
//! resolves to the colour seen most often; ties go to the colour seen first
//! within that segment.

use std::collections::HashMap;

use log::trace;

use crate::hex::HexValue;
use crate::palette::is_separator;
use crate::shift::shift_right;

/// Per-segment tally with insertion order kept for tie-breaking.
#[derive(Debug, Default, Clone)]
struct Histogram {
    index: HashMap<HexValue, usize>,
    tallies: Vec<(HexValue, u32)>,
}

impl Histogram {
    fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    fn add(&mut self, value: HexValue) {
        match self.index.get(&value) {
            Some(&slot) => self.tallies[slot].1 += 1,
            None => {
                self.index.insert(value, self.tallies.len());
                self.tallies.push((value, 1));
            }
        }
    }

    /// Strict `>` keeps the earliest value on equal counts.
    fn resolve(self) -> SegmentVote {
        let mut winner = self.tallies[0];
        let mut tied = false;
        let mut total = 0;
        for &(value, count) in &self.tallies {
            total += count;
            if count > winner.1 {
                winner = (value, count);
                tied = false;
            } else if count == winner.1 && value != winner.0 {
                tied = true;
            }
        }
        SegmentVote {
            value: winner.0,
            votes: winner.1,
            total,
            distinct: self.tallies.len(),
            tied,
        }
    }
}

/// Outcome of voting on one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentVote {
    /// Winning (unshifted) colour.
    pub value: HexValue,
    /// Samples that voted for the winner.
    pub votes: u32,
    /// All data samples in the segment.
    pub total: u32,
    /// Number of distinct colours observed.
    pub distinct: usize,
    /// Another colour reached the winner's count and lost on order.
    pub tied: bool,
}

impl SegmentVote {
    /// More than one colour was observed.
    pub fn is_contested(&self) -> bool {
        self.distinct > 1
    }
}

/// Split `samples` into segments and vote on each.
pub fn vote_segments(samples: &[HexValue]) -> Vec<SegmentVote> {
    let mut segments = Vec::new();
    let mut current = Histogram::default();

    for &sample in samples {
        let value = shift_right(sample);
        if is_separator(value) {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current).resolve());
            }
        } else {
            current.add(value);
        }
    }
    if !current.is_empty() {
        segments.push(current.resolve());
    }

    trace!("{} samples -> {} segments", samples.len(), segments.len());
    segments
}
