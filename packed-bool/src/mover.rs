// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Bulk moves of bit ranges between packed boolean buffers
//!
//! A range is transferred one destination word at a time. When source and
//! destination share the same phase within their words, each destination word is
//! a plain load of a source word. Otherwise it is assembled from two adjacent
//! source words shifted into place. Only the first and last destination words are
//! read-modify-write, every word in between is overwritten whole.

use std::cmp::Ordering;
use std::ops::Range;

use tracing::{debug, trace};

use crate::bit_util::{lead_mask, merge, split_index, trail_mask};
use crate::{BitRange, BitWord, PackedBoolBuffer, PackedBoolError, Result};

/// Moves the bits of `source` into `dest`, starting at bit `dest_begin`
///
/// On success, for every `k < source.len()` the bit `dest_begin + k` of `dest` holds
/// the value of bit `source.begin() + k` of the source buffer. Bits of `dest` outside
/// `[dest_begin, dest_begin + source.len())` are left untouched.
///
/// To move bits within a single buffer, where the ranges may overlap, use
/// [`PackedBoolBuffer::move_within`].
///
/// # Errors
///
/// * [`PackedBoolError::InvalidRange`] if `source.begin() > source.end()`
/// * [`PackedBoolError::OutOfRange`] if the source range exceeds its buffer, or the
///   destination run exceeds `dest`
///
/// `dest` is not modified when an error is returned.
///
/// # Example
/// ```
/// # use packed_bool::{move_range, PackedBoolBuffer};
/// let source = PackedBoolBuffer::<u32>::from(vec![true, false, true, true]);
/// let mut dest = PackedBoolBuffer::<u32>::new(40);
/// move_range(source.range(1, 4), &mut dest, 30).unwrap();
/// assert_eq!(
///     dest.iter().skip(29).take(5).collect::<Vec<_>>(),
///     vec![false, false, true, true, false]
/// );
/// ```
pub fn move_range<W: BitWord>(
    source: BitRange<'_, W>,
    dest: &mut PackedBoolBuffer<W>,
    dest_begin: usize,
) -> Result<()> {
    let buffer = source.buffer();
    let len = validate(
        source.begin(),
        source.end(),
        buffer.len(),
        dest_begin,
        dest.len(),
    )
    .inspect_err(|e| debug!(error = %e, "rejected bit range move"))?;
    if len == 0 {
        return Ok(());
    }

    let mut store = Disjoint {
        source: buffer,
        dest,
    };
    move_bits(
        &mut store,
        source.begin(),
        dest_begin,
        len,
        Direction::Forward,
    );
    Ok(())
}

impl<W: BitWord> PackedBoolBuffer<W> {
    /// Moves the bits in `source` to the position starting at `dest_begin` within
    /// this buffer
    ///
    /// The ranges may overlap: the result is as if every bit of `source` was read
    /// before any bit of the destination run was written.
    ///
    /// # Errors
    ///
    /// * [`PackedBoolError::InvalidRange`] if `source.start > source.end`
    /// * [`PackedBoolError::OutOfRange`] if either range exceeds [`Self::len`]
    ///
    /// The buffer is not modified when an error is returned.
    ///
    /// # Example
    /// ```
    /// # use packed_bool::PackedBoolBuffer;
    /// let mut buffer = PackedBoolBuffer::<u8>::from(vec![true, true, false, true, false, false]);
    /// buffer.move_within(0..4, 2).unwrap();
    /// assert_eq!(
    ///     buffer.iter().collect::<Vec<_>>(),
    ///     vec![true, true, true, true, false, true]
    /// );
    /// ```
    pub fn move_within(&mut self, source: Range<usize>, dest_begin: usize) -> Result<()> {
        let len = validate(source.start, source.end, self.len(), dest_begin, self.len())
            .inspect_err(|e| debug!(error = %e, "rejected bit range move"))?;
        if len == 0 || source.start == dest_begin {
            return Ok(());
        }

        // Sweep away from the overlap so every source word is read before it is written
        let direction = if dest_begin > source.start {
            Direction::Backward
        } else {
            Direction::Forward
        };
        let mut store = InPlace { buffer: self };
        move_bits(&mut store, source.start, dest_begin, len, direction);
        Ok(())
    }
}

/// Checks a move of `[begin, end)` to `dest_begin`, returning its length in bits
fn validate(
    begin: usize,
    end: usize,
    source_len: usize,
    dest_begin: usize,
    dest_len: usize,
) -> Result<usize> {
    if begin > end {
        return Err(PackedBoolError::InvalidRange { begin, end });
    }
    if end > source_len {
        return Err(PackedBoolError::OutOfRange {
            index: end,
            len: source_len,
        });
    }
    let len = end - begin;
    match dest_begin.checked_add(len) {
        Some(dest_end) if dest_end <= dest_len => Ok(len),
        _ => Err(PackedBoolError::OutOfRange {
            index: dest_begin.saturating_add(len),
            len: dest_len,
        }),
    }
}

/// Word level access to the source and destination of a move
trait WordStore<W> {
    fn source(&self, index: usize) -> W;

    fn dest(&self, index: usize) -> W;

    fn store(&mut self, index: usize, word: W);
}

/// A move between two distinct buffers
struct Disjoint<'a, W> {
    source: &'a PackedBoolBuffer<W>,
    dest: &'a mut PackedBoolBuffer<W>,
}

impl<W: BitWord> WordStore<W> for Disjoint<'_, W> {
    #[inline]
    fn source(&self, index: usize) -> W {
        self.source.word_at(index)
    }

    #[inline]
    fn dest(&self, index: usize) -> W {
        self.dest.word_at(index)
    }

    #[inline]
    fn store(&mut self, index: usize, word: W) {
        self.dest.set_word_at(index, word)
    }
}

/// A move within one buffer
struct InPlace<'a, W> {
    buffer: &'a mut PackedBoolBuffer<W>,
}

impl<W: BitWord> WordStore<W> for InPlace<'_, W> {
    #[inline]
    fn source(&self, index: usize) -> W {
        self.buffer.word_at(index)
    }

    #[inline]
    fn dest(&self, index: usize) -> W {
        self.buffer.word_at(index)
    }

    #[inline]
    fn store(&mut self, index: usize, word: W) {
        self.buffer.set_word_at(index, word)
    }
}

/// Order in which destination words are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Lowest word first
    Forward,
    /// Highest word first
    Backward,
}

/// Shift that moves a source word's bits to their destination phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    /// Source and destination share the same phase
    None,
    /// The source phase is ahead of the destination phase by this many bits
    Right(u32),
    /// The destination phase is ahead of the source phase by this many bits
    Left(u32),
}

/// The source words `[first, last]` spanned by a move
#[derive(Debug, Clone, Copy)]
struct SourceWords {
    first: usize,
    last: usize,
    shift: Shift,
}

impl SourceWords {
    /// Returns the source bits landing in the `n`th destination word of the move
    ///
    /// Positions that do not correspond to a source bit of the run hold garbage
    /// and must be masked off by the caller. No word outside `[first, last]` is read.
    #[inline]
    fn assemble<W: BitWord, S: WordStore<W>>(&self, store: &S, n: usize) -> W {
        let index = self.first + n;
        match self.shift {
            Shift::None => store.source(index),
            Shift::Right(r) => {
                let low = store.source(index) >> r;
                if index < self.last {
                    low | store.source(index + 1) << (W::BITS as u32 - r)
                } else {
                    low
                }
            }
            Shift::Left(l) => {
                let high = if index <= self.last {
                    store.source(index) << l
                } else {
                    W::ZERO
                };
                if n > 0 {
                    high | store.source(index - 1) >> (W::BITS as u32 - l)
                } else {
                    high
                }
            }
        }
    }
}

/// Moves `len` bits starting at `source_begin` to `dest_begin`, writing destination
/// words in the order given by `direction`
///
/// `len` must be non-zero and both runs must lie within their buffers.
fn move_bits<W: BitWord, S: WordStore<W>>(
    store: &mut S,
    source_begin: usize,
    dest_begin: usize,
    len: usize,
    direction: Direction,
) {
    debug_assert!(len > 0);
    let (source_first, source_offset) = split_index::<W>(source_begin);
    let (first, dest_offset) = split_index::<W>(dest_begin);
    let (last, last_bit) = split_index::<W>(dest_begin + len - 1);

    let shift = match source_offset.cmp(&dest_offset) {
        Ordering::Equal => Shift::None,
        Ordering::Greater => Shift::Right((source_offset - dest_offset) as u32),
        Ordering::Less => Shift::Left((dest_offset - source_offset) as u32),
    };
    let source = SourceWords {
        first: source_first,
        last: (source_begin + len - 1) / W::BITS,
        shift,
    };

    trace!(?shift, ?direction, first, last, "moving {len} bits");

    if first == last {
        // The destination run lies within a single word
        let mask = lead_mask::<W>(dest_offset) & trail_mask::<W>(last_bit + 1);
        let word = merge(store.dest(first), source.assemble(&*store, 0), mask);
        store.store(first, word);
        return;
    }

    // `None` when the boundary word is covered entirely
    let lead = (dest_offset != 0).then(|| lead_mask::<W>(dest_offset));
    let trail = (last_bit + 1 != W::BITS).then(|| trail_mask::<W>(last_bit + 1));

    let count = last - first + 1;
    for step in 0..count {
        let n = match direction {
            Direction::Forward => step,
            Direction::Backward => count - 1 - step,
        };
        let index = first + n;
        let value = source.assemble(&*store, n);
        let mask = match n {
            0 => lead,
            _ if n == count - 1 => trail,
            _ => None,
        };
        let word = match mask {
            Some(mask) => merge(store.dest(index), value, mask),
            None => value,
        };
        store.store(index, word);
    }
}
