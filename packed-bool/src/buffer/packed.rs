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

use crate::bit_iterator::BitIterator;
use crate::bit_util::{self, split_index, trail_mask, word_count};
use crate::{BitRange, BitWord, PackedBoolError, Result};

/// A fixed-length sequence of booleans packed one bit each into words of type `W`
///
/// The boolean at logical index `i` is stored in word `i / W::BITS` at bit position
/// `i % W::BITS`. The bits of the final word beyond [`len`](Self::len) are padding
/// and are always kept zero.
///
/// # Example
/// ```
/// # use packed_bool::PackedBoolBuffer;
/// let mut buffer = PackedBoolBuffer::<u32>::new(40);
/// buffer.set(33, true).unwrap();
/// assert!(buffer.get(33).unwrap());
/// assert_eq!(buffer.word_len(), 2);
/// assert_eq!(buffer.word_at(1), 0b10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBoolBuffer<W = u64> {
    words: Vec<W>,
    len: usize,
}

impl<W: BitWord> PackedBoolBuffer<W> {
    /// Create a new [`PackedBoolBuffer`] of `len` bits, all `false`
    pub fn new(len: usize) -> Self {
        Self::filled(len, false)
    }

    /// Create a new [`PackedBoolBuffer`] of `len` bits, all equal to `value`
    pub fn filled(len: usize, value: bool) -> Self {
        let fill = if value { W::MAX } else { W::ZERO };
        let mut buffer = Self {
            words: vec![fill; word_count::<W>(len)],
            len,
        };
        buffer.clear_padding();
        buffer
    }

    /// Create a new [`PackedBoolBuffer`] of `len` bits from existing `words`
    ///
    /// Any bits of the final word beyond `len` are cleared.
    ///
    /// # Panics
    ///
    /// Panics if `words` does not hold exactly the number of words needed for `len` bits
    pub fn new_from_words(words: Vec<W>, len: usize) -> Self {
        let expected = word_count::<W>(len);
        assert_eq!(
            words.len(),
            expected,
            "PackedBoolBuffer of {len} bits requires {expected} words, got {}",
            words.len()
        );
        let mut buffer = Self { words, len };
        buffer.clear_padding();
        buffer
    }

    /// Returns the number of booleans in this buffer
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if this buffer holds no booleans
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of storage words
    #[inline]
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Returns the packed storage words
    #[inline]
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Returns the boolean at index `i`
    ///
    /// Returns [`PackedBoolError::OutOfRange`] if `i >= self.len()`
    #[inline]
    pub fn get(&self, i: usize) -> Result<bool> {
        self.check_index(i)?;
        Ok(bit_util::get_bit(&self.words, i))
    }

    /// Sets the boolean at index `i` to `value`
    ///
    /// Returns [`PackedBoolError::OutOfRange`] if `i >= self.len()`
    #[inline]
    pub fn set(&mut self, i: usize, value: bool) -> Result<()> {
        self.check_index(i)?;
        if value {
            bit_util::set_bit(&mut self.words, i)
        } else {
            bit_util::unset_bit(&mut self.words, i)
        }
        Ok(())
    }

    /// Returns the storage word at `word_index`
    ///
    /// # Panics
    ///
    /// Panics if `word_index >= self.word_len()`
    #[inline]
    pub fn word_at(&self, word_index: usize) -> W {
        self.words[word_index]
    }

    /// Overwrites the storage word at `word_index`
    ///
    /// If this is the final word, its padding bits are cleared.
    ///
    /// # Panics
    ///
    /// Panics if `word_index >= self.word_len()`
    #[inline]
    pub fn set_word_at(&mut self, word_index: usize, word: W) {
        self.words[word_index] = word;
        if word_index + 1 == self.words.len() {
            self.clear_padding();
        }
    }

    /// Returns an iterator over the booleans in this buffer
    pub fn iter(&self) -> BitIterator<'_, W> {
        BitIterator::new(&self.words, 0, self.len)
    }

    /// Returns a [`BitRange`] describing the bits `[begin, end)` of this buffer
    ///
    /// The range is not validated until it is used.
    pub fn range(&self, begin: usize, end: usize) -> BitRange<'_, W> {
        BitRange::new(self, begin, end)
    }

    #[inline]
    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.len {
            return Err(PackedBoolError::OutOfRange {
                index: i,
                len: self.len,
            });
        }
        Ok(())
    }

    fn clear_padding(&mut self) {
        let (last, end) = split_index::<W>(self.len);
        if end != 0 {
            self.words[last] &= trail_mask::<W>(end);
        }
    }
}

impl<W: BitWord> FromIterator<bool> for PackedBoolBuffer<W> {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut words = Vec::new();
        let mut current = W::ZERO;
        let mut len = 0;
        for value in iter {
            let offset = len % W::BITS;
            if value {
                current |= bit_util::bit_mask::<W>(offset);
            }
            len += 1;
            if offset + 1 == W::BITS {
                words.push(current);
                current = W::ZERO;
            }
        }
        if len % W::BITS != 0 {
            words.push(current);
        }
        Self { words, len }
    }
}

impl<W: BitWord> From<&[bool]> for PackedBoolBuffer<W> {
    fn from(values: &[bool]) -> Self {
        values.iter().copied().collect()
    }
}

impl<W: BitWord> From<Vec<bool>> for PackedBoolBuffer<W> {
    fn from(values: Vec<bool>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, W: BitWord> IntoIterator for &'a PackedBoolBuffer<W> {
    type Item = bool;
    type IntoIter = BitIterator<'a, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
