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

//! Types for iterating over packed bits

use crate::bit_util::{get_bit, word_count};
use crate::BitWord;

/// Iterator over the bits within a slice of packed words
#[derive(Debug, Clone)]
pub struct BitIterator<'a, W> {
    words: &'a [W],
    current_offset: usize,
    end_offset: usize,
}

impl<'a, W: BitWord> BitIterator<'a, W> {
    /// Create a new [`BitIterator`] from the provided `words`,
    /// and `offset` and `len` in bits
    ///
    /// # Panic
    ///
    /// Panics if `words` is too short for the provided offset and length
    pub fn new(words: &'a [W], offset: usize, len: usize) -> Self {
        let end_offset = offset
            .checked_add(len)
            .expect("BitIterator offset overflow");
        let required_len = word_count::<W>(end_offset);
        assert!(
            words.len() >= required_len,
            "BitIterator buffer too small, expected {required_len} got {}",
            words.len()
        );

        Self {
            words,
            current_offset: offset,
            end_offset,
        }
    }
}

impl<W: BitWord> Iterator for BitIterator<'_, W> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_offset == self.end_offset {
            return None;
        }
        let v = get_bit(self.words, self.current_offset);
        self.current_offset += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_bits = self.end_offset - self.current_offset;
        (remaining_bits, Some(remaining_bits))
    }
}

impl<W: BitWord> ExactSizeIterator for BitIterator<'_, W> {}

impl<W: BitWord> DoubleEndedIterator for BitIterator<'_, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current_offset == self.end_offset {
            return None;
        }
        self.end_offset -= 1;
        Some(get_bit(self.words, self.end_offset))
    }
}
