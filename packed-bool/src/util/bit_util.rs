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

//! Utils for working with bits packed into [`BitWord`]s

use crate::BitWord;

/// Returns the ceil of `value`/`divisor`
#[inline]
pub fn ceil(value: usize, divisor: usize) -> usize {
    value.div_ceil(divisor)
}

/// Returns the number of `W` words required to store `len` bits
#[inline]
pub fn word_count<W: BitWord>(len: usize) -> usize {
    ceil(len, W::BITS)
}

/// Splits the bit index `i` into its `(word_index, bit_offset)` pair
#[inline]
pub fn split_index<W: BitWord>(i: usize) -> (usize, usize) {
    (i / W::BITS, i % W::BITS)
}

/// Returns whether bit at position `i` in `data` is set or not
#[inline]
pub fn get_bit<W: BitWord>(data: &[W], i: usize) -> bool {
    let (word, offset) = split_index::<W>(i);
    data[word] & bit_mask::<W>(offset) != W::ZERO
}

/// Sets bit at position `i` for `data` to 1
#[inline]
pub fn set_bit<W: BitWord>(data: &mut [W], i: usize) {
    let (word, offset) = split_index::<W>(i);
    data[word] |= bit_mask::<W>(offset);
}

/// Sets bit at position `i` for `data` to 0
#[inline]
pub fn unset_bit<W: BitWord>(data: &mut [W], i: usize) {
    let (word, offset) = split_index::<W>(i);
    data[word] &= !bit_mask::<W>(offset);
}

/// Returns a word with only the bit at `offset` set
///
/// `offset` must be less than `W::BITS`
#[inline]
pub fn bit_mask<W: BitWord>(offset: usize) -> W {
    debug_assert!(offset < W::BITS);
    W::ONE << offset as u32
}

/// Returns a word with the bits `[offset, W::BITS)` set
///
/// `offset` must be less than `W::BITS`
#[inline]
pub fn lead_mask<W: BitWord>(offset: usize) -> W {
    debug_assert!(offset < W::BITS);
    W::MAX << offset as u32
}

/// Returns a word with the bits `[0, end)` set
///
/// `end` must be in `1..=W::BITS`, a full word is selected by `end == W::BITS`
#[inline]
pub fn trail_mask<W: BitWord>(end: usize) -> W {
    debug_assert!(end > 0 && end <= W::BITS);
    W::MAX >> (W::BITS - end) as u32
}

/// Replaces the bits of `word` selected by `mask` with the corresponding bits of `value`
#[inline]
pub fn merge<W: BitWord>(word: W, value: W, mask: W) -> W {
    (word & !mask) | (value & mask)
}
