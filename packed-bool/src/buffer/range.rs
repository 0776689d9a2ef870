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

use crate::{BitWord, PackedBoolBuffer};

/// Describes the bits `[begin, end)` of a [`PackedBoolBuffer`]
///
/// A [`BitRange`] is a plain descriptor, it is validated against its buffer
/// only when passed to [`move_range`](crate::move_range).
#[derive(Debug, Clone, Copy)]
pub struct BitRange<'a, W = u64> {
    buffer: &'a PackedBoolBuffer<W>,
    begin: usize,
    end: usize,
}

impl<'a, W: BitWord> BitRange<'a, W> {
    /// Create a new [`BitRange`] over the bits `[begin, end)` of `buffer`
    pub fn new(buffer: &'a PackedBoolBuffer<W>, begin: usize, end: usize) -> Self {
        Self { buffer, begin, end }
    }

    /// Returns the buffer this range refers to
    #[inline]
    pub fn buffer(&self) -> &'a PackedBoolBuffer<W> {
        self.buffer
    }

    /// Returns the first bit index of this range
    #[inline]
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Returns the bit index one past the end of this range
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of bits in this range, or zero if `begin > end`
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// Returns true if this range selects no bits
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, W: BitWord> From<&'a PackedBoolBuffer<W>> for BitRange<'a, W> {
    fn from(buffer: &'a PackedBoolBuffer<W>) -> Self {
        Self::new(buffer, 0, buffer.len())
    }
}
