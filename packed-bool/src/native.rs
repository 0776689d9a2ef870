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

//! Storage words for packed boolean buffers

use std::fmt::{Binary, Debug};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shl, Shr};

mod private {
    pub trait Sealed {}
}

/// An unsigned integer used as the unit of storage of a [`PackedBoolBuffer`]
///
/// Bits are packed least-significant-bit first: the boolean at logical offset
/// `i` within a word is stored at `word & (1 << i)`.
///
/// This trait is sealed and implemented for `u8`, `u16`, `u32`, `u64` and `usize`.
///
/// [`PackedBoolBuffer`]: crate::PackedBoolBuffer
pub trait BitWord:
    private::Sealed
    + Copy
    + Default
    + Eq
    + Debug
    + Binary
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitAndAssign
    + BitOrAssign
{
    /// The number of bits in this word
    const BITS: usize;

    /// A word with no bits set
    const ZERO: Self;

    /// A word with only the lowest bit set
    const ONE: Self;

    /// A word with every bit set
    const MAX: Self;
}

macro_rules! bit_word {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl BitWord for $t {
                const BITS: usize = <$t>::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

bit_word!(u8, u16, u32, u64, usize);
