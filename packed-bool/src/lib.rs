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

//! Bit-packed boolean buffers with word-level bulk range moves
//!
//! A [`PackedBoolBuffer`] stores one boolean per bit of a fixed-width [`BitWord`].
//! [`move_range`] and [`PackedBoolBuffer::move_within`] transfer runs of bits at
//! arbitrary bit offsets using whole-word shifts and masks, with the semantics of
//! `memmove`: overlapping ranges within one buffer are handled correctly.
//!
//! ```
//! # use packed_bool::{move_range, PackedBoolBuffer};
//! let source: PackedBoolBuffer = (0..100).map(|i| i % 3 == 0).collect();
//! let mut dest = PackedBoolBuffer::new(100);
//!
//! move_range(source.range(1, 90), &mut dest, 5).unwrap();
//! assert!(dest.get(7).unwrap());
//! assert!(!dest.get(5).unwrap());
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

pub mod buffer;
pub use buffer::*;

mod error;
pub use error::*;

pub mod mover;
pub use mover::move_range;

mod native;
pub use native::BitWord;

mod util;
pub use util::*;
