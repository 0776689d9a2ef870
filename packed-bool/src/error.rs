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

//! Defines [`PackedBoolError`] for representing failures of packed buffer operations

/// Errors returned by [`PackedBoolBuffer`](crate::PackedBoolBuffer) and the range mover
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackedBoolError {
    /// A bit index or range end exceeds the length of the buffer
    #[error("Bit position {index} out of range for buffer of length {len}")]
    OutOfRange {
        /// The offending bit position
        index: usize,
        /// The logical length of the buffer
        len: usize,
    },

    /// A range whose begin exceeds its end
    #[error("Invalid bit range: begin {begin} is greater than end {end}")]
    InvalidRange {
        /// Start of the range
        begin: usize,
        /// End of the range
        end: usize,
    },
}

/// Result type returned by fallible operations of this crate
pub type Result<T, E = PackedBoolError> = std::result::Result<T, E>;
