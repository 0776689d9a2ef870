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

use packed_bool::{move_range, BitWord, PackedBoolBuffer, PackedBoolError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

fn seedable_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn random_bits(rng: &mut StdRng, len: usize) -> Vec<bool> {
    (0..len).map(|_| rng.random_bool(0.5)).collect()
}

fn bits<W: BitWord>(buffer: &PackedBoolBuffer<W>) -> Vec<bool> {
    buffer.iter().collect()
}

/// Materializes the source run before writing it to the destination
fn reference_move(
    source: &[bool],
    dest: &[bool],
    range: Range<usize>,
    dest_begin: usize,
) -> Vec<bool> {
    let run = source[range].to_vec();
    let mut dest = dest.to_vec();
    dest[dest_begin..dest_begin + run.len()].copy_from_slice(&run);
    dest
}

/// Asserts the padding bits of the final word are zero
fn assert_zero_padding<W: BitWord>(buffer: &PackedBoolBuffer<W>) {
    let tail = buffer.len() % W::BITS;
    if tail != 0 {
        let last = buffer.word_at(buffer.word_len() - 1);
        assert_eq!(last & (W::MAX << tail as u32), W::ZERO, "padding bits set");
    }
}

#[test]
fn test_round_trip() {
    let mut rng = seedable_rng();
    let source_bits = random_bits(&mut rng, 1000);
    let source = PackedBoolBuffer::<u64>::from(source_bits.as_slice());

    for _ in 0..200 {
        let begin = rng.random_range(0..=1000);
        let end = rng.random_range(begin..=1000);
        let len = end - begin;
        let dest_len = rng.random_range(len..=1100);
        let dest_begin = rng.random_range(0..=dest_len - len);

        let mut dest = PackedBoolBuffer::new(dest_len);
        move_range(source.range(begin, end), &mut dest, dest_begin).unwrap();

        for (i, b) in dest.iter().enumerate() {
            if (dest_begin..dest_begin + len).contains(&i) {
                assert_eq!(b, source_bits[begin + i - dest_begin], "bit {i}");
            } else {
                assert!(!b, "bit {i} outside the run was written");
            }
        }
        assert_zero_padding(&dest);
    }
}

fn check_alignment_independence<W: BitWord>() {
    let mut rng = seedable_rng();
    let len = 2 * W::BITS;
    let content = random_bits(&mut rng, len);

    for source_offset in 0..W::BITS {
        let mut source_bits = random_bits(&mut rng, source_offset);
        source_bits.extend_from_slice(&content);
        source_bits.extend(random_bits(&mut rng, 7));
        let source = PackedBoolBuffer::<W>::from(source_bits);

        for dest_offset in 0..W::BITS {
            let mut dest = PackedBoolBuffer::<W>::new(dest_offset + len + 3);
            move_range(
                source.range(source_offset, source_offset + len),
                &mut dest,
                dest_offset,
            )
            .unwrap();

            let actual = bits(&dest);
            assert_eq!(
                &actual[dest_offset..dest_offset + len],
                content.as_slice(),
                "source offset {source_offset}, dest offset {dest_offset}"
            );
            assert!(actual[..dest_offset].iter().all(|b| !b));
            assert!(actual[dest_offset + len..].iter().all(|b| !b));
        }
    }
}

#[test]
fn test_alignment_independence() {
    check_alignment_independence::<u8>();
    check_alignment_independence::<u16>();
    check_alignment_independence::<u32>();
    check_alignment_independence::<u64>();
}

#[test]
fn test_overlapping_move() {
    let mut rng = seedable_rng();
    let pattern = random_bits(&mut rng, 50);

    let mut buffer = PackedBoolBuffer::<u32>::from(pattern.as_slice());
    buffer.move_within(5..25, 7).unwrap();
    assert_eq!(bits(&buffer), reference_move(&pattern, &pattern, 5..25, 7));

    let mut buffer = PackedBoolBuffer::<u32>::from(pattern.as_slice());
    buffer.move_within(7..27, 5).unwrap();
    assert_eq!(bits(&buffer), reference_move(&pattern, &pattern, 7..27, 5));
}

fn check_move_within<W: BitWord>(rng: &mut StdRng) {
    for _ in 0..500 {
        let len = rng.random_range(1..400);
        let pattern = random_bits(rng, len);
        let begin = rng.random_range(0..=len);
        let end = rng.random_range(begin..=len);
        let dest_begin = rng.random_range(0..=len - (end - begin));

        let mut buffer = PackedBoolBuffer::<W>::from(pattern.as_slice());
        buffer.move_within(begin..end, dest_begin).unwrap();
        assert_eq!(
            bits(&buffer),
            reference_move(&pattern, &pattern, begin..end, dest_begin),
            "move {begin}..{end} to {dest_begin} in {len} bits"
        );
        assert_zero_padding(&buffer);
    }
}

#[test]
fn test_move_within_matches_reference() {
    let mut rng = seedable_rng();
    check_move_within::<u8>(&mut rng);
    check_move_within::<u16>(&mut rng);
    check_move_within::<u32>(&mut rng);
    check_move_within::<u64>(&mut rng);
    check_move_within::<usize>(&mut rng);
}

#[test]
fn test_single_block_cases() {
    let mut rng = seedable_rng();
    let source_bits = random_bits(&mut rng, 50);
    let source = PackedBoolBuffer::<u32>::from(source_bits.as_slice());

    // both runs in one word, source only in one word, destination only in one word
    for (range, dest_begin) in [(5..25, 5), (5..25, 25), (25..45, 5)] {
        let mut dest = PackedBoolBuffer::<u32>::new(50);
        move_range(source.range(range.start, range.end), &mut dest, dest_begin).unwrap();
        assert_eq!(
            bits(&dest),
            reference_move(&source_bits, &[false; 50], range.clone(), dest_begin),
            "range {range:?} to {dest_begin}"
        );
    }
}

#[test]
fn test_zero_length_is_noop() {
    let mut rng = seedable_rng();
    let source = PackedBoolBuffer::<u32>::from(random_bits(&mut rng, 50));
    let original = PackedBoolBuffer::<u32>::from(random_bits(&mut rng, 50));

    for k in 0..=50 {
        for m in 0..=50 {
            let mut dest = original.clone();
            move_range(source.range(k, k), &mut dest, m).unwrap();
            assert_eq!(dest, original);

            dest.move_within(k..k, m).unwrap();
            assert_eq!(dest, original);
        }
    }
}

#[test]
fn test_out_of_range_rejected() {
    let mut rng = seedable_rng();
    let source = PackedBoolBuffer::<u64>::from(random_bits(&mut rng, 50));
    let original = PackedBoolBuffer::<u64>::from(random_bits(&mut rng, 40));

    let mut dest = original.clone();
    assert_eq!(
        move_range(source.range(10, 51), &mut dest, 0),
        Err(PackedBoolError::OutOfRange { index: 51, len: 50 })
    );
    assert_eq!(
        move_range(source.range(0, 30), &mut dest, 11),
        Err(PackedBoolError::OutOfRange { index: 41, len: 40 })
    );
    assert_eq!(
        move_range(source.range(0, 0), &mut dest, 41),
        Err(PackedBoolError::OutOfRange { index: 41, len: 40 })
    );
    assert_eq!(
        move_range(source.range(30, 20), &mut dest, 0),
        Err(PackedBoolError::InvalidRange { begin: 30, end: 20 })
    );
    assert_eq!(dest, original);

    #[allow(clippy::reversed_empty_ranges)]
    let err = dest.move_within(30..20, 0).unwrap_err();
    assert_eq!(err, PackedBoolError::InvalidRange { begin: 30, end: 20 });
    assert_eq!(
        dest.move_within(35..41, 0),
        Err(PackedBoolError::OutOfRange { index: 41, len: 40 })
    );
    assert_eq!(dest, original);
}

#[test]
fn test_harness_scenarios() {
    let mut rng = seedable_rng();
    for size in [64, 4096, 64 << 10] {
        let source_bits = random_bits(&mut rng, size);
        let source = PackedBoolBuffer::<u64>::from(source_bits.as_slice());

        // block aligned, source misaligned, destination misaligned, matching alignment
        for (range, dest_begin) in [(0..size, 0), (1..size, 0), (0..size - 1, 1), (5..size, 5)] {
            let mut dest = PackedBoolBuffer::<u64>::new(size);
            move_range(source.range(range.start, range.end), &mut dest, dest_begin).unwrap();
            assert_eq!(
                bits(&dest),
                reference_move(&source_bits, &vec![false; size], range, dest_begin)
            );
        }
    }
}
