// Copyright 2024 The smaz-rs Authors
// Based on the SMAZ compression scheme by Salvatore Sanfilippo
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::codebook::longest_prefix_match;
use crate::constants::{MAX_VERBATIM_RUN, TAG_VERBATIM_BYTE, TAG_VERBATIM_RUN};

/// Encode returns the compressed form of src.
///
/// The encoder scans left to right, greedily taking the longest codebook
/// match at each position and emitting its one-byte code. Bytes with no
/// match are collected into verbatim runs: a single unmatched byte costs
/// two bytes on the wire, a run of n unmatched bytes costs n + 2.
///
/// Encoding never fails and is deterministic; the output is empty iff
/// src is empty.
pub fn encode(src: &[u8]) -> Vec<u8> {
    let mut dst = Vec::with_capacity(src.len());
    let mut s = 0;

    while s < src.len() {
        if let Some((code, len)) = longest_prefix_match(src, s) {
            dst.push(code);
            s += len;
            continue;
        }

        // No match: collect the verbatim run, capped at MAX_VERBATIM_RUN,
        // stopping as soon as a codebook match becomes available again
        let start = s;
        s += 1;
        while s < src.len()
            && s - start < MAX_VERBATIM_RUN
            && longest_prefix_match(src, s).is_none()
        {
            s += 1;
        }

        emit_verbatim(&mut dst, &src[start..s]);
    }

    dst
}

/// Returns the worst-case compressed size for an input of src_len bytes.
///
/// The worst case is an input where no byte ever matches the codebook and
/// every run break falls on a single byte: two output bytes per input
/// byte. Useful for callers that pre-size a reusable buffer.
pub fn max_encoded_len(src_len: usize) -> usize {
    src_len * 2
}

/// Emit one verbatim unit for `run` (1..=MAX_VERBATIM_RUN bytes)
fn emit_verbatim(dst: &mut Vec<u8>, run: &[u8]) {
    debug_assert!(!run.is_empty() && run.len() <= MAX_VERBATIM_RUN);

    if run.len() == 1 {
        dst.push(TAG_VERBATIM_BYTE);
        dst.push(run[0]);
    } else {
        dst.push(TAG_VERBATIM_RUN);
        dst.push(run.len() as u8);
        dst.extend_from_slice(run);
    }
}
