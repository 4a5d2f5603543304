// Copyright 2024 The smaz-rs Authors
// Based on the SMAZ compression scheme by Salvatore Sanfilippo
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::codebook::lookup_index;
use crate::constants::{TAG_VERBATIM_BYTE, TAG_VERBATIM_RUN};
use crate::error::{Error, Result};

/// Decode returns the decompressed form of src.
///
/// The compressed stream is a sequence of units, each determined by its
/// marker byte alone: values 0..=253 are codebook indices, 254 escapes one
/// literal byte, 255 escapes a run (length byte, then that many literal
/// bytes).
///
/// Fails with [`Error::TruncatedInput`] if any unit would read past the
/// end of src. On failure no partial output is returned.
pub fn decode(src: &[u8]) -> Result<Vec<u8>> {
    let mut dst = Vec::with_capacity(src.len() * 3);
    let mut s = 0;

    while s < src.len() {
        match src[s] {
            TAG_VERBATIM_BYTE => {
                if s + 2 > src.len() {
                    return Err(Error::TruncatedInput);
                }
                dst.push(src[s + 1]);
                s += 2;
            }
            TAG_VERBATIM_RUN => {
                if s + 2 > src.len() {
                    return Err(Error::TruncatedInput);
                }
                let len = src[s + 1] as usize;
                if s + 2 + len > src.len() {
                    return Err(Error::TruncatedInput);
                }
                dst.extend_from_slice(&src[s + 2..s + 2 + len]);
                s += 2 + len;
            }
            code => {
                dst.extend_from_slice(lookup_index(code)?);
                s += 1;
            }
        }
    }

    Ok(dst)
}
