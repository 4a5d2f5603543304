// Copyright 2024 The smaz-rs Authors
// Based on the SMAZ compression scheme by Salvatore Sanfilippo
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! # SMAZ Compression
//!
//! This library implements SMAZ, a compression scheme for short strings.
//! It is wire compatible with the original C implementation: each byte of
//! the compressed stream is either an index into a fixed 254-entry codebook
//! of common text fragments, or one of two escape markers for literal data.
//!
//! SMAZ targets the inputs where general-purpose compressors fail: URLs,
//! single words, short sentences. Typical English text shrinks by 40-50%;
//! there is no header, so even a two-character input never grows by more
//! than a byte per character.
//!
//! ## Example
//!
//! ```rust
//! use smaz::{encode, decode};
//!
//! let data = b"this is a small string";
//! let compressed = encode(data);
//! assert!(compressed.len() < data.len());
//!
//! let decompressed = decode(&compressed).expect("decompression failed");
//! assert_eq!(data, &decompressed[..]);
//! ```
//!
//! Compression never fails: bytes with no codebook match are carried
//! verbatim, so any input (including binary) round-trips exactly, at worst
//! doubling in size. Decompression returns an error on truncated input.

mod codebook;
pub mod constants;
mod decode;
mod encode;
mod error;

pub use codebook::{lookup_index, longest_prefix_match, CODEBOOK};
pub use decode::decode;
pub use encode::{encode, max_encoded_len};
pub use error::{Error, Result};
