// Copyright 2024 The smaz-rs Authors
// Based on the SMAZ compression scheme by Salvatore Sanfilippo
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt;

/// Result type for SMAZ operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for SMAZ decompression
///
/// Compression never fails; the verbatim escapes give every byte sequence
/// a valid encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The compressed buffer ends before a declared unit is complete
    TruncatedInput,

    /// A marker byte references a codebook slot that does not exist
    InvalidIndex(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TruncatedInput => write!(f, "smaz: truncated input"),
            Error::InvalidIndex(i) => write!(f, "smaz: invalid codebook index {}", i),
        }
    }
}

impl std::error::Error for Error {}
