// Copyright 2024 The smaz-rs Authors
// Based on the SMAZ compression scheme by Salvatore Sanfilippo
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

/// Marker for a single verbatim byte
pub const TAG_VERBATIM_BYTE: u8 = 254;

/// Marker for a verbatim run (length byte + raw bytes follow)
pub const TAG_VERBATIM_RUN: u8 = 255;

/// Maximum length of a single verbatim run
pub const MAX_VERBATIM_RUN: usize = 255;

/// Size of the codebook; marker values 0..=253 are codebook indices
pub const MAX_CODEBOOK_ENTRIES: usize = 254;

/// Length of the longest codebook entry ("http://")
pub const MAX_ENTRY_LEN: usize = 7;
