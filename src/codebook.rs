// Copyright 2024 The smaz-rs Authors
// Based on the SMAZ compression scheme by Salvatore Sanfilippo
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::sync::OnceLock;

use crate::constants::MAX_CODEBOOK_ENTRIES;
use crate::error::{Error, Result};

/// The static codebook: 254 common text fragments, indexed by position.
///
/// The index is the wire format. Entry order and contents follow the
/// canonical SMAZ codebook; changing either breaks compatibility with
/// every existing producer and consumer of the format.
pub static CODEBOOK: [&[u8]; MAX_CODEBOOK_ENTRIES] = [
    b" ", b"the", b"e", b"t", b"a", b"of", b"o", b"and", b"i", b"n", b"s",
    b"e ", b"r", b" th", b" t", b"in", b"he", b"th", b"h", b"he ", b"to",
    b"\r\n", b"l", b"s ", b"d", b" a", b"an", b"er", b"c", b" o", b"d ",
    b"on", b" of", b"re", b"of ", b"t ", b", ", b"is", b"u", b"at", b"   ",
    b"n ", b"or", b"which", b"f", b"m", b"as", b"it", b"that", b"\n", b"was",
    b"en", b"  ", b" w", b"es", b" an", b" i", b"\r", b"f ", b"g", b"p",
    b"nd", b" s", b"nd ", b"ed ", b"w", b"ed", b"http://", b"for", b"te",
    b"ing", b"y ", b"The", b" c", b"ti", b"r ", b"his", b"st", b" in", b"ar",
    b"nt", b",", b" to", b"y", b"ng", b" h", b"with", b"le", b"al", b"to ",
    b"b", b"ou", b"be", b"were", b" b", b"se", b"o ", b"ent", b"ha", b"ng ",
    b"their", b"\"", b"hi", b"from", b" f", b"in ", b"de", b"ion", b"me",
    b"v", b".", b"ve", b"all", b"re ", b"ri", b"ro", b"is ", b"co", b"f t",
    b"are", b"ea", b". ", b"her", b" m", b"er ", b" p", b"es ", b"by",
    b"they", b"di", b"ra", b"ic", b"not", b"s, ", b"d t", b"at ", b"ce",
    b"la", b"h ", b"ne", b"as ", b"tio", b"on ", b"n t", b"io", b"we",
    b" a ", b"om", b", a", b"s o", b"ur", b"li", b"ll", b"ch", b"had",
    b"this", b"e t", b"g ", b"e\r\n", b" wh", b"ere", b" co", b"e o", b"a ",
    b"us", b" d", b"ss", b"\n\r\n", b"\r\n\r", b"=\"", b" be", b" e", b"s a",
    b"ma", b"one", b"t t", b"or ", b"but", b"el", b"so", b"l ", b"e s",
    b"s,", b"no", b"ter", b" io", b"be ", b"ing ", b"int", b"out", b"ers",
    b"our", b"ive", b"ver", b"ith", b"led", b"ome", b"ght", b"ave", b"ess",
    b"ear", b"est", b"ore", b"ong", b"age", b"sta", b"ill", b"ple", b"you",
    b"and ", b"the ", b" and", b" the", b"ally", b"ment", b"tion", b"able",
    b"ound", b"ther", b"ight", b"have", b"here", b"will", b"ould", b"hing",
    b"ting", b"more", b"when", b"what", b"said", b"them", b"some", b"time",
    b"into", b"only", b"then", b"than", b"over", b"each", b"ation", b"there",
    b"about", b"would", b"ough", b"ince", b"ween", b" on ", b" is ",
    b" was ", b" for ", b" that ", b"s. ", b"d, ", b"e, ",
];

/// Reverse lookup index over [`CODEBOOK`], bucketed by first byte.
///
/// Each bucket holds the codes of every entry starting with that byte,
/// sorted by descending entry length then ascending code, so a forward
/// scan of a bucket yields the longest match first and breaks length
/// ties toward the lowest index.
struct PrefixIndex {
    buckets: [Vec<u8>; 256],
}

impl PrefixIndex {
    fn build() -> Self {
        let mut buckets: [Vec<u8>; 256] = std::array::from_fn(|_| Vec::new());

        for (code, entry) in CODEBOOK.iter().enumerate() {
            buckets[entry[0] as usize].push(code as u8);
        }

        for bucket in buckets.iter_mut() {
            bucket.sort_by(|&a, &b| {
                CODEBOOK[b as usize]
                    .len()
                    .cmp(&CODEBOOK[a as usize].len())
                    .then(a.cmp(&b))
            });
        }

        PrefixIndex { buckets }
    }
}

fn prefix_index() -> &'static PrefixIndex {
    static INDEX: OnceLock<PrefixIndex> = OnceLock::new();
    INDEX.get_or_init(PrefixIndex::build)
}

/// Returns the codebook entry at index `i`.
///
/// Fails with [`Error::InvalidIndex`] if `i` is not a valid code. With the
/// full 254-entry table every marker value 0..=253 resolves, so this is a
/// defensive check only.
pub fn lookup_index(i: u8) -> Result<&'static [u8]> {
    CODEBOOK
        .get(i as usize)
        .copied()
        .ok_or(Error::InvalidIndex(i))
}

/// Finds the longest codebook entry matching `buf` at `offset`.
///
/// Returns `(code, match_length)` for the entry with the greatest length
/// such that `buf[offset..offset + match_length]` equals the entry, or
/// `None` if no entry matches. Length ties resolve to the lowest code.
pub fn longest_prefix_match(buf: &[u8], offset: usize) -> Option<(u8, usize)> {
    let remaining = buf.get(offset..)?;
    let first = *remaining.first()?;

    for &code in &prefix_index().buckets[first as usize] {
        let entry = CODEBOOK[code as usize];
        if remaining.len() >= entry.len() && &remaining[..entry.len()] == entry {
            return Some((code, entry.len()));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_ENTRY_LEN;

    #[test]
    fn test_entries_distinct_and_bounded() {
        for (i, a) in CODEBOOK.iter().enumerate() {
            assert!(!a.is_empty(), "entry {} is empty", i);
            assert!(a.len() <= MAX_ENTRY_LEN, "entry {} too long", i);
            for (j, b) in CODEBOOK.iter().enumerate().skip(i + 1) {
                assert_ne!(a, b, "entries {} and {} are duplicates", i, j);
            }
        }
    }

    #[test]
    fn test_lookup_index() {
        assert_eq!(lookup_index(0).unwrap(), b" ");
        assert_eq!(lookup_index(1).unwrap(), b"the");
        assert_eq!(lookup_index(67).unwrap(), b"http://");
        assert_eq!(lookup_index(253).unwrap(), b"e, ");

        // Marker values are not codes
        assert_eq!(lookup_index(254), Err(Error::InvalidIndex(254)));
        assert_eq!(lookup_index(255), Err(Error::InvalidIndex(255)));
    }

    #[test]
    fn test_lookup_index_idempotent() {
        for i in 0..=253u8 {
            assert_eq!(lookup_index(i).unwrap(), lookup_index(i).unwrap());
        }
    }

    #[test]
    fn test_longest_match_preferred() {
        // "the" (code 1) must win over "t" (code 3) and "th" (code 17)
        assert_eq!(longest_prefix_match(b"the", 0), Some((1, 3)));
        // "th" wins once the trailing "e" is gone
        assert_eq!(longest_prefix_match(b"th", 0), Some((17, 2)));
        assert_eq!(longest_prefix_match(b"t", 0), Some((3, 1)));
    }

    #[test]
    fn test_match_respects_offset() {
        assert_eq!(longest_prefix_match(b"xxthe", 2), Some((1, 3)));
        assert_eq!(longest_prefix_match(b"xx", 2), None);
    }

    #[test]
    fn test_no_match_for_uncovered_bytes() {
        assert_eq!(longest_prefix_match(&[0x00], 0), None);
        assert_eq!(longest_prefix_match(&[0xff], 0), None);
    }

    #[test]
    fn test_match_consistent_with_table() {
        // Every entry must match itself; entries are distinct, so the
        // greedy match over an exact entry is the entry's own code
        for (code, entry) in CODEBOOK.iter().enumerate() {
            let (found, len) = longest_prefix_match(entry, 0).unwrap();
            assert_eq!(len, entry.len(), "entry {} wrong match length", code);
            assert_eq!(found as usize, code, "entry {} resolved to {}", code, found);
        }
    }
}
