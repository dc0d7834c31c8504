//! Bucket indices derived from nucleotide prefixes.

/// Number of distinct prefixes of length `len` over `{A,C,G,T}`,
/// or `None` if it does not fit in `usize`.
pub fn num_prefixes(len: usize) -> Option<usize> {
    let len = u32::try_from(len).ok()?;
    4usize.checked_pow(len)
}

/// Encodes the first `len` bases of a k-mer into an index in `[0, 4^len)`.
///
/// Each base takes two bits (`A=0`, `C=1`, `G=2`, `T=3`), the first base being
/// the most significant. Returns `None` if the k-mer is shorter than `len` or
/// the prefix contains anything but upper-case `ACGT`.
///
/// # Examples
///
/// ```
/// use kmer_hash::prefix_index;
///
/// assert_eq!(prefix_index(b"ACGT", 2), Some(1));
/// assert_eq!(prefix_index(b"TTAA", 2), Some(15));
/// assert_eq!(prefix_index(b"NA", 2), None);
/// ```
pub fn prefix_index(kmer: &[u8], len: usize) -> Option<usize> {
    let prefix = kmer.get(..len)?;
    let mut idx = 0usize;
    for &b in prefix {
        idx = (idx << 2) | encode_base(b)?;
    }
    Some(idx)
}

#[inline(always)]
const fn encode_base(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prefix() {
        assert_eq!(prefix_index(b"ACGT", 0), Some(0));
        assert_eq!(prefix_index(b"", 0), Some(0));
    }

    #[test]
    fn test_bijection() {
        let bases = [b'A', b'C', b'G', b'T'];
        let mut seen = vec![false; 16];
        for &x in &bases {
            for &y in &bases {
                let idx = prefix_index(&[x, y, b'A'], 2).unwrap();
                assert!(!seen[idx]);
                seen[idx] = true;
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn test_short_kmer() {
        assert_eq!(prefix_index(b"AC", 3), None);
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(prefix_index(b"ACNT", 3), None);
        assert_eq!(prefix_index(b"acgt", 1), None);
        // Only the prefix is inspected.
        assert_eq!(prefix_index(b"ACNT", 2), Some(1));
    }

    #[test]
    fn test_num_prefixes() {
        assert_eq!(num_prefixes(0), Some(1));
        assert_eq!(num_prefixes(3), Some(64));
        assert_eq!(num_prefixes(64), None);
    }
}
