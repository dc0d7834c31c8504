//! K-mer extraction.
use std::borrow::Cow;

use kmer_hash::prefix_index;

/// Standard genetic code, indexed by the 2-bit encoding of a codon (`A=0`, `C=1`, `G=2`, `T=3`).
static CODON_TABLE: &[u8; 64] =
    b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// Amino acid emitted for a codon outside the table.
const UNKNOWN_AMINO_ACID: u8 = b'X';

/// Alphabet the k-mers are indexed in, which also decides how k-mers are extracted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// Nucleotide k-mers are used as they appear in the sequence.
    #[default]
    Nucleotide,

    /// Each nucleotide k-mer is translated codon by codon.
    Protein,
}

impl Alphabet {
    /// Iterates the k-mers of a normalized sequence.
    pub fn kmers(self, seq: &[u8], ksize: usize) -> Kmers<'_> {
        Kmers {
            windows: KmerIter::new(seq, ksize),
            alphabet: self,
        }
    }
}

/// Upper-cases a sequence and replaces every `N` with `G`.
///
/// # Examples
///
/// ```
/// use kmer_sketch::kmer::normalize;
///
/// assert_eq!(normalize(b"acgNn"), b"ACGGG".to_vec());
/// ```
pub fn normalize(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .map(|b| match b.to_ascii_uppercase() {
            b'N' => b'G',
            c => c,
        })
        .collect()
}

/// Translates a nucleotide k-mer into amino acids.
///
/// Trailing bases that do not fill a codon are dropped. Stop codons become `*`
/// and codons with bases outside `ACGT` become `X`.
///
/// # Examples
///
/// ```
/// use kmer_sketch::kmer::translate_codons;
///
/// assert_eq!(translate_codons(b"ATGGCAGTGAC"), b"MAV".to_vec());
/// ```
pub fn translate_codons(kmer: &[u8]) -> Vec<u8> {
    kmer.chunks_exact(3)
        .map(|codon| prefix_index(codon, 3).map_or(UNKNOWN_AMINO_ACID, |i| CODON_TABLE[i]))
        .collect()
}

/// Sliding windows of `ksize` bytes, from left to right.
pub struct KmerIter<'a> {
    seq: &'a [u8],
    ksize: usize,
    position: usize,
}

impl<'a> KmerIter<'a> {
    /// Creates an iterator over the k-mers of `seq`.
    pub const fn new(seq: &'a [u8], ksize: usize) -> Self {
        Self {
            seq,
            ksize,
            position: 0,
        }
    }
}

impl<'a> Iterator for KmerIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.seq.len() < self.position + self.ksize {
            return None;
        }
        let window = &self.seq[self.position..self.position + self.ksize];
        self.position += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.seq.len() + 1).saturating_sub(self.position + self.ksize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for KmerIter<'_> {}

/// K-mers produced according to an [`Alphabet`].
pub struct Kmers<'a> {
    windows: KmerIter<'a>,
    alphabet: Alphabet,
}

impl<'a> Iterator for Kmers<'a> {
    type Item = Cow<'a, [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        let window = self.windows.next()?;
        Some(match self.alphabet {
            Alphabet::Nucleotide => Cow::Borrowed(window),
            Alphabet::Protein => Cow::Owned(translate_codons(window)),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k1() {
        let seq = b"ACG";
        let mut iter = KmerIter::new(seq, 1);
        assert_eq!(iter.next(), Some(&seq[0..1]));
        assert_eq!(iter.next(), Some(&seq[1..2]));
        assert_eq!(iter.next(), Some(&seq[2..3]));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_k2() {
        let seq = b"ACG";
        let mut iter = KmerIter::new(seq, 2);
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&seq[0..2]));
        assert_eq!(iter.next(), Some(&seq[1..3]));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_k3() {
        let seq = b"ACG";
        let mut iter = KmerIter::new(seq, 3);
        assert_eq!(iter.next(), Some(&seq[0..3]));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_k4() {
        let seq = b"ACG";
        let mut iter = KmerIter::new(seq, 4);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_window_count() {
        let seq = b"ATGGCAGTGACGATGCCAG";
        for k in 1..=25 {
            let expected = (seq.len() + 1).saturating_sub(k);
            assert_eq!(KmerIter::new(seq, k).count(), expected);
        }
    }

    #[test]
    fn test_translate_all_codons() {
        let bases = [b'A', b'C', b'G', b'T'];
        let mut stops = 0;
        for &x in &bases {
            for &y in &bases {
                for &z in &bases {
                    let aa = translate_codons(&[x, y, z]);
                    assert_eq!(aa.len(), 1);
                    if aa[0] == b'*' {
                        stops += 1;
                    }
                }
            }
        }
        assert_eq!(stops, 3);
        assert_eq!(translate_codons(b"TAATAGTGA"), b"***".to_vec());
        assert_eq!(translate_codons(b"TTTGGGCCCAAA"), b"FGPK".to_vec());
    }

    #[test]
    fn test_translate_partial_codon() {
        assert_eq!(translate_codons(b"ATGGC"), b"M".to_vec());
        assert_eq!(translate_codons(b"AT"), Vec::<u8>::new());
    }

    #[test]
    fn test_translate_unknown() {
        assert_eq!(translate_codons(b"ATGRYKATG"), b"MXM".to_vec());
    }

    #[test]
    fn test_protein_length() {
        for len in (3..=30).step_by(3) {
            let kmer = vec![b'A'; len];
            assert_eq!(translate_codons(&kmer).len(), len / 3);
        }
    }

    #[test]
    fn test_nucleotide_kmers() {
        let kmers: Vec<_> = Alphabet::Nucleotide.kmers(b"ACGTA", 3).collect();
        assert_eq!(
            kmers,
            vec![&b"ACG"[..], &b"CGT"[..], &b"GTA"[..]]
        );
    }

    #[test]
    fn test_protein_kmers() {
        let kmers: Vec<_> = Alphabet::Protein.kmers(b"ATGGCAGTG", 6).collect();
        assert_eq!(
            kmers,
            vec![&b"MA"[..], &b"WQ"[..], &b"GS"[..], &b"AV"[..]]
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(b"acgtn"), b"ACGTG".to_vec());
        assert_eq!(normalize(b"NNNN"), b"GGGG".to_vec());
        assert_eq!(normalize(b""), Vec::<u8>::new());
    }
}
