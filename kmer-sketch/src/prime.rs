//! Prime modulus selection.
use crate::errors::{Result, SketchError};

/// Checks if `n` is prime by trial division.
///
/// # Examples
///
/// ```
/// use kmer_sketch::prime::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(91));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3u64;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Finds the largest prime not exceeding `target`.
///
/// Only odd candidates are visited, stepping down from `target` (or `target-1` if even),
/// so the search fails for targets below 3.
///
/// # Examples
///
/// ```
/// use kmer_sketch::prime::largest_prime_at_most;
///
/// assert_eq!(largest_prime_at_most(100).unwrap(), 97);
/// assert!(largest_prime_at_most(1).is_err());
/// ```
pub fn largest_prime_at_most(target: u64) -> Result<u64> {
    let mut i = if target % 2 == 0 {
        target.saturating_sub(1)
    } else {
        target
    };
    while i > 0 {
        if is_prime(i) {
            return Ok(i);
        }
        i = i.saturating_sub(2);
    }
    Err(SketchError::prime_not_found(target))
}
