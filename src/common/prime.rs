//! Prime helpers used to size the bucket array.
//!
//! Tables always hold a prime number of buckets. With a prime modulus, keys
//! whose hashes share a common factor with the table size (typical for
//! power-of-two sizes) no longer pile up in a few buckets.

/// Returns the first prime found by stepping odd candidates upward from `n`.
///
/// An even `n` is bumped to the next odd number first, so `next_prime(2)` is
/// `3`. `1` is not prime, so `next_prime(1)` is `3` as well.
///
/// # Panics
///
/// Panics with "capacity overflow" if no prime fits in a `usize`.
pub(crate) fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { checked_step(n, 1) } else { n };

    while !is_prime(candidate) {
        candidate = checked_step(candidate, 2);
    }

    candidate
}

pub(crate) fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }

    if n <= 1 || n % 2 == 0 {
        return false;
    }

    // `i <= n / i` is `i * i <= n` without the overflow.
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }

    true
}

#[inline]
fn checked_step(n: usize, by: usize) -> usize {
    match n.checked_add(by) {
        Some(next) => next,
        None => panic!("capacity overflow"),
    }
}
