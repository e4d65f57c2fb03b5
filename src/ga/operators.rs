//! Bit-level genetic operators on 64-bit encodings.
//!
//! # Crossover
//!
//! - [`splice`]: recombine two encodings around a fixed locus
//! - [`crossover`]: [`splice`] at a uniformly drawn locus in `0..64`
//!
//! # Mutation
//!
//! - [`flip_bits`]: independent per-bit Bernoulli flips
//!
//! The crossover masks are `low = u64::MAX >> locus` and `high = low << locus`.
//! They only partition the word when `locus == 32`. Below 32 they share bits
//! `locus..64 - locus`, where each child receives the OR of both parents'
//! bits. Above 32 neither mask covers bits `64 - locus..locus`, which are
//! cleared in both children.

use rand::Rng;

/// Number of bits in an encoding.
pub const BITS: u32 = u64::BITS;

/// Recombines `a` and `b` around `locus`.
///
/// Returns `(high & a | low & b, high & b | low & a)` with the masks
/// described in the module docs.
///
/// # Panics
/// Panics if `locus >= 64`.
///
/// ```
/// use u_bitga::ga::operators::splice;
///
/// // locus 0 keeps both masks full: each child is a | b.
/// assert_eq!(splice(0b1100, 0b1010, 0), (0b1110, 0b1110));
///
/// // locus 32 is a clean split: high half from the first argument.
/// let (c, d) = splice(u64::MAX, 0, 32);
/// assert_eq!(c, 0xFFFF_FFFF_0000_0000);
/// assert_eq!(d, 0x0000_0000_FFFF_FFFF);
/// ```
pub fn splice(a: u64, b: u64, locus: u32) -> (u64, u64) {
    assert!(locus < BITS, "locus must be in 0..64, got {locus}");

    let low = u64::MAX >> locus;
    let high = low << locus;

    let c = (high & a) | (low & b);
    let d = (high & b) | (low & a);
    (c, d)
}

/// Recombines `a` and `b` around a random locus.
pub fn crossover<R: Rng + ?Sized>(a: u64, b: u64, rng: &mut R) -> (u64, u64) {
    let locus = rng.random_range(0..BITS);
    splice(a, b, locus)
}

/// Flips each bit of `bits` independently with probability `rate`.
///
/// Draws exactly 64 unit reals, scanning from the most significant bit
/// down, and flips when the draw is below `rate`.
pub fn flip_bits<R: Rng + ?Sized>(bits: u64, rate: f64, rng: &mut R) -> u64 {
    let mut x = bits;
    let mut mask = 1u64 << (BITS - 1);
    while mask != 0 {
        if rng.random::<f64>() < rate {
            x ^= mask;
        }
        mask >>= 1;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::Rng;

    #[test]
    fn test_splice_midpoint_is_clean_split() {
        let a = 0xAAAA_AAAA_AAAA_AAAA;
        let b = 0x5555_5555_5555_5555;
        let (c, d) = splice(a, b, 32);
        assert_eq!(c, 0xAAAA_AAAA_5555_5555);
        assert_eq!(d, 0x5555_5555_AAAA_AAAA);
    }

    #[test]
    fn test_splice_locus_zero_is_or() {
        let (c, d) = splice(0xF0, 0x0F, 0);
        assert_eq!(c, 0xFF);
        assert_eq!(d, 0xFF);
    }

    #[test]
    fn test_splice_overlap_band() {
        // locus 8: high = bits 8..64, low = bits 0..56, overlap = bits 8..56.
        let (c, d) = splice(u64::MAX, 0, 8);
        assert_eq!(c, 0xFFFF_FFFF_FFFF_FF00);
        assert_eq!(d, 0x00FF_FFFF_FFFF_FFFF);

        let a = 1 << 20;
        let b = 1 << 30;
        assert_eq!(splice(a, b, 8), (a | b, a | b));
    }

    #[test]
    fn test_splice_high_locus_clears_gap() {
        // locus 63: high = bit 63 only, low = bit 0 only, bits 1..63 cleared.
        let (c, d) = splice(u64::MAX, 0, 63);
        assert_eq!(c, 1 << 63);
        assert_eq!(d, 1);
    }

    #[test]
    #[should_panic(expected = "locus must be in 0..64")]
    fn test_splice_rejects_locus_64() {
        splice(0, 0, 64);
    }

    #[test]
    fn test_identical_parents() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let x: u64 = rng.random();
            for locus in 0..=32 {
                assert_eq!(splice(x, x, locus), (x, x), "locus {locus}");
            }
            for locus in 33..BITS {
                // Bits 64 - locus..locus fall outside both masks.
                let gap = (u64::MAX >> (BITS - locus)) & !(u64::MAX >> locus);
                let kept = x & !gap;
                assert_eq!(splice(x, x, locus), (kept, kept), "locus {locus}");
            }
        }
    }

    #[test]
    fn test_crossover_locus_uniform() {
        // With a = MAX and b = 0 the first child is the high mask, whose
        // trailing zeros give the locus.
        let mut rng = create_rng(42);
        let draws = 64_000;
        let mut counts = [0u32; 64];
        for _ in 0..draws {
            let (c, _) = crossover(u64::MAX, 0, &mut rng);
            counts[c.trailing_zeros() as usize] += 1;
        }
        for (locus, &count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(&count),
                "locus {locus} drawn {count} times, expected about 1000"
            );
        }
    }

    #[test]
    fn test_flip_bits_rate_zero_and_one() {
        let mut rng = create_rng(42);
        let x = 0x0123_4567_89AB_CDEF;
        assert_eq!(flip_bits(x, 0.0, &mut rng), x);
        assert_eq!(flip_bits(x, 1.0, &mut rng), !x);
    }

    #[test]
    fn test_flip_frequency_matches_rate() {
        let mut rng = create_rng(42);
        let rate = 0.1;
        let trials = 10_000;
        let mut per_bit = [0u32; 64];

        for _ in 0..trials {
            let x: u64 = rng.random();
            let flipped = x ^ flip_bits(x, rate, &mut rng);
            for (bit, count) in per_bit.iter_mut().enumerate() {
                if flipped >> bit & 1 == 1 {
                    *count += 1;
                }
            }
        }

        let total: u32 = per_bit.iter().sum();
        let overall = total as f64 / (trials as f64 * 64.0);
        assert!(
            (overall - rate).abs() < 0.003,
            "overall flip frequency {overall} too far from {rate}"
        );
        for (bit, &count) in per_bit.iter().enumerate() {
            let freq = count as f64 / trials as f64;
            assert!(
                (freq - rate).abs() < 0.02,
                "bit {bit} flipped with frequency {freq}, expected about {rate}"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_children_bits_come_from_parents(
            a in any::<u64>(),
            b in any::<u64>(),
            locus in 0u32..64
        ) {
            let (c, d) = splice(a, b, locus);

            for bit in 0..BITS {
                let (ab, bb) = (a >> bit & 1, b >> bit & 1);
                let (cb, db) = (c >> bit & 1, d >> bit & 1);
                let in_high = bit >= locus;
                let in_low = bit < BITS - locus;
                match (in_high, in_low) {
                    (true, true) => {
                        prop_assert_eq!(cb, ab | bb);
                        prop_assert_eq!(db, ab | bb);
                    }
                    (true, false) => {
                        prop_assert_eq!(cb, ab);
                        prop_assert_eq!(db, bb);
                    }
                    (false, true) => {
                        prop_assert_eq!(cb, bb);
                        prop_assert_eq!(db, ab);
                    }
                    (false, false) => {
                        prop_assert_eq!(cb, 0);
                        prop_assert_eq!(db, 0);
                    }
                }
            }
        }

        #[test]
        fn prop_midpoint_children_partition_parents(a in any::<u64>(), b in any::<u64>()) {
            let (c, d) = splice(a, b, 32);
            prop_assert_eq!(c ^ d, a ^ b);
            prop_assert_eq!(c & d, a & b);
        }
    }
}
