use super::{Counter, Sequence};
use crate::error::{LdsError, Result};

/// Van der Corput value of `k` in `base`: the base-`base` digits of `k`
/// reversed and placed after the radix point.
///
/// # Example
///
/// ```rust
/// # use ldsgen::seq::vdc;
/// assert_eq!(vdc(1, 2), 0.5);
/// assert_eq!(vdc(6, 2), 0.375);
/// assert_eq!(vdc(7, 10), 0.7);
/// ```
#[inline]
pub fn vdc(k: u64, base: u64) -> f64 {
    let mut k = k;
    let mut res = 0.0;
    let mut denom = 1.0;
    while k != 0 {
        denom *= base as f64;
        let rem = k % base;
        k /= base;
        res += rem as f64 / denom;
    }
    res
}

/// Digit-reversal map for a single, validated base
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vdc {
    base: u64,
}

impl Vdc {
    pub fn new(base: u64) -> Result<Self> {
        if base < 2 {
            Err(LdsError::BaseTooSmall(base))
        } else {
            Ok(Vdc { base })
        }
    }

    /// Validate several bases at once
    pub fn many(bases: &[u64]) -> Result<Vec<Self>> {
        bases.iter().map(|&base| Vdc::new(base)).collect()
    }

    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    #[inline]
    pub fn eval(&self, k: u64) -> f64 {
        vdc(k, self.base)
    }
}

/// Van der Corput sequence generator
///
/// # Example
///
/// ```rust
/// use ldsgen::prelude::*;
///
/// let vgen = VdCorput::new(2).unwrap();
/// assert_eq!(vgen.pop(), 0.5);
/// assert_eq!(vgen.pop(), 0.25);
/// assert_eq!(vgen.pop(), 0.75);
///
/// vgen.reseed(0);
/// assert_eq!(vgen.pop(), 0.5);
/// ```
#[derive(Debug)]
pub struct VdCorput {
    vdc: Vdc,
    counter: Counter,
}

impl VdCorput {
    pub fn new(base: u64) -> Result<Self> {
        Ok(VdCorput {
            vdc: Vdc::new(base)?,
            counter: Counter::new(),
        })
    }

    pub fn base(&self) -> u64 {
        self.vdc.base()
    }
}

impl Sequence for VdCorput {
    type Item = f64;

    fn counter(&self) -> &Counter {
        &self.counter
    }

    fn point(&self, index: u64) -> f64 {
        self.vdc.eval(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;

    #[test]
    fn vdc_of_zero_is_zero() {
        for base in 2..20 {
            assert_eq!(vdc(0, base), 0.0);
        }
    }

    #[test]
    fn vdc_base_3() {
        assert_relative_eq!(vdc(1, 3), 1.0 / 3.0);
        assert_relative_eq!(vdc(2, 3), 2.0 / 3.0);
        assert_relative_eq!(vdc(3, 3), 1.0 / 9.0);
        assert_relative_eq!(vdc(4, 3), 4.0 / 9.0);
    }

    #[test]
    fn new_rejects_small_bases() {
        assert_eq!(VdCorput::new(0).unwrap_err(), LdsError::BaseTooSmall(0));
        assert_eq!(VdCorput::new(1).unwrap_err(), LdsError::BaseTooSmall(1));
        assert!(VdCorput::new(2).is_ok());
    }

    #[test]
    fn many_rejects_any_small_base() {
        assert!(Vdc::many(&[2, 3, 5]).is_ok());
        assert_eq!(Vdc::many(&[2, 1, 5]), Err(LdsError::BaseTooSmall(1)));
    }

    #[test]
    fn base_2_reference_values() {
        let vgen = VdCorput::new(2).unwrap();
        let xs: Vec<f64> = (0..5).map(|_| vgen.pop()).collect();
        assert_eq!(xs, vec![0.5, 0.25, 0.75, 0.125, 0.625]);

        vgen.reseed(0);
        assert_eq!(vgen.pop(), 0.5);
    }

    #[test]
    fn pops_stay_in_unit_interval() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let base: u64 = rng.gen_range(2..101);
            let vgen = VdCorput::new(base).unwrap();
            for _ in 0..100 {
                let x = vgen.pop();
                assert!((0.0..1.0).contains(&x), "vdc {x} out of range");
            }
        }
    }

    #[test]
    fn reseed_is_deterministic() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let base: u64 = rng.gen_range(2..51);
            let seed: u64 = rng.gen_range(0..1000);
            let vgen_a = VdCorput::new(base).unwrap();
            let vgen_b = VdCorput::new(base).unwrap();
            vgen_a.reseed(seed);
            vgen_b.reseed(seed);
            for _ in 0..10 {
                assert_eq!(vgen_a.pop(), vgen_b.pop());
            }
        }
    }

    #[test]
    fn peek_matches_pop_and_keeps_index() {
        let vgen = VdCorput::new(3).unwrap();
        for i in 0..10 {
            let peeked = vgen.peek();
            assert_eq!(vgen.get_index(), i);
            assert_eq!(peeked, vgen.pop());
        }
    }

    #[test]
    fn skip_matches_discarded_pops() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let base: u64 = rng.gen_range(2..51);
            let n_skip: u64 = rng.gen_range(0..100);

            let vgen_a = VdCorput::new(base).unwrap();
            let vgen_b = VdCorput::new(base).unwrap();
            vgen_a.reseed(0);
            vgen_b.reseed(0);

            vgen_b.skip(n_skip);
            for _ in 0..n_skip {
                vgen_a.pop();
            }
            assert_eq!(vgen_a.get_index(), vgen_b.get_index());
            assert_eq!(vgen_a.pop(), vgen_b.pop());
        }
    }

    #[test]
    fn batch_matches_sequential_pops() {
        let vgen_a = VdCorput::new(5).unwrap();
        let vgen_b = VdCorput::new(5).unwrap();
        vgen_a.reseed(17);
        vgen_b.reseed(17);

        let xs = vgen_a.batch(25);
        let ys: Vec<f64> = (0..25).map(|_| vgen_b.pop()).collect();
        assert_eq!(xs.len(), 25);
        assert_eq!(xs, ys);
        assert_eq!(vgen_a.get_index(), 42);
    }

    #[test]
    fn empty_batch_does_not_advance() {
        let vgen = VdCorput::new(2).unwrap();
        assert!(vgen.batch(0).is_empty());
        assert_eq!(vgen.get_index(), 0);
    }

    #[test]
    fn par_batch_matches_batch() {
        let vgen_a = VdCorput::new(7).unwrap();
        let vgen_b = VdCorput::new(7).unwrap();
        assert_eq!(vgen_a.par_batch(1000), vgen_b.batch(1000));
        assert_eq!(vgen_a.get_index(), 1000);
    }

    #[test]
    fn index_counts_pops_and_follows_reseed() {
        let vgen = VdCorput::new(2).unwrap();
        assert_eq!(vgen.get_index(), 0);
        for i in 1..=100 {
            vgen.pop();
            assert_eq!(vgen.get_index(), i);
        }
        vgen.reseed(7);
        assert_eq!(vgen.get_index(), 7);
        vgen.pop();
        assert_eq!(vgen.get_index(), 8);
    }

    #[test]
    fn reseed_is_absolute() {
        let vgen = VdCorput::new(2).unwrap();
        vgen.skip(50);
        vgen.reseed(2);
        assert_eq!(vgen.pop(), 0.75);
    }

    #[test]
    fn pop_wraps_past_the_last_index() {
        let vgen = VdCorput::new(2).unwrap();
        vgen.reseed(u64::MAX);
        assert_eq!(vgen.peek(), 0.0);
        assert_eq!(vgen.get_index(), u64::MAX);
        assert_eq!(vgen.pop(), 0.0);
        assert_eq!(vgen.get_index(), 0);
        assert_eq!(vgen.pop(), 0.5);
    }

    #[test]
    fn batch_and_skip_wrap_like_pop() {
        let start = u64::MAX - 1;
        let vgen_a = VdCorput::new(2).unwrap();
        let vgen_b = VdCorput::new(2).unwrap();

        vgen_a.reseed(start);
        vgen_b.reseed(start);
        let pops: Vec<f64> = (0..3).map(|_| vgen_b.pop()).collect();
        assert_eq!(vgen_a.batch(3), pops);
        assert_eq!(pops, vec![vdc(u64::MAX, 2), 0.0, 0.5]);

        vgen_a.reseed(start);
        assert_eq!(vgen_a.par_batch(3), pops);

        vgen_a.reseed(start);
        vgen_a.skip(3);
        assert_eq!(vgen_a.get_index(), vgen_b.get_index());
        assert_eq!(vgen_a.pop(), vgen_b.pop());
    }

    #[test]
    fn iter_matches_pop() {
        let vgen_a = VdCorput::new(3).unwrap();
        let vgen_b = VdCorput::new(3).unwrap();
        let xs: Vec<f64> = vgen_a.iter().take(50).collect();
        let ys: Vec<f64> = (0..50).map(|_| vgen_b.pop()).collect();
        assert_eq!(xs, ys);
        assert_eq!(vgen_a.get_index(), 50);
    }

    #[test]
    fn concurrent_pops_consume_distinct_indices() {
        let vgen = &VdCorput::new(2).unwrap();
        let n_threads = 8;
        let n_pops = 1_000;

        let mut xs: Vec<f64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..n_threads)
                .map(|_| {
                    s.spawn(move || {
                        (0..n_pops).map(|_| vgen.pop()).collect::<Vec<f64>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(vgen.get_index(), (n_threads * n_pops) as u64);

        let mut expected: Vec<f64> =
            (1..=(n_threads * n_pops) as u64).map(|k| vdc(k, 2)).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(xs, expected);
    }
}
