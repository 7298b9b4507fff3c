//! Guess-count distribution of past wins

use crate::game::MAX_GUESSES;

/// Longest bar before all bars are scaled down
pub const MAX_BAR_WIDTH: usize = 17;

/// Number of won games per guess count (1..=6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Histogram {
    buckets: [usize; MAX_GUESSES as usize],
}

impl Histogram {
    /// Bucket a list of guess counts
    ///
    /// Counts outside 1..=6 are ignored.
    #[must_use]
    pub fn from_guess_counts(counts: &[u8]) -> Self {
        let mut histogram = Self::default();
        for &guesses in counts {
            match histogram.buckets.get_mut(usize::from(guesses).wrapping_sub(1)) {
                Some(bucket) => *bucket += 1,
                None => log::warn!("ignoring out-of-range guess count {guesses}"),
            }
        }
        histogram
    }

    /// Number of games won in exactly `guesses` attempts
    #[must_use]
    pub fn count(&self, guesses: u8) -> usize {
        self.buckets
            .get(usize::from(guesses).wrapping_sub(1))
            .copied()
            .unwrap_or(0)
    }

    /// Bar length for every bucket, as `(guesses, length)` pairs
    ///
    /// Bars are raw counts unless the largest bucket exceeds
    /// `MAX_BAR_WIDTH`, in which case every bar is scaled by
    /// `MAX_BAR_WIDTH / max` and rounded half to even.
    ///
    /// # Examples
    /// ```
    /// use worble::store::Histogram;
    ///
    /// let mut counts = vec![2; 5];
    /// counts.extend([3; 20]);
    /// counts.extend([4; 3]);
    ///
    /// let bars = Histogram::from_guess_counts(&counts).bars();
    /// assert_eq!(bars, vec![(1, 0), (2, 4), (3, 17), (4, 3), (5, 0), (6, 0)]);
    /// ```
    #[must_use]
    pub fn bars(&self) -> Vec<(u8, usize)> {
        let max = self.buckets.iter().copied().max().unwrap_or(0);
        let scale = if max > MAX_BAR_WIDTH {
            Some(max as f64 / MAX_BAR_WIDTH as f64)
        } else {
            None
        };

        (1..=MAX_GUESSES)
            .zip(self.buckets)
            .map(|(guesses, count)| {
                let width = scale.map_or(count, |scale| {
                    (count as f64 / scale).round_ties_even() as usize
                });
                (guesses, width)
            })
            .collect()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(spec: &[(u8, usize)]) -> Vec<u8> {
        spec.iter()
            .flat_map(|&(guesses, n)| std::iter::repeat_n(guesses, n))
            .collect()
    }

    #[test]
    fn histogram_empty_has_all_buckets() {
        let histogram = Histogram::from_guess_counts(&[]);
        assert_eq!(histogram.total(), 0);
        assert_eq!(
            histogram.bars(),
            vec![(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0)]
        );
    }

    #[test]
    fn histogram_unscaled_at_threshold() {
        let histogram = Histogram::from_guess_counts(&counts(&[(1, 1), (4, 17)]));
        let bars = histogram.bars();
        assert_eq!(bars[0], (1, 1));
        assert_eq!(bars[3], (4, 17));
    }

    #[test]
    fn histogram_scales_above_threshold() {
        let histogram = Histogram::from_guess_counts(&counts(&[(2, 5), (3, 20), (4, 3)]));
        assert_eq!(histogram.count(3), 20);

        let bars = histogram.bars();
        // 5 / (20 / 17) = 4.25, 3 / (20 / 17) = 2.55
        assert_eq!(bars, vec![(1, 0), (2, 4), (3, 17), (4, 3), (5, 0), (6, 0)]);
    }

    #[test]
    fn histogram_rounds_half_to_even() {
        // Scale is 34 / 17 = 2, so 17 -> 8.5 -> 8
        let histogram = Histogram::from_guess_counts(&counts(&[(1, 17), (2, 34), (3, 3)]));
        let bars = histogram.bars();
        assert_eq!(bars[0], (1, 8));
        assert_eq!(bars[1], (2, 17));
        // 3 / 2 = 1.5 -> 2
        assert_eq!(bars[2], (3, 2));
    }

    #[test]
    fn histogram_ignores_out_of_range() {
        let histogram = Histogram::from_guess_counts(&[0, 1, 7, 6, 200]);
        assert_eq!(histogram.total(), 2);
        assert_eq!(histogram.count(1), 1);
        assert_eq!(histogram.count(6), 1);
        assert_eq!(histogram.count(0), 0);
    }
}
