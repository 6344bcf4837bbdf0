///
/// Online estimator of count, mean, and sample variance over a stream of
/// values, using Welford's algorithm.
///
/// The whole summary is held in three numbers (count, running mean, and the
/// accumulated sum of squared differences), so a full scan of a file needs a
/// single forward pass and constant memory, and the variance does not suffer
/// the cancellation errors of the naive sum/sum-of-squares approach.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunningStat {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningStat {
    pub fn new() -> Self {
        RunningStat::default()
    }

    /// Folds one value into the running summary.
    ///
    /// Non-finite values are not rejected; a NaN or infinity propagates into
    /// the mean and variance of this accumulator.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Number of values pushed so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean of the pushed values; 0.0 when nothing has been pushed yet.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance (M2 / (count - 1)) of the pushed values.
    ///
    /// Returns 0.0 for zero or one observation rather than NaN, so callers
    /// can print every bin without guarding near-empty ones.
    pub fn variance(&self) -> f64 {
        if self.count > 1 {
            self.m2 / (self.count - 1) as f64
        } else {
            0.0
        }
    }
}
