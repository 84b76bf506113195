// ABOUTME: Step sampler for decimated exports: counts nonzero values and admits one per run.
// ABOUTME: Zeros are skipped outright and never advance the counter.

/// Run-counting sampler.
///
/// Every nonzero value is checked against the counter before the counter is
/// incremented. A value is admitted when the counter equals `step`, which
/// also resets the counter to zero; the increment that follows leaves it at
/// one. For `step >= 1` this admits the `(step + 1)`-th nonzero value and then
/// every `step`-th nonzero value after it. For `step == 0` only the first
/// nonzero value is ever admitted.
///
/// Values are compared after conversion to `f32`, so anything that underflows
/// single precision counts as zero. NaN is not zero.
#[derive(Debug, Clone)]
pub struct StepSampler {
    step: usize,
    count: usize,
}

impl StepSampler {
    /// Create a sampler with the counter at zero.
    pub fn new(step: usize) -> Self {
        Self { step, count: 0 }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Feed one value; returns true when it should be written.
    pub fn admit(&mut self, value: f32) -> bool {
        if value == 0.0 {
            return false;
        }

        let hit = self.count == self.step;
        if hit {
            self.count = 0;
        }
        self.count = self.count.saturating_add(1);
        hit
    }

    /// Iterate over the values of `values` that a fresh sampler admits,
    /// already narrowed to `f32`.
    pub fn sample(values: &[f64], step: usize) -> impl Iterator<Item = f32> + '_ {
        let mut sampler = Self::new(step);
        values
            .iter()
            .map(|&v| v as f32)
            .filter(move |&x| sampler.admit(x))
    }
}

/// Number of values a sampled export of `values` writes.
pub fn planned_writes(values: &[f64], step: usize) -> usize {
    StepSampler::sample(values, step).count()
}
