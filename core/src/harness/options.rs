/// Options controlling a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessOptions {
    /// Additions timed per strategy.
    pub iterations: usize,

    /// Seed for input generation. `None` seeds from system entropy, which
    /// makes runs non-reproducible.
    pub seed: Option<u64>,

    /// Inputs are drawn uniformly from `0..max_value`.
    pub max_value: u32,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            seed: None,
            max_value: 1000,
        }
    }
}

impl HarnessOptions {
    /// Applies every field set in `options_override`.
    pub fn override_with(&mut self, options_override: &HarnessOptionsOverride) {
        if let Some(iterations) = options_override.iterations {
            self.iterations = iterations;
        }
        if let Some(seed) = options_override.seed {
            self.seed = Some(seed);
        }
        if let Some(max_value) = options_override.max_value {
            self.max_value = max_value;
        }
    }
}

/// Partial [`HarnessOptions`]; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessOptionsOverride {
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    pub max_value: Option<u32>,
}
