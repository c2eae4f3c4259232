//! Throughput comparison of the addition strategies.
//!
//! For each numeric type the harness draws `iterations + 1` random inputs and
//! times every strategy over the same pairs `(numbers[i], numbers[i + 1])`.
//! Sub-benchmarks run one after another and are named
//! `<Type>_<Strategy>`, e.g. `Float32_TypeAssertion`.
//!
//! Before timing, a prefix of the inputs is summed by every strategy and the
//! results compared, so a report never compares strategies that disagree.
//!
//! # Example
//!
//! ```
//! use polynum_core::harness::{Harness, HarnessOptions, NumericType};
//!
//! let harness = Harness::new(HarnessOptions {
//!     iterations: 1_000,
//!     seed: Some(42),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let report = harness.run(NumericType::Int64).unwrap();
//! assert_eq!(report.measurements.len(), 4);
//! println!("{report}");
//! ```

use core::any::Any;
use core::fmt;
use std::hint::black_box;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

use crate::constraints::Number;
use crate::dispatch::{self, Strategy};
use crate::values::Value;

mod options;
mod report;

pub use options::{HarnessOptions, HarnessOptionsOverride};
pub use report::{Measurement, Report};

/// Pairs compared across strategies before timing.
const VERIFY_LIMIT: usize = 1024;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarnessError {
    #[error("iterations must be at least 1")]
    NoIterations,

    #[error("max_value must be at least 1")]
    EmptyRange,

    #[error("{numeric}_{strategy} disagrees with {numeric}_RegularFunction at input {index}")]
    Divergence {
        numeric: NumericType,
        strategy: Strategy,
        index: usize,
    },
}

/// The operand types benchmarked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericType {
    Int,
    Float32,
    Int64,
}

impl NumericType {
    pub const ALL: [NumericType; 3] = [NumericType::Int, NumericType::Float32, NumericType::Int64];

    pub fn name(self) -> &'static str {
        match self {
            NumericType::Int => "Int",
            NumericType::Float32 => "Float32",
            NumericType::Int64 => "Int64",
        }
    }

    /// Sub-benchmark name, e.g. `Int_Reflection`.
    pub fn case_name(self, strategy: Strategy) -> String {
        format!("{}_{}", self.name(), strategy.name())
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operand types the harness can drive through all four strategies.
trait Operand: Number + Any + Into<Value> {
    /// The per-type function for this operand type.
    const REGULAR: fn(Self, Self) -> Self;

    fn from_sample(sample: u32) -> Self;
}

impl Operand for isize {
    const REGULAR: fn(Self, Self) -> Self = dispatch::add_int;

    fn from_sample(sample: u32) -> Self {
        sample as isize
    }
}

impl Operand for f32 {
    const REGULAR: fn(Self, Self) -> Self = dispatch::add_float32;

    fn from_sample(sample: u32) -> Self {
        sample as f32
    }
}

impl Operand for i64 {
    const REGULAR: fn(Self, Self) -> Self = dispatch::add_int64;

    fn from_sample(sample: u32) -> Self {
        sample as i64
    }
}

#[derive(Debug, Clone)]
pub struct Harness {
    options: HarnessOptions,
}

impl Harness {
    pub fn new(options: HarnessOptions) -> Result<Self, HarnessError> {
        if options.iterations == 0 {
            return Err(HarnessError::NoIterations);
        }
        if options.max_value == 0 {
            return Err(HarnessError::EmptyRange);
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &HarnessOptions {
        &self.options
    }

    /// Runs the four sub-benchmarks for one numeric type.
    pub fn run(&self, numeric: NumericType) -> Result<Report, HarnessError> {
        match numeric {
            NumericType::Int => self.run_typed::<isize>(numeric),
            NumericType::Float32 => self.run_typed::<f32>(numeric),
            NumericType::Int64 => self.run_typed::<i64>(numeric),
        }
    }

    /// Runs every numeric type in [`NumericType::ALL`] order.
    pub fn run_all(&self) -> Result<Vec<Report>, HarnessError> {
        NumericType::ALL
            .into_iter()
            .map(|numeric| self.run(numeric))
            .collect()
    }

    fn rng(&self) -> StdRng {
        match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn inputs<T: Operand>(&self) -> Vec<T> {
        let mut rng = self.rng();
        let max_value = self.options.max_value;
        (0..=self.options.iterations)
            .map(|_| T::from_sample(rng.gen_range(0..max_value)))
            .collect()
    }

    fn run_typed<T: Operand>(&self, numeric: NumericType) -> Result<Report, HarnessError> {
        debug!(%numeric, iterations = self.options.iterations, "generating inputs");
        let numbers = self.inputs::<T>();

        verify(numeric, &numbers)?;

        let measurements = Strategy::ALL
            .into_iter()
            .map(|strategy| self.measure(numeric, strategy, &numbers))
            .collect();

        Ok(Report {
            numeric,
            measurements,
        })
    }

    fn measure<T: Operand>(
        &self,
        numeric: NumericType,
        strategy: Strategy,
        numbers: &[T],
    ) -> Measurement {
        let iterations = self.options.iterations;
        let start = Instant::now();
        match strategy {
            Strategy::RegularFunction => {
                for i in 0..iterations {
                    black_box(T::REGULAR(black_box(numbers[i]), black_box(numbers[i + 1])));
                }
            }
            Strategy::TypeAssertion => {
                for i in 0..iterations {
                    black_box(dispatch::add_interface(
                        black_box(&numbers[i]),
                        black_box(&numbers[i + 1]),
                    ));
                }
            }
            Strategy::Generics => {
                for i in 0..iterations {
                    black_box(dispatch::add_numbers(
                        black_box(numbers[i]),
                        black_box(numbers[i + 1]),
                    ));
                }
            }
            Strategy::Reflection => {
                for i in 0..iterations {
                    black_box(dispatch::add_reflection(
                        black_box(numbers[i]),
                        black_box(numbers[i + 1]),
                    ));
                }
            }
        }
        let measurement = Measurement {
            name: numeric.case_name(strategy),
            strategy,
            iterations,
            elapsed: start.elapsed(),
        };
        info!(
            case = %measurement.name,
            ns_per_op = measurement.ns_per_op(),
            "measured"
        );
        measurement
    }
}

/// Checks that every strategy matches the per-type function on a prefix of
/// the inputs.
fn verify<T: Operand>(numeric: NumericType, numbers: &[T]) -> Result<(), HarnessError> {
    let pairs = numbers.len().saturating_sub(1).min(VERIFY_LIMIT);
    for index in 0..pairs {
        let (m, n) = (numbers[index], numbers[index + 1]);
        let expected: Value = T::REGULAR(m, n).into();
        let results = [
            (Strategy::TypeAssertion, dispatch::add_interface(&m, &n)),
            (Strategy::Generics, Some(dispatch::add_numbers(m, n).into())),
            (Strategy::Reflection, dispatch::add_reflection(m, n)),
        ];
        for (strategy, result) in results {
            if result.as_ref() != Some(&expected) {
                return Err(HarnessError::Divergence {
                    numeric,
                    strategy,
                    index,
                });
            }
        }
    }
    debug!(%numeric, pairs, "strategies agree");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness(iterations: usize) -> Harness {
        Harness::new(HarnessOptions {
            iterations,
            seed: Some(7),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_invalid_options() {
        let no_iterations = HarnessOptions {
            iterations: 0,
            ..Default::default()
        };
        assert_eq!(
            Harness::new(no_iterations).unwrap_err(),
            HarnessError::NoIterations
        );

        let empty_range = HarnessOptions {
            max_value: 0,
            ..Default::default()
        };
        assert_eq!(
            Harness::new(empty_range).unwrap_err(),
            HarnessError::EmptyRange
        );
    }

    #[test]
    fn test_seeded_inputs_are_reproducible() {
        let harness = harness(64);
        let a = harness.inputs::<i64>();
        let b = harness.inputs::<i64>();
        assert_eq!(a, b);
        assert_eq!(a.len(), 65);
        assert!(a.iter().all(|n| (0..1000).contains(n)));
    }

    #[test]
    fn test_case_names() {
        assert_eq!(
            NumericType::Int.case_name(Strategy::RegularFunction),
            "Int_RegularFunction"
        );
        assert_eq!(
            NumericType::Float32.case_name(Strategy::TypeAssertion),
            "Float32_TypeAssertion"
        );
        assert_eq!(
            NumericType::Int64.case_name(Strategy::Reflection),
            "Int64_Reflection"
        );
    }

    #[test]
    fn test_verify_accepts_agreeing_strategies() {
        assert!(verify(NumericType::Float32, &[1.5f32, 2.25, 1e6, 0.0]).is_ok());
        assert!(verify::<isize>(NumericType::Int, &[]).is_ok());
    }

    crate::numeric_newtype! {
        /// Invisible to type assertion, which only downcasts to primitives.
        struct Gauge(f64): Float, Ordered, Number;
    }

    impl Operand for Gauge {
        const REGULAR: fn(Self, Self) -> Self = |m, n| m + n;

        fn from_sample(sample: u32) -> Self {
            Gauge(sample as f64)
        }
    }

    #[test]
    fn test_verify_reports_divergence() {
        let err = verify(NumericType::Float32, &[Gauge(1.0), Gauge(2.0)]).unwrap_err();
        assert_eq!(
            err,
            HarnessError::Divergence {
                numeric: NumericType::Float32,
                strategy: Strategy::TypeAssertion,
                index: 0,
            }
        );
        assert_eq!(
            err.to_string(),
            "Float32_TypeAssertion disagrees with Float32_RegularFunction at input 0"
        );
    }

    #[test]
    fn test_verify_accepts_overflowing_inputs() {
        assert!(verify(NumericType::Int64, &[i64::MAX, 1, i64::MIN, -1]).is_ok());
        assert!(verify(NumericType::Int, &[isize::MAX, isize::MAX]).is_ok());
    }

    #[test]
    fn test_run_reports_every_strategy() {
        let report = harness(100).run(NumericType::Int).unwrap();
        assert_eq!(report.numeric, NumericType::Int);

        let names: Vec<&str> = report.measurements.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Int_RegularFunction",
                "Int_TypeAssertion",
                "Int_Generics",
                "Int_Reflection"
            ]
        );
        assert!(report.measurements.iter().all(|m| m.iterations == 100));
    }
}
