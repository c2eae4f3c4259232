use core::fmt;
use std::time::Duration;

use crate::dispatch::Strategy;
use crate::harness::NumericType;

/// Timing of one sub-benchmark, e.g. `Int_Generics`.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub strategy: Strategy,
    pub iterations: usize,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn ns_per_op(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }

    /// Additions per second. Infinite if the run was too short to measure.
    pub fn ops_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            f64::INFINITY
        } else {
            self.iterations as f64 / secs
        }
    }
}

/// All sub-benchmarks for one numeric type.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub numeric: NumericType,
    pub measurements: Vec<Measurement>,
}

impl Report {
    pub fn get(&self, strategy: Strategy) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.strategy == strategy)
    }

    /// The measurement with the shortest elapsed time.
    pub fn fastest(&self) -> Option<&Measurement> {
        self.measurements.iter().min_by_key(|m| m.elapsed)
    }

    /// Throughput of each case relative to the fastest one, which scores 1.0.
    pub fn relative_throughput(&self) -> Vec<(&str, f64)> {
        let Some(fastest) = self.fastest() else {
            return Vec::new();
        };
        let best = fastest.ns_per_op();
        self.measurements
            .iter()
            .map(|m| {
                let ns = m.ns_per_op();
                let ratio = if ns == 0.0 { 1.0 } else { best / ns };
                (m.name.as_str(), ratio)
            })
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .measurements
            .iter()
            .map(|m| m.name.len())
            .max()
            .unwrap_or(0);
        for (m, (_, relative)) in self.measurements.iter().zip(self.relative_throughput()) {
            writeln!(
                f,
                "{:<width$}  {:>12} iters  {:>10.3} ns/op  {:>6.2}x",
                m.name,
                m.iterations,
                m.ns_per_op(),
                relative,
            )?;
        }
        Ok(())
    }
}
