//! Randomized driver that runs a partition routine over many small random
//! inputs and validates every result.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::check::{is_permutation_of, is_three_way_partitioned};
use crate::{InvalidArgument, PartitionStrategy, all_strategies, partition, strategy_name};

const DEFAULT_TRIALS: usize = 1000;
const DEFAULT_MAX_LEN: usize = 100;
const DEFAULT_VALUE_BOUND: u32 = 10;

/// Inputs have a length in `1..max_len` and values in `0..value_bound`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HarnessConfig {
    pub trials: usize,
    pub max_len: usize,
    pub value_bound: u32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_len: DEFAULT_MAX_LEN,
            value_bound: DEFAULT_VALUE_BOUND,
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HarnessConfigError {
    #[error("max_len must be at least 2, got {0}")]
    MaxLenTooSmall(usize),
    #[error("value_bound must be positive")]
    ZeroValueBound,
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<(), HarnessConfigError> {
        if self.max_len < 2 {
            return Err(HarnessConfigError::MaxLenTooSmall(self.max_len));
        }
        if self.value_bound == 0 {
            return Err(HarnessConfigError::ZeroValueBound);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FailureKind {
    #[error("result is not three-way partitioned")]
    NotPartitioned,
    #[error("result is not a permutation of the input")]
    NotPermutation,
    #[error("valid input was rejected: {0}")]
    Rejected(InvalidArgument),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{strategy} failed trial {trial} with pivot {pivot} ({kind})\nbefore: {before:?}\n after: {after:?}")]
pub struct TrialFailure {
    pub strategy: &'static str,
    pub trial: usize,
    pub pivot: u32,
    pub before: Vec<u32>,
    pub after: Vec<u32>,
    pub kind: FailureKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrialReport {
    pub strategy: &'static str,
    pub trials: usize,
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] HarnessConfigError),
    #[error(transparent)]
    Trial(#[from] TrialFailure),
}

/// Draws one input and a pivot index into it.
pub fn random_case<R: Rng + ?Sized>(
    rng: &mut R,
    config: &HarnessConfig,
) -> Result<(Vec<u32>, usize), HarnessConfigError> {
    config.validate()?;
    Ok(draw_case(rng, config))
}

// Callers validate `config` first.
fn draw_case<R: Rng + ?Sized>(rng: &mut R, config: &HarnessConfig) -> (Vec<u32>, usize) {
    let len = rng.random_range(1..config.max_len);
    let data = (0..len)
        .map(|_| rng.random_range(0..config.value_bound))
        .collect::<Vec<_>>();
    let pivot_index = rng.random_range(0..len);
    (data, pivot_index)
}

pub fn run_trials<R: Rng + ?Sized>(
    strategy: PartitionStrategy,
    config: &HarnessConfig,
    rng: &mut R,
) -> Result<TrialReport, HarnessError> {
    run_trials_with(strategy_name(strategy), config, rng, |data, pivot_index| {
        partition(strategy, data, pivot_index)
    })
}

/// Runs `config.trials` random trials of `partition_fn` and stops at the first
/// output that is not a three-way partition of its input.
pub fn run_trials_with<R, F>(
    label: &'static str,
    config: &HarnessConfig,
    rng: &mut R,
    mut partition_fn: F,
) -> Result<TrialReport, HarnessError>
where
    R: Rng + ?Sized,
    F: FnMut(&mut [u32], usize) -> Result<(), InvalidArgument>,
{
    config.validate()?;

    for trial in 0..config.trials {
        let (before, pivot_index) = draw_case(rng, config);
        let pivot = before[pivot_index];
        let mut after = before.clone();
        trace!(strategy = label, trial, len = before.len(), pivot, "trial");

        let outcome = match partition_fn(&mut after, pivot_index) {
            Err(err) => Err(FailureKind::Rejected(err)),
            Ok(()) if !is_three_way_partitioned(&after, &pivot) => Err(FailureKind::NotPartitioned),
            Ok(()) if !is_permutation_of(&after, &before) => Err(FailureKind::NotPermutation),
            Ok(()) => Ok(()),
        };

        if let Err(kind) = outcome {
            let failure = TrialFailure {
                strategy: label,
                trial,
                pivot,
                before,
                after,
                kind,
            };
            warn!(strategy = label, trial, "{failure}");
            return Err(failure.into());
        }
    }

    debug!(strategy = label, trials = config.trials, "all trials passed");
    Ok(TrialReport {
        strategy: label,
        trials: config.trials,
    })
}

/// Runs every strategy in [`all_strategies`] order.
pub fn run_all<R: Rng + ?Sized>(
    config: &HarnessConfig,
    rng: &mut R,
) -> Result<Vec<TrialReport>, HarnessError> {
    all_strategies()
        .iter()
        .map(|&strategy| run_trials(strategy, config, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn default_config_passes_every_strategy() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let reports = run_all(&HarnessConfig::default(), &mut rng).unwrap();
        let names = reports.iter().map(|r| r.strategy).collect::<Vec<_>>();
        assert_eq!(names, ["quadratic", "two_pass", "one_pass"]);
        assert!(reports.iter().all(|r| r.trials == 1000));
    }

    #[test]
    fn random_case_respects_config() {
        let mut rng = StdRng::seed_from_u64(0xC0DE_0001);
        let config = HarnessConfig {
            trials: 0,
            max_len: 5,
            value_bound: 3,
        };
        for _ in 0..500 {
            let (data, pivot_index) = random_case(&mut rng, &config).unwrap();
            assert!((1..5).contains(&data.len()));
            assert!(pivot_index < data.len());
            assert!(data.iter().all(|&x| x < 3));
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = HarnessConfig {
            max_len: 1,
            ..HarnessConfig::default()
        };
        assert!(matches!(
            run_trials(PartitionStrategy::OnePass, &config, &mut rng),
            Err(HarnessError::Config(HarnessConfigError::MaxLenTooSmall(1)))
        ));

        let config = HarnessConfig {
            value_bound: 0,
            ..HarnessConfig::default()
        };
        assert_eq!(config.validate(), Err(HarnessConfigError::ZeroValueBound));
    }

    #[test]
    fn random_case_rejects_empty_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = HarnessConfig {
            trials: 1,
            max_len: 1,
            value_bound: 10,
        };
        assert_eq!(
            random_case(&mut rng, &config),
            Err(HarnessConfigError::MaxLenTooSmall(1))
        );

        let config = HarnessConfig {
            trials: 1,
            max_len: 10,
            value_bound: 0,
        };
        assert_eq!(
            random_case(&mut rng, &config),
            Err(HarnessConfigError::ZeroValueBound)
        );
    }

    #[test]
    fn reports_unpartitioned_output() {
        let mut rng = StdRng::seed_from_u64(0xBAD0_0001);
        let result = run_trials_with(
            "reverse_sort",
            &HarnessConfig::default(),
            &mut rng,
            |data, _| {
                data.sort_unstable_by(|a, b| b.cmp(a));
                Ok(())
            },
        );

        let Err(HarnessError::Trial(failure)) = result else {
            panic!("descending order must fail for some trial");
        };
        assert_eq!(failure.strategy, "reverse_sort");
        assert_eq!(failure.kind, FailureKind::NotPartitioned);
        assert!(is_permutation_of(&failure.before, &failure.after));
        assert!(failure.to_string().contains("before:"));
    }

    #[test]
    fn reports_lost_elements() {
        let mut rng = StdRng::seed_from_u64(0xBAD0_0002);
        let result = run_trials_with(
            "flatten",
            &HarnessConfig::default(),
            &mut rng,
            |data, pivot_index| {
                let pivot = data[pivot_index];
                data.fill(pivot);
                Ok(())
            },
        );

        let Err(HarnessError::Trial(failure)) = result else {
            panic!("overwriting elements must fail for some trial");
        };
        assert_eq!(failure.kind, FailureKind::NotPermutation);
        assert!(failure.after.iter().all(|&x| x == failure.pivot));
    }

    #[test]
    fn reports_rejected_input() {
        let mut rng = StdRng::seed_from_u64(0xBAD0_0003);
        let result = run_trials_with("reject", &HarnessConfig::default(), &mut rng, |_, _| {
            Err(InvalidArgument::EmptySequence)
        });

        let Err(HarnessError::Trial(failure)) = result else {
            panic!("rejecting must fail the first trial");
        };
        assert_eq!(failure.trial, 0);
        assert_eq!(failure.before, failure.after);
        assert_eq!(
            failure.kind,
            FailureKind::Rejected(InvalidArgument::EmptySequence)
        );
    }
}
