mod algorithms;
pub mod check;
pub mod harness;

use thiserror::Error;

pub use check::{Regions, is_permutation_of, is_three_way_partitioned, three_way_regions};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PartitionStrategy {
    Quadratic,
    TwoPass,
    OnePass,
}

pub const ALL_STRATEGIES: [PartitionStrategy; 3] = [
    PartitionStrategy::Quadratic,
    PartitionStrategy::TwoPass,
    PartitionStrategy::OnePass,
];

pub fn all_strategies() -> &'static [PartitionStrategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: PartitionStrategy) -> &'static str {
    match strategy {
        PartitionStrategy::Quadratic => "quadratic",
        PartitionStrategy::TwoPass => "two_pass",
        PartitionStrategy::OnePass => "one_pass",
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("cannot partition an empty sequence")]
    EmptySequence,
    #[error("pivot index {index} out of range for sequence of length {len}")]
    PivotOutOfRange { index: usize, len: usize },
}

pub fn partition<T: Ord + Clone>(
    strategy: PartitionStrategy,
    data: &mut [T],
    pivot_index: usize,
) -> Result<(), InvalidArgument> {
    let pivot = pivot_value(data, pivot_index)?;
    match strategy {
        PartitionStrategy::Quadratic => algorithms::quadratic::partition(data, &pivot),
        PartitionStrategy::TwoPass => algorithms::two_pass::partition(data, &pivot),
        PartitionStrategy::OnePass => {
            algorithms::one_pass::partition(data, &pivot);
        }
    }
    Ok(())
}

pub fn partition_quadratic<T: Ord + Clone>(
    data: &mut [T],
    pivot_index: usize,
) -> Result<(), InvalidArgument> {
    partition(PartitionStrategy::Quadratic, data, pivot_index)
}

pub fn partition_two_pass<T: Ord + Clone>(
    data: &mut [T],
    pivot_index: usize,
) -> Result<(), InvalidArgument> {
    partition(PartitionStrategy::TwoPass, data, pivot_index)
}

pub fn partition_one_pass<T: Ord + Clone>(
    data: &mut [T],
    pivot_index: usize,
) -> Result<(), InvalidArgument> {
    partition(PartitionStrategy::OnePass, data, pivot_index)
}

fn pivot_value<T: Clone>(data: &[T], pivot_index: usize) -> Result<T, InvalidArgument> {
    if data.is_empty() {
        return Err(InvalidArgument::EmptySequence);
    }
    data.get(pivot_index)
        .cloned()
        .ok_or(InvalidArgument::PivotOutOfRange {
            index: pivot_index,
            len: data.len(),
        })
}
