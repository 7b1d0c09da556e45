use std::ops::Range;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Regions {
    pub less: Range<usize>,
    pub equal: Range<usize>,
    pub greater: Range<usize>,
}

impl Regions {
    pub fn sizes(&self) -> (usize, usize, usize) {
        (self.less.len(), self.equal.len(), self.greater.len())
    }
}

pub fn three_way_regions<T: Ord>(data: &[T], pivot: &T) -> Option<Regions> {
    let n = data.len();
    let mut i = 0usize;
    while i < n && data[i] < *pivot {
        i += 1;
    }
    let lt = i;
    while i < n && data[i] == *pivot {
        i += 1;
    }
    let gt = i;
    while i < n && data[i] > *pivot {
        i += 1;
    }

    (i == n).then_some(Regions {
        less: 0..lt,
        equal: lt..gt,
        greater: gt..n,
    })
}

#[inline]
pub fn is_three_way_partitioned<T: Ord>(data: &[T], pivot: &T) -> bool {
    three_way_regions(data, pivot).is_some()
}

pub fn is_permutation_of<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
