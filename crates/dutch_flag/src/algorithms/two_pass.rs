pub fn partition<T: Ord>(data: &mut [T], pivot: &T) {
    let len = data.len();

    let mut smaller = 0usize;
    for i in 0..len {
        if data[i] < *pivot {
            data.swap(i, smaller);
            smaller += 1;
        }
    }

    // Everything `< pivot` is already in `[0, smaller)`, so stop at the first one.
    let mut larger = len;
    for i in (0..len).rev() {
        if data[i] < *pivot {
            break;
        }
        if data[i] > *pivot {
            larger -= 1;
            data.swap(i, larger);
        }
    }
}
