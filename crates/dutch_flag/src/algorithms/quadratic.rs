pub fn partition<T: Ord>(data: &mut [T], pivot: &T) {
    let len = data.len();

    // Group elements smaller than pivot.
    for i in 0..len {
        for j in (i + 1)..len {
            if data[j] < *pivot {
                data.swap(i, j);
                break;
            }
        }
    }

    // Group elements larger than pivot. Everything `< pivot` is a prefix now,
    // so both scans stop at the first one they meet.
    for i in (0..len).rev() {
        if data[i] < *pivot {
            break;
        }
        for j in (0..i).rev() {
            if data[j] < *pivot {
                break;
            }
            if data[j] > *pivot {
                data.swap(i, j);
                break;
            }
        }
    }
}
