/// Regions kept during the loop:
///
/// - `[0, smaller)`: `< pivot`
/// - `[smaller, equal)`: `== pivot`
/// - `[equal, larger)`: unclassified
/// - `[larger, len)`: `> pivot`
pub fn partition<T: Ord>(data: &mut [T], pivot: &T) -> (usize, usize) {
    let mut smaller = 0usize;
    let mut equal = 0usize;
    let mut larger = data.len();

    while equal < larger {
        debug_assert!(smaller <= equal && larger <= data.len());
        match data[equal].cmp(pivot) {
            std::cmp::Ordering::Less => {
                data.swap(smaller, equal);
                smaller += 1;
                equal += 1;
            }
            std::cmp::Ordering::Equal => {
                equal += 1;
            }
            std::cmp::Ordering::Greater => {
                // The element swapped in from the back is still unclassified.
                larger -= 1;
                data.swap(equal, larger);
            }
        }
    }

    (smaller, larger)
}
