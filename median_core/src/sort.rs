// module for the in-place bubble sort routine

/// sort a slice of integers in place via bubble sort with an early-exit flag
pub fn bubble_sort(values: &mut [i64]) {
    // nothing to sort for empty or single-element slices
    if values.len() < 2 {
        return;
    }

    for pass in 0..values.len() - 1 {
        let mut swapped = false;

        // each pass bubbles the largest remaining value to the end of the unsorted prefix
        for j in 0..values.len() - 1 - pass {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }

        // a full pass without swaps means the slice is already sorted
        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_unordered_input() {
        let mut values = vec![5, 2, 9, 4, 7];
        bubble_sort(&mut values);
        assert_eq!(values, vec![2, 4, 5, 7, 9]);
    }

    #[test]
    fn empty_is_a_noop() {
        let mut values: Vec<i64> = Vec::new();
        bubble_sort(&mut values);
        assert!(values.is_empty());
    }

    #[test]
    fn single_element_is_a_noop() {
        let mut values = vec![42];
        bubble_sort(&mut values);
        assert_eq!(values, vec![42]);
    }

    #[test]
    fn reverse_ordered_input() {
        let mut values = vec![9, 7, 5, 4, 2];
        bubble_sort(&mut values);
        assert_eq!(values, vec![2, 4, 5, 7, 9]);
    }

    #[test]
    fn keeps_duplicates() {
        let mut values = vec![3, 1, 3, 2, 1];
        bubble_sort(&mut values);
        assert_eq!(values, vec![1, 1, 2, 3, 3]);
    }
}
