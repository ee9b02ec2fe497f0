//! Splitter
//!
//! Information-gain computation over row subsets and the selection of the
//! attribute to split on.
use crate::data::Dataset;
use crate::utils::entropy;
use rayon::prelude::*;

/// Number of rows in `subset` whose class label is 1.
pub(crate) fn count_positive(data: &Dataset, subset: &[usize]) -> usize {
    subset.iter().filter(|&&i| data.label(i)).count()
}

/// Information gain obtained by splitting `subset` on `attribute`.
///
/// The gain is the entropy of the subset's labels minus the size-weighted
/// entropies of the two sides of the split. A non-binary value cannot occur
/// on a constructed [`Dataset`]; encountering one here means the validation
/// boundary was bypassed and is fatal.
pub fn information_gain(data: &Dataset, subset: &[usize], attribute: usize) -> f64 {
    let total = subset.len();
    if total == 0 {
        return 0.0;
    }

    // Rows with attribute value 1, and the positive labels on each side.
    let mut n1 = 0usize;
    let mut p1 = 0usize;
    let mut p0 = 0usize;
    for &i in subset {
        match data.get(i, attribute) {
            1 => {
                n1 += 1;
                if data.label(i) {
                    p1 += 1;
                }
            }
            0 => {
                if data.label(i) {
                    p0 += 1;
                }
            }
            v => unreachable!("non-binary value {v} escaped dataset validation"),
        }
    }
    let n0 = total - n1;

    let w1 = n1 as f64 / total as f64;
    let w0 = n0 as f64 / total as f64;
    entropy(p1 + p0, total) - w1 * entropy(p1, n1) - w0 * entropy(p0, n0)
}

/// Choose the attribute with the maximum information gain over `subset`.
///
/// Candidates are evaluated in parallel. The reduction prefers the higher
/// gain and, on exactly equal gain, the attribute appearing first in the
/// original column order, so the result is identical to a sequential
/// first-seen scan with a strict `>` comparison no matter how the work is
/// scheduled. Returns `None` only when `attributes` is empty.
pub fn best_split(data: &Dataset, subset: &[usize], attributes: &[usize]) -> Option<usize> {
    attributes
        .par_iter()
        .map(|&a| (information_gain(data, subset, a), a))
        .reduce_with(|x, y| {
            if y.0 > x.0 || (y.0 == x.0 && y.1 < x.1) {
                y
            } else {
                x
            }
        })
        .map(|(_, a)| a)
}

/// Split `subset` into the rows where `attribute` is 1 and the rows where
/// it is 0, preserving subset order. The two sides are disjoint and each
/// is owned by the child that receives it.
pub fn partition(data: &Dataset, subset: &[usize], attribute: usize) -> (Vec<usize>, Vec<usize>) {
    let mut ones = Vec::new();
    let mut zeros = Vec::new();
    for &i in subset {
        if data.get(i, attribute) == 1 {
            ones.push(i);
        } else {
            zeros.push(i);
        }
    }
    (ones, zeros)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::precision_round;

    fn names(n: &[&str]) -> Vec<String> {
        n.iter().map(|s| s.to_string()).collect()
    }

    fn separable() -> Dataset {
        Dataset::from_rows(
            vec![
                vec![1, 1, 1],
                vec![1, 0, 1],
                vec![0, 1, 0],
                vec![0, 0, 0],
            ],
            names(&["A", "B"]),
        )
        .unwrap()
    }

    #[test]
    fn test_information_gain() {
        let d = separable();
        let subset = vec![0, 1, 2, 3];
        // A separates the labels perfectly, B not at all.
        assert_eq!(information_gain(&d, &subset, 0), 1.0);
        assert_eq!(information_gain(&d, &subset, 1), 0.0);
    }

    #[test]
    fn test_information_gain_partial() {
        // Splitting on A leaves one impure side.
        let d = Dataset::from_rows(
            vec![
                vec![1, 0, 1],
                vec![1, 1, 0],
                vec![0, 0, 0],
                vec![0, 1, 0],
            ],
            names(&["A", "B"]),
        )
        .unwrap();
        let subset = vec![0, 1, 2, 3];
        // H(1/4) - 1/2 * H(1/2) = 0.8113 - 0.5
        assert_eq!(
            precision_round(information_gain(&d, &subset, 0), 4),
            0.3113
        );
    }

    #[test]
    fn test_information_gain_empty_subset() {
        let d = separable();
        assert_eq!(information_gain(&d, &[], 0), 0.0);
    }

    #[test]
    fn test_best_split_prefers_gain() {
        let d = separable();
        let subset = d.full_subset();
        assert_eq!(best_split(&d, &subset, &[0, 1]), Some(0));
        assert_eq!(best_split(&d, &subset, &[1, 0]), Some(0));
        // With A excluded, B is the only candidate.
        assert_eq!(best_split(&d, &subset, &[1]), Some(1));
    }

    #[test]
    fn test_best_split_tie_breaks_on_first_attribute() {
        // Both attributes carry zero gain; the first in column order wins.
        let d = Dataset::from_rows(
            vec![vec![0, 0, 0], vec![0, 0, 1]],
            names(&["A", "B"]),
        )
        .unwrap();
        let subset = d.full_subset();
        assert_eq!(best_split(&d, &subset, &[0, 1]), Some(0));
    }

    #[test]
    fn test_best_split_no_attributes() {
        let d = separable();
        assert_eq!(best_split(&d, &d.full_subset(), &[]), None);
    }

    #[test]
    fn test_partition() {
        let d = separable();
        let (ones, zeros) = partition(&d, &[0, 1, 2, 3], 0);
        assert_eq!(ones, vec![0, 1]);
        assert_eq!(zeros, vec![2, 3]);
        let (ones, zeros) = partition(&d, &[0, 1, 2, 3], 1);
        assert_eq!(ones, vec![0, 2]);
        assert_eq!(zeros, vec![1, 3]);
    }
}
