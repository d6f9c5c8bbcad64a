use std::collections::BTreeMap;

/// The winning value of a frequency count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popular<T> {
    pub value: T,
    pub count: usize,
}

/// Count occurrences, ordered by count descending then value ascending.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut entries: Vec<(T, usize)> = counts.into_iter().collect();
    // Stable sort: equal counts stay in ascending value order.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

/// Most frequent value; ties go to the smallest value.
pub fn most_frequent<T, I>(values: I) -> Option<Popular<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    value_counts(values)
        .into_iter()
        .next()
        .map(|(value, count)| Popular { value, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_counts_order() {
        let counts = value_counts(["b", "a", "c", "b", "c", "b"]);
        assert_eq!(counts, vec![("b", 3), ("c", 2), ("a", 1)]);
    }

    #[test]
    fn test_ties_break_to_smallest_value() {
        let counts = value_counts([5, 3, 5, 3, 9]);
        assert_eq!(counts, vec![(3, 2), (5, 2), (9, 1)]);
        assert_eq!(most_frequent([6, 2, 6, 2]), Some(Popular { value: 2, count: 2 }));
        assert_eq!(
            most_frequent(["Streeter Dr", "Canal St"]).map(|p| p.value),
            Some("Canal St")
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(value_counts(Vec::<u32>::new()).is_empty());
        assert_eq!(most_frequent(Vec::<u32>::new()), None);
    }
}
