//!
//! Utility functions
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Collects the keys present in either of two `BTreeMap` instances.
///
/// # Arguments
///
/// * `map1` - The first `BTreeMap` containing keys of type `K` and values of
///   type `V1`.
/// * `map2` - The second `BTreeMap` containing keys of type `K` and values of
///   type `V2`.
///
/// # Returns
///
/// A set of borrowed keys, iterated in ascending order. A key present in both
/// maps appears once.
///
/// # Example
///
/// ```rust
/// use gas_report_diff::util::btreemap::union_keys;
/// use std::collections::BTreeMap;
///
/// let first: BTreeMap<_, _> = [("b", 1), ("c", 2)].into();
/// let second: BTreeMap<_, _> = [("a", 10), ("c", 30)].into();
/// assert_eq!(
/// union_keys(&first, &second).into_iter().collect::<Vec<_>>(),
/// vec![&"a", &"b", &"c"]
/// )
/// ```
pub fn union_keys<'a, K, V1, V2>(
    map1: &'a BTreeMap<K, V1>,
    map2: &'a BTreeMap<K, V2>,
) -> BTreeSet<&'a K>
where
    K: Ord,
{
    map1.keys().chain(map2.keys()).collect()
}
