//! [`proptest`] strategies for generating disjoint-set workloads

use proptest::{prelude::*, sample::SizeRange};

/// Generate a universe size together with a list of in-range index pairs to
/// union
///
/// The length strategy must never produce zero if `merge_len` permits a
/// non-empty list.
pub fn len_and_merges(
    len: impl Strategy<Value = usize>,
    merge_len: impl Clone + Into<SizeRange>,
) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    len.prop_flat_map(move |l| {
        prop::collection::vec((0..l, 0..l), merge_len.clone()).prop_map(move |v| (l, v))
    })
}
