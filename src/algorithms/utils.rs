use std::ops::{Index, Range};

/// Utility function to check if a range is empty that works on older rust versions
#[inline(always)]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn is_empty_range<T: PartialOrd<T>>(range: &Range<T>) -> bool {
    !(range.start < range.end)
}

/// Given two lookups and ranges calculates the length of the common prefix
/// under the comparison predicate `eq`.
pub fn common_prefix_len_by<Old, New, F>(
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
    eq: F,
) -> usize
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    F: Fn(&Old::Output, &New::Output) -> bool,
{
    if is_empty_range(&old_range) || is_empty_range(&new_range) {
        return 0;
    }
    old_range
        .zip(new_range)
        .take_while(
            #[inline(always)]
            |x| eq(&old[x.0], &new[x.1]),
        )
        .count()
}

#[test]
fn test_common_prefix_len_by() {
    let exact = |a: &u8, b: &u8| a == b;
    assert_eq!(
        common_prefix_len_by("".as_bytes(), 0..0, "".as_bytes(), 0..0, exact),
        0
    );
    assert_eq!(
        common_prefix_len_by(
            "foobarbaz".as_bytes(),
            0..9,
            "foobarblah".as_bytes(),
            0..10,
            exact
        ),
        7
    );
    assert_eq!(
        common_prefix_len_by(
            "foobarbaz".as_bytes(),
            3..9,
            "foobarblah".as_bytes(),
            3..10,
            exact
        ),
        4
    );
    assert_eq!(
        common_prefix_len_by(
            "FooBar".as_bytes(),
            0..6,
            "fOObaz".as_bytes(),
            0..6,
            |a: &u8, b: &u8| a.eq_ignore_ascii_case(b)
        ),
        5
    );
}
