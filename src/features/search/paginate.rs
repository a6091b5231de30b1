use shared::schemas::{PageResult, Pagination};

/// Slice an ordered result into one page. Page numbers below 1 read as 1; a page
/// past the end is empty rather than an error.
pub fn paginate<T>(items: Vec<T>, pagination: &Pagination) -> PageResult<T> {
    let total_count = items.len();
    let page = pagination.page.max(1);
    let page_size = pagination.page_size.max(1);

    let start = (page - 1).saturating_mul(page_size);
    let end = page.saturating_mul(page_size);

    let items = items.into_iter().skip(start).take(page_size).collect();

    PageResult {
        items,
        total_count,
        has_more: end < total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, vec![1, 2, 3], true)]
    #[case(2, vec![4, 5, 6], true)]
    #[case(3, vec![7], false)]
    #[case(4, vec![], false)]
    #[case(0, vec![1, 2, 3], true)]
    fn test_seven_items_by_three(
        #[case] page: usize,
        #[case] expected: Vec<i32>,
        #[case] has_more: bool,
    ) {
        let result = paginate((1..=7).collect(), &Pagination::new(page, 3));

        assert_eq!(result.items, expected);
        assert_eq!(result.total_count, 7);
        assert_eq!(result.has_more, has_more);
    }

    #[test]
    fn test_empty_input() {
        let result = paginate(Vec::<i32>::new(), &Pagination::default());
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 0);
        assert!(!result.has_more);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let result = paginate(vec![1, 2, 3], &Pagination::new(usize::MAX, 2));
        assert!(result.items.is_empty());
        assert!(!result.has_more);
    }
}
