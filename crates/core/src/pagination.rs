//! Fixed-size paging over an ordered question list.
//!
//! Pages are 1-based. Nothing is bound-checked up front: a page past the end
//! (or below 1) simply yields an empty slice, and the HTTP layer turns an
//! empty page into a 404.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the `page` query parameter is absent or not an integer.
pub const DEFAULT_PAGE: i64 = 1;

/// Parse a raw `page` query value, falling back to [`DEFAULT_PAGE`].
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_PAGE)
}

/// Return the window `items[(page-1)*10 .. page*10]`, clipped to the slice.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let Some(index) = page
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
    else {
        return &[];
    };

    let start = index.saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: i64) -> Vec<i64> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_holds_ten_items() {
        let all = items(23);
        assert_eq!(paginate(&all, 1), &all[0..10]);
    }

    #[test]
    fn last_page_is_partial() {
        let all = items(23);
        assert_eq!(paginate(&all, 3), &[21, 22, 23]);
    }

    #[test]
    fn page_past_end_is_empty() {
        let all = items(23);
        assert!(paginate(&all, 4).is_empty());
        assert!(paginate(&all, 101).is_empty());
    }

    #[test]
    fn zero_and_negative_pages_are_empty() {
        let all = items(5);
        assert!(paginate(&all, 0).is_empty());
        assert!(paginate(&all, -1).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_page() {
        let all: Vec<i64> = Vec::new();
        assert!(paginate(&all, 1).is_empty());
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let all = items(3);
        assert!(paginate(&all, i64::MAX).is_empty());
    }

    // -- parse_page ----------------------------------------------------------

    #[test]
    fn parse_page_defaults_when_absent() {
        assert_eq!(parse_page(None), DEFAULT_PAGE);
    }

    #[test]
    fn parse_page_reads_integers() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some(" 2 ")), 2);
    }

    #[test]
    fn parse_page_falls_back_on_garbage() {
        assert_eq!(parse_page(Some("abc")), DEFAULT_PAGE);
        assert_eq!(parse_page(Some("")), DEFAULT_PAGE);
        assert_eq!(parse_page(Some("1.5")), DEFAULT_PAGE);
    }
}
