use popgrid_lib::error::PaginationError;
use popgrid_lib::table::PageToken::{Ellipsis, Page};
use popgrid_lib::table::{
    PageSummary, PageToken, PaginationDescriptor, page_range, page_tokens, paginate, total_pages,
};

#[test]
fn test_total_pages() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(25, 10), 3);
    assert_eq!(total_pages(5, 0), 0);
}

#[test]
fn test_tokens_middle_of_twenty() {
    assert_eq!(
        page_tokens(10, 20),
        vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
    );
}

#[test]
fn test_tokens_five_pages() {
    assert_eq!(page_tokens(3, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
}

#[test]
fn test_tokens_always_include_first_last_and_current() {
    for total in 8..=30 {
        for current in 1..=total {
            let tokens = page_tokens(current, total);
            assert_eq!(tokens.first(), Some(&Page(1)));
            assert_eq!(tokens.last(), Some(&Page(total)));
            assert!(tokens.contains(&Page(current)));
            assert!(
                tokens.windows(2).all(|w| !(w[0] == Ellipsis && w[1] == Ellipsis)),
                "adjacent ellipses for {current}/{total}"
            );
        }
    }
}

#[test]
fn test_ellipsis_is_never_clickable() {
    assert!(!Ellipsis.is_clickable(1));
    assert_eq!(Ellipsis.page(), None);
    assert!(Page(2).is_clickable(1));
    assert!(!Page(1).is_clickable(1));
    assert!(Page(1).is_current(1));
    assert_eq!(Ellipsis.to_string(), "...");
}

#[test]
fn test_paginate_slices_current_page() {
    let rows: Vec<u32> = (1..=25).collect();
    let (page, tokens) = paginate(&rows, &PaginationDescriptor::for_rows(25, 10, 2));
    assert_eq!(page, &rows[10..20]);
    assert_eq!(tokens, vec![Page(1), Page(2), Page(3)]);

    let (last, _) = paginate(&rows, &PaginationDescriptor::for_rows(25, 10, 3));
    assert_eq!(last, &[21, 22, 23, 24, 25]);
}

#[test]
fn test_paginate_out_of_range_is_empty() {
    let rows: Vec<u32> = (1..=5).collect();
    let (page, tokens) = paginate(&rows, &PaginationDescriptor::new(10, 4, 1));
    assert!(page.is_empty());
    assert_eq!(tokens, vec![PageToken::Page(1)]);
}

#[test]
fn test_boundary_controls() {
    let first = PaginationDescriptor::for_rows(30, 10, 1);
    assert!(!first.has_previous());
    assert!(first.has_next());

    let last = PaginationDescriptor::for_rows(30, 10, 3);
    assert!(last.has_previous());
    assert!(!last.has_next());
}

#[test]
fn test_validate() {
    assert_eq!(PaginationDescriptor::for_rows(30, 10, 2).validate(), Ok(()));
    assert_eq!(
        PaginationDescriptor::new(0, 1, 0).validate(),
        Err(PaginationError::ZeroPageSize)
    );
    assert_eq!(
        PaginationDescriptor::for_rows(30, 10, 4).validate(),
        Err(PaginationError::PageOutOfRange { page: 4, max: 3 })
    );
    // An empty table still has a valid page 1.
    assert_eq!(PaginationDescriptor::for_rows(0, 10, 1).validate(), Ok(()));
}

#[test]
fn test_summary() {
    let summary = PageSummary::for_page(&PaginationDescriptor::for_rows(25, 10, 3), 25).unwrap();
    assert_eq!(summary.to_string(), "Showing 21 to 25 of 25 results");
    assert!(PageSummary::for_page(&PaginationDescriptor::for_rows(0, 10, 1), 0).is_none());
}

#[test]
fn test_page_range_never_panics() {
    assert_eq!(page_range(25, &PaginationDescriptor::for_rows(25, 10, 1)), 0..10);
    assert_eq!(page_range(25, &PaginationDescriptor::new(10, usize::MAX, 3)), 25..25);
    assert_eq!(page_range(0, &PaginationDescriptor::new(0, 0, 0)), 0..0);
}
