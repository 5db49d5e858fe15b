use album_layout::*;

fn pages(n: usize) -> Vec<Page> {
    (0..n)
        .map(|i| Page::new(format!("page-{}", i), (i * 10) as i64))
        .collect()
}

#[test]
fn test_five_pages_in_spreads() {
    let input = pages(5);
    let pagination = Pagination::new(&input, ViewMode::Spreads);
    assert_eq!(pagination.spread_count(), 3);
    assert_eq!(pagination.view_count(), 4);

    match pagination.view(3) {
        Some(View::Spread { index, left, right }) => {
            assert_eq!(index, 2);
            assert_eq!(left.map(|p| p.id.as_str()), Some("page-4"));
            assert_eq!(right, RightSlot::AddPage);
        }
        other => panic!("unexpected view {:?}", other),
    }
}

#[test]
fn test_five_pages_in_single_page_mode() {
    let input = pages(5);
    let pagination = Pagination::new(&input, ViewMode::SinglePages);
    assert_eq!(pagination.view_count(), 7);

    let views: Vec<View> = pagination.views().collect();
    assert_eq!(views.first(), Some(&View::Cover));
    assert_eq!(views.last(), Some(&View::BackCover));
    match views[5] {
        View::Page { number, page } => {
            assert_eq!(number, 5);
            assert_eq!(page.id, "page-4");
        }
        other => panic!("unexpected view {:?}", other),
    }
}

#[test]
fn test_order_gaps_and_ties_are_tolerated() {
    let mut input = vec![
        Page::new("b", 40),
        Page::new("a", 3),
        Page::new("c", 40),
    ];
    sort_pages(&mut input);
    let ids: Vec<&str> = input.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn test_adding_a_spread_navigates_to_it() {
    let mut input = pages(4);
    let mut nav = Navigator::new(view_count(input.len(), ViewMode::Spreads));
    nav.go_to(1);

    input.extend([Page::new("page-4", 40), Page::new("page-5", 50)]);
    let count = view_count(input.len(), ViewMode::Spreads);
    assert_eq!(nav.after_spread_added(count), 3);

    let pagination = Pagination::new(&input, ViewMode::Spreads);
    assert_eq!(pagination.label(nav.index()).as_deref(), Some("Pages 5–6"));
}
