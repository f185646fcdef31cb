use serde::{Deserialize, Serialize};

/// Pages needed for `total_count` records at `page_size` per page.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// One slot in a page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMarker {
    /// 1-based page number
    Page(usize),
    /// Elided run of pages
    Gap,
}

/// Page-number strip for a pager control.
///
/// `current` is 0-based; emitted page numbers are 1-based. Up to seven
/// pages are listed in full. Beyond that the strip keeps the first and last
/// page plus a window around the current one, with gaps in between.
pub fn page_numbers(current: usize, total_pages: usize) -> Vec<PageMarker> {
    use PageMarker::{Gap, Page};

    if total_pages <= 7 {
        return (1..=total_pages).map(Page).collect();
    }

    let current = current + 1;
    let mut strip = vec![Page(1)];

    if current <= 4 {
        strip.extend((2..=5).map(Page));
        strip.push(Gap);
        strip.push(Page(total_pages));
    } else if current + 3 >= total_pages {
        strip.push(Gap);
        strip.extend((total_pages - 4..=total_pages).map(Page));
    } else {
        strip.push(Gap);
        strip.extend([Page(current - 1), Page(current), Page(current + 1)]);
        strip.push(Gap);
        strip.push(Page(total_pages));
    }

    strip
}

#[cfg(test)]
mod tests {
    use super::PageMarker::{Gap, Page};
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(3, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(151, 20), 8);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_small_totals_list_every_page() {
        assert_eq!(page_numbers(0, 0), vec![]);
        assert_eq!(page_numbers(0, 1), vec![Page(1)]);
        assert_eq!(
            page_numbers(3, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_strip_near_start() {
        assert_eq!(
            page_numbers(0, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(20)]
        );
        assert_eq!(
            page_numbers(3, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(20)]
        );
    }

    #[test]
    fn test_strip_near_end() {
        assert_eq!(
            page_numbers(19, 20),
            vec![Page(1), Gap, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            page_numbers(16, 20),
            vec![Page(1), Gap, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_strip_in_middle() {
        assert_eq!(
            page_numbers(9, 20),
            vec![Page(1), Gap, Page(9), Page(10), Page(11), Gap, Page(20)]
        );
    }

    #[test]
    fn test_marker_json() {
        insta::assert_json_snapshot!(page_numbers(0, 8), @r#"
        [
          {
            "page": 1
          },
          {
            "page": 2
          },
          {
            "page": 3
          },
          {
            "page": 4
          },
          {
            "page": 5
          },
          "gap",
          {
            "page": 8
          }
        ]
        "#);
    }
}
