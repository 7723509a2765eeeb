// src/dtos/pagination.rs
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PageLink {
    pub url: String,
    pub label: String,
    pub active: bool,
}

// Paginator envelope the listing page consumes: items plus page metadata and
// one link per page. Link URLs carry only the page number; re-appending
// filter and sort params is the frontend's job.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub links: Vec<PageLink>,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: i64, current_page: i64, per_page: i64) -> Self {
        let last_page = ((total + per_page - 1) / per_page).max(1);
        let links = (1..=last_page)
            .map(|page| PageLink {
                url: format!("?page={page}"),
                label: page.to_string(),
                active: page == current_page,
            })
            .collect();
        Self {
            data,
            current_page,
            last_page,
            per_page,
            total,
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_rounds_up() {
        let page = Paginated::new(vec![0u8; 2], 50, 5, 12);
        assert_eq!(page.last_page, 5);
        assert_eq!(page.total, 50);
        assert_eq!(page.per_page, 12);
        assert_eq!(page.data.len(), 2);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        let page = Paginated::new(vec![0u8; 12], 48, 1, 12);
        assert_eq!(page.last_page, 4);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let page: Paginated<u8> = Paginated::new(vec![], 0, 1, 12);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.links.len(), 1);
        assert!(page.links[0].active);
    }

    #[test]
    fn links_mark_only_the_current_page_active() {
        let page = Paginated::new(vec![0u8; 12], 50, 3, 12);
        assert_eq!(page.links.len(), 5);
        assert_eq!(page.links[2].url, "?page=3");
        assert_eq!(page.links[2].label, "3");
        let active: Vec<&str> = page
            .links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(active, vec!["3"]);
    }

    #[test]
    fn page_past_the_end_keeps_valid_metadata() {
        let page: Paginated<u8> = Paginated::new(vec![], 50, 9, 12);
        assert_eq!(page.last_page, 5);
        assert_eq!(page.current_page, 9);
        assert!(page.links.iter().all(|l| !l.active));
    }
}
