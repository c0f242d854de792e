//! Catalog store: discovered entries plus search / sort / pagination state.
//!
//! The displayed page is a pure derivation of the state and is recomputed on
//! every change. Source entries are never mutated; sorting and filtering
//! work on a copy.

use std::cmp::Ordering;

use crate::discovery::Discovered;
use crate::entry::ListingEntry;
use crate::error::DiscoveryError;

/// One rendered page of the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogPage {
    /// Entries on the current page.
    pub items: Vec<ListingEntry>,
    /// Page count, never below 1.
    pub total_pages: usize,
    /// Number of entries matching the query.
    pub total_count: usize,
    /// Effective 1-based page, after healing.
    pub current_page: usize,
}

/// Derive the visible page from raw catalog inputs.
///
/// Sorting is stable and case-insensitive on [`ListingEntry::display_key`];
/// equal keys keep their discovery order in both directions. A page past the
/// end falls back to page 1.
pub fn derive_page(
    entries: &[ListingEntry],
    query: &str,
    ascending: bool,
    current_page: usize,
    page_size: usize,
) -> CatalogPage {
    let page_size = page_size.max(1);
    let needle = query.to_lowercase();

    let mut keyed: Vec<(String, &ListingEntry)> = entries
        .iter()
        .map(|e| (e.display_key().to_lowercase(), e))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, ascending));

    let matching: Vec<&ListingEntry> = keyed
        .into_iter()
        .filter(|(key, _)| needle.is_empty() || key.contains(&needle))
        .map(|(_, e)| e)
        .collect();

    let total_count = matching.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let current_page = if current_page == 0 || current_page > total_pages {
        1
    } else {
        current_page
    };

    let items = matching
        .into_iter()
        .skip((current_page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    CatalogPage {
        items,
        total_pages,
        total_count,
        current_page,
    }
}

fn compare_keys(a: &str, b: &str, ascending: bool) -> Ordering {
    if ascending { a.cmp(b) } else { b.cmp(a) }
}

/// Per-mount catalog state.
#[derive(Clone, Debug)]
pub struct CatalogState {
    entries: Vec<ListingEntry>,
    query: String,
    sort_ascending: bool,
    current_page: usize,
    load_error: Option<DiscoveryError>,
    loading: bool,
}

impl CatalogState {
    /// Fresh state for a newly mounted view: empty, loading, page 1.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            query: String::new(),
            sort_ascending: true,
            current_page: 1,
            load_error: None,
            loading: true,
        }
    }

    pub fn entries(&self) -> &[ListingEntry] {
        &self.entries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn load_error(&self) -> Option<&DiscoveryError> {
        self.load_error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Store the outcome of a discovery pass.
    ///
    /// A failure only surfaces as `load_error` when nothing is shown yet; a
    /// failed refresh keeps the previous listing.
    pub fn apply_resolution(&mut self, outcome: Result<Discovered, DiscoveryError>) {
        self.loading = false;
        match outcome {
            Ok(found) => {
                tracing::debug!(source = ?found.source, count = found.entries.len(), "catalog populated");
                self.entries = found.entries;
                self.load_error = None;
            }
            Err(e) if self.entries.is_empty() => {
                self.load_error = Some(e);
            }
            Err(e) => {
                tracing::debug!(error = %e, "refresh failed, keeping current listing");
            }
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn toggle_sort(&mut self) {
        self.sort_ascending = !self.sort_ascending;
    }

    /// Jump to a 1-based page. Out-of-range pages heal on the next render.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Derive the visible page without touching state.
    pub fn page(&self, page_size: usize) -> CatalogPage {
        derive_page(
            &self.entries,
            &self.query,
            self.sort_ascending,
            self.current_page,
            page_size,
        )
    }

    /// Derive the visible page and write back a healed page number.
    pub fn render_pass(&mut self, page_size: usize) -> CatalogPage {
        let page = self.page(page_size);
        self.current_page = page.current_page;
        page
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::DiscoverySource;

    fn entry(name: &str) -> ListingEntry {
        ListingEntry::new(name, format!("/PFE/{}", name))
    }

    fn names(items: &[ListingEntry]) -> Vec<&str> {
        items.iter().map(|e| e.name.as_str()).collect()
    }

    fn numbered(count: usize) -> Vec<ListingEntry> {
        (0..count).map(|i| entry(&format!("doc-{:02}.pdf", i))).collect()
    }

    fn loaded(entries: Vec<ListingEntry>) -> CatalogState {
        let mut state = CatalogState::new();
        state.apply_resolution(Ok(Discovered {
            source: DiscoverySource::Manifest,
            entries,
        }));
        state
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let entries = vec![entry("b.pdf"), entry("A.pdf")];
        let page = derive_page(&entries, "", true, 1, 12);
        assert_eq!(names(&page.items), vec!["A.pdf", "b.pdf"]);
    }

    #[test]
    fn test_sort_uses_title_over_name() {
        let entries = vec![
            entry("a.pdf").with_title("Zeta"),
            entry("z.pdf").with_title("alpha"),
        ];
        let page = derive_page(&entries, "", true, 1, 12);
        assert_eq!(names(&page.items), vec!["z.pdf", "a.pdf"]);
    }

    #[test]
    fn test_toggle_reverses_distinct_keys() {
        let entries = vec![entry("m.pdf"), entry("C.pdf"), entry("x.pdf"), entry("a.pdf")];
        let asc = derive_page(&entries, "", true, 1, 12);
        let desc = derive_page(&entries, "", false, 1, 12);

        let mut reversed = names(&asc.items);
        reversed.reverse();
        assert_eq!(names(&desc.items), reversed);
    }

    #[test]
    fn test_equal_keys_keep_discovery_order() {
        let entries = vec![
            ListingEntry::new("same.pdf", "/PFE/1/same.pdf"),
            entry("b.pdf"),
            ListingEntry::new("SAME.pdf", "/PFE/2/SAME.pdf"),
        ];

        let asc = derive_page(&entries, "", true, 1, 12);
        let asc_urls: Vec<&str> = asc.items.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(asc_urls, vec!["/PFE/b.pdf", "/PFE/1/same.pdf", "/PFE/2/SAME.pdf"]);

        let desc = derive_page(&entries, "", false, 1, 12);
        let desc_urls: Vec<&str> = desc.items.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(desc_urls, vec!["/PFE/1/same.pdf", "/PFE/2/SAME.pdf", "/PFE/b.pdf"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let entries = vec![
            entry("Rapport-IA.pdf"),
            entry("blockchain.pdf"),
            entry("ia-medicale.pdf"),
        ];
        let page = derive_page(&entries, "iA", true, 1, 12);
        assert_eq!(names(&page.items), vec!["ia-medicale.pdf", "Rapport-IA.pdf"]);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_no_match_reports_one_empty_page() {
        let entries = numbered(5);
        let page = derive_page(&entries, "nothing-matches", true, 1, 12);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_empty_catalog_reports_one_page() {
        let page = derive_page(&[], "", true, 1, 12);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_last_partial_page() {
        let entries = numbered(25);
        let page = derive_page(&entries, "", true, 3, 12);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 25);
        assert_eq!(names(&page.items), vec!["doc-24.pdf"]);
    }

    #[test]
    fn test_page_past_end_heals_to_first() {
        let mut state = loaded(numbered(25));
        state.set_page(3);
        state.set_query("doc-0");

        let page = state.render_pass(12);

        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items.len(), 10);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_page_navigation_bounds() {
        let mut state = loaded(numbered(25));
        state.previous_page();
        assert_eq!(state.current_page(), 1);

        state.next_page(3);
        state.next_page(3);
        state.next_page(3);
        assert_eq!(state.current_page(), 3);

        state.set_page(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_sources_are_not_mutated() {
        let state = loaded(vec![entry("b.pdf"), entry("a.pdf")]);
        let _ = state.page(12);
        assert_eq!(names(state.entries()), vec!["b.pdf", "a.pdf"]);
    }

    #[test]
    fn test_exhaustion_sets_load_error() {
        let mut state = CatalogState::new();
        assert!(state.is_loading());

        state.apply_resolution(Err(DiscoveryError::Exhausted {
            manifest_url: "/PFE/files.json".into(),
            index_url: "/PFE/".into(),
            command: "pfe-manifest".into(),
        }));

        assert!(!state.is_loading());
        assert!(state.entries().is_empty());
        let message = state.load_error().map(|e| e.to_string()).unwrap_or_default();
        assert!(!message.is_empty());
        assert!(message.contains("pfe-manifest"));
    }

    #[test]
    fn test_failed_refresh_keeps_listing() {
        let mut state = loaded(vec![entry("a.pdf")]);
        state.apply_resolution(Err(DiscoveryError::InvalidPattern("x".into())));
        assert_eq!(names(state.entries()), vec!["a.pdf"]);
        assert!(state.load_error().is_none());
    }
}
