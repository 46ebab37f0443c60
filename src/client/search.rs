//! State of the search screen.
//!
//! [`SearchFlow`] owns the form, the results and the navigation cursor. The UI reads it and
//! funnels every change through its methods; network calls happen outside, with
//! [`SearchFlow::begin_search`] and [`SearchFlow::finish_search`] bracketing them so the
//! state stays consistent while a request is in flight.

use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, SearchQuery},
        error::ApiError,
    },
    model::{
        container::{is_searchable, CONTAINER_TOO_SHORT},
        manifest::{ManifestEntryDto, YearDto},
    },
};

/// Shown when a search returned no entries.
pub const NO_RESULTS: &str = "Nu s-au găsit rezultate pentru căutarea dvs.";

#[derive(Clone, Debug, PartialEq)]
pub enum SearchState {
    Idle,
    Searching,
    ResultsFound,
    NoResults,
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchForm {
    pub year: Option<i32>,
    pub container: String,
    pub numar_manifest: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchFlow {
    pub form: SearchForm,
    years: Vec<YearDto>,
    state: SearchState,
    results: Vec<ManifestEntryDto>,
    cursor: usize,
    latest: Option<ManifestEntryDto>,
}

impl Default for SearchFlow {
    fn default() -> Self {
        Self {
            form: SearchForm::default(),
            years: Vec::new(),
            state: SearchState::Idle,
            results: Vec::new(),
            cursor: 0,
            latest: None,
        }
    }
}

/// First active year, else the first listed.
pub fn default_year(years: &[YearDto]) -> Option<i32> {
    years
        .iter()
        .find(|y| y.is_active)
        .or_else(|| years.first())
        .map(|y| y.year)
}

impl SearchFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the available years and select the default one.
    pub fn set_years(&mut self, years: Vec<YearDto>) {
        self.form.year = default_year(&years);
        self.years = years;
    }

    pub fn years(&self) -> &[YearDto] {
        &self.years
    }

    /// Select a year. The caller refreshes the latest-manifest banner for it.
    pub fn select_year(&mut self, year: Option<i32>) {
        if self.form.year != year {
            self.form.year = year;
            self.latest = None;
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Validate the form and enter `Searching`.
    ///
    /// Returns the query to send, or `None` when the container has too few digits, in
    /// which case the flow is in `Error` and no request must be made.
    pub fn begin_search(&mut self) -> Option<SearchQuery> {
        if !is_searchable(&self.form.container) {
            self.state = SearchState::Error(CONTAINER_TOO_SHORT.to_string());
            return None;
        }

        self.state = SearchState::Searching;

        Some(SearchQuery {
            container: Some(self.form.container.clone()),
            numar_manifest: Some(self.form.numar_manifest.trim().to_string())
                .filter(|n| !n.is_empty()),
            year: self.form.year,
        })
    }

    /// Record the outcome of the request started by [`Self::begin_search`].
    ///
    /// Ignored unless the flow is still `Searching`, so an answer arriving after
    /// [`Self::home`] does not bring cleared results back.
    pub fn finish_search(&mut self, result: Result<Vec<ManifestEntryDto>, ApiError>) {
        if self.state != SearchState::Searching {
            tracing::debug!("Dropping search response received in state {:?}", self.state);
            return;
        }

        self.cursor = 0;

        match result {
            Ok(results) if results.is_empty() => {
                self.results = results;
                self.state = SearchState::NoResults;
            }
            Ok(results) => {
                self.results = results;
                self.state = SearchState::ResultsFound;
            }
            Err(e) => {
                self.results.clear();
                self.state = SearchState::Error(e.search_message());
            }
        }
    }

    /// Validate, query the API and record the outcome.
    pub async fn search(&mut self, api: &ApiClient) {
        let Some(query) = self.begin_search() else {
            return;
        };

        let result = api.search(&query).await;
        self.finish_search(result);
    }

    /// Message for the current state, if it has one.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            SearchState::NoResults => Some(NO_RESULTS),
            SearchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn results(&self) -> &[ManifestEntryDto] {
        &self.results
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The entry under the cursor.
    pub fn current(&self) -> Option<&ManifestEntryDto> {
        self.results.get(self.cursor)
    }

    /// One-based position label, e.g. `"2 / 5"`.
    pub fn position(&self) -> Option<String> {
        (!self.results.is_empty()).then(|| format!("{} / {}", self.cursor + 1, self.results.len()))
    }

    pub fn can_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_next(&self) -> bool {
        self.cursor + 1 < self.results.len()
    }

    pub fn previous(&mut self) {
        if self.can_previous() {
            self.cursor -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.cursor += 1;
        }
    }

    /// Clear results and the form, keeping the default year. Does not touch the network.
    pub fn home(&mut self) {
        self.select_year(default_year(&self.years));
        self.form = SearchForm {
            year: self.form.year,
            ..Default::default()
        };
        self.results.clear();
        self.cursor = 0;
        self.state = SearchState::Idle;
    }

    pub fn latest(&self) -> Option<&ManifestEntryDto> {
        self.latest.as_ref()
    }

    /// Store the latest manifest fetched for `year`, ignoring answers for a stale year.
    pub fn set_latest(&mut self, year: Option<i32>, latest: Option<ManifestEntryDto>) {
        if self.form.year == year {
            self.latest = latest;
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    fn year(year: i32, is_active: bool) -> YearDto {
        YearDto {
            id: year,
            year,
            is_active,
        }
    }

    fn entry(id: i32) -> ManifestEntryDto {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "numar_curent": id,
            "numar_manifest": format!("M{id}"),
            "container": "MSCU1234567",
        }))
        .unwrap()
    }

    fn flow_with_results(count: i32) -> SearchFlow {
        let mut flow = SearchFlow::new();
        flow.form.container = "MSCU1234567".to_string();
        flow.begin_search().unwrap();
        flow.finish_search(Ok((1..=count).map(entry).collect()));
        flow
    }

    #[test]
    fn default_year_prefers_active() {
        assert_eq!(default_year(&[year(2025, false), year(2024, true)]), Some(2024));
        assert_eq!(default_year(&[year(2025, false), year(2024, false)]), Some(2025));
        assert_eq!(default_year(&[]), None);
    }

    #[test]
    fn short_container_is_rejected_before_any_request() {
        let mut flow = SearchFlow::new();
        flow.form.container = "MSCU123456".to_string();

        assert!(flow.begin_search().is_none());
        assert_eq!(
            flow.state(),
            &SearchState::Error(CONTAINER_TOO_SHORT.to_string())
        );
    }

    #[test]
    fn valid_search_sends_raw_container() {
        let mut flow = SearchFlow::new();
        flow.set_years(vec![year(2025, true)]);
        flow.form.container = "mscu 123 4567".to_string();

        let query = flow.begin_search().unwrap();

        assert_eq!(flow.state(), &SearchState::Searching);
        assert_eq!(query.container.as_deref(), Some("mscu 123 4567"));
        assert_eq!(query.numar_manifest, None);
        assert_eq!(query.year, Some(2025));
    }

    #[test]
    fn results_reset_cursor_and_clamp_navigation() {
        let mut flow = flow_with_results(3);

        assert_eq!(flow.state(), &SearchState::ResultsFound);
        assert_eq!(flow.cursor(), 0);
        assert!(!flow.can_previous());
        assert!(flow.can_next());

        flow.previous();
        assert_eq!(flow.cursor(), 0);

        flow.next();
        flow.next();
        assert_eq!(flow.cursor(), 2);
        assert!(!flow.can_next());
        assert!(flow.can_previous());

        flow.next();
        assert_eq!(flow.cursor(), 2);
        assert_eq!(flow.current().map(|e| e.id), Some(3));
        assert_eq!(flow.position().as_deref(), Some("3 / 3"));
    }

    #[test]
    fn new_search_resets_cursor() {
        let mut flow = flow_with_results(3);
        flow.next();

        flow.begin_search().unwrap();
        flow.finish_search(Ok(vec![entry(9), entry(10)]));

        assert_eq!(flow.cursor(), 0);
        assert_eq!(flow.current().map(|e| e.id), Some(9));
    }

    #[test]
    fn single_result_disables_both_directions() {
        let flow = flow_with_results(1);

        assert!(!flow.can_previous());
        assert!(!flow.can_next());
    }

    #[test]
    fn empty_results_are_not_an_error() {
        let flow = flow_with_results(0);

        assert_eq!(flow.state(), &SearchState::NoResults);
        assert_eq!(flow.message(), Some(NO_RESULTS));
        assert!(flow.current().is_none());
        assert!(flow.position().is_none());
        assert!(!flow.can_next());
        assert!(!flow.can_previous());
    }

    #[test]
    fn backend_detail_becomes_the_message() {
        let mut flow = SearchFlow::new();
        flow.form.container = "MSCU1234567".to_string();
        flow.begin_search().unwrap();

        flow.finish_search(Err(ApiError::Status {
            status: StatusCode::FORBIDDEN,
            detail: Some("Authentication credentials were not provided.".to_string()),
        }));

        assert_eq!(
            flow.message(),
            Some("Authentication credentials were not provided.")
        );
    }

    #[test]
    fn home_clears_everything_but_the_default_year() {
        let mut flow = SearchFlow::new();
        flow.set_years(vec![year(2025, false), year(2024, true)]);
        flow.select_year(Some(2025));
        flow.form.container = "MSCU1234567".to_string();
        flow.form.numar_manifest = "M1".to_string();
        flow.begin_search().unwrap();
        flow.finish_search(Ok(vec![entry(1), entry(2)]));
        flow.next();

        flow.home();

        assert_eq!(flow.state(), &SearchState::Idle);
        assert_eq!(flow.form.year, Some(2024));
        assert!(flow.form.container.is_empty());
        assert!(flow.form.numar_manifest.is_empty());
        assert!(flow.results().is_empty());
        assert_eq!(flow.cursor(), 0);
    }

    #[test]
    fn stale_latest_manifest_is_ignored() {
        let mut flow = SearchFlow::new();
        flow.set_years(vec![year(2025, true), year(2024, false)]);

        flow.select_year(Some(2024));
        flow.set_latest(Some(2025), Some(entry(1)));
        assert!(flow.latest().is_none());

        flow.set_latest(Some(2024), Some(entry(2)));
        assert_eq!(flow.latest().map(|e| e.id), Some(2));

        flow.select_year(Some(2025));
        assert!(flow.latest().is_none());
    }

    #[test]
    fn response_after_home_is_dropped() {
        let mut flow = SearchFlow::new();
        flow.set_years(vec![year(2025, true)]);
        flow.form.container = "MSCU1234567".to_string();
        flow.begin_search().unwrap();

        flow.home();
        flow.finish_search(Ok(vec![entry(1)]));

        assert_eq!(flow.state(), &SearchState::Idle);
        assert!(flow.results().is_empty());
        assert!(flow.current().is_none());
    }

    #[test]
    fn home_clears_banner_of_another_year() {
        let mut flow = SearchFlow::new();
        flow.set_years(vec![year(2025, true), year(2024, false)]);
        flow.select_year(Some(2024));
        flow.set_latest(Some(2024), Some(entry(5)));

        flow.home();

        assert_eq!(flow.form.year, Some(2025));
        assert!(flow.latest().is_none());
    }

    #[test]
    fn home_keeps_banner_of_default_year() {
        let mut flow = SearchFlow::new();
        flow.set_years(vec![year(2025, true)]);
        flow.set_latest(Some(2025), Some(entry(5)));

        flow.home();

        assert_eq!(flow.latest().map(|e| e.id), Some(5));
    }
}
