use crate::api::RecipeApi;
use crate::error::BrowserError;
use crate::model::RecipeSummary;
use log::info;

/// A submitted query and the results it produced
#[derive(Debug, Clone, Default)]
pub struct Search {
    pub query: String,
    pub results: Vec<RecipeSummary>,
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Search {
            query: query.into(),
            results: Vec::new(),
        }
    }

    /// Run the query against the API and keep the results
    pub async fn get_results(&mut self, api: &dyn RecipeApi) -> Result<(), BrowserError> {
        self.results = api.search(&self.query).await?;
        info!(
            "Stored {} results for '{}'",
            self.results.len(),
            self.query
        );
        Ok(())
    }

    /// Results of a 1-based page; empty when the page is out of range
    pub fn page(&self, page: usize, per_page: usize) -> &[RecipeSummary] {
        if page == 0 || per_page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(per_page);
        if start >= self.results.len() {
            return &[];
        }
        let end = start.saturating_add(per_page).min(self.results.len());
        &self.results[start..end]
    }

    pub fn num_pages(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.results.len().div_ceil(per_page)
    }
}
