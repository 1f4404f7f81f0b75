/// Paging state for the active query
///
/// One value of this lives on the controller and is mutated only inside the
/// update loop. Every outgoing request takes a fresh generation token;
/// completions whose token no longer matches are stale and must be dropped,
/// so a slow response can never overwrite a newer query's results.

/// Query, paging, and request-generation bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    page: u32,
    per_page: u32,
    total_hits: u32,
    generation: u64,
}

impl SearchState {
    /// Fresh state with no active query.
    pub fn new(per_page: u32) -> Self {
        SearchState {
            query: String::new(),
            page: 1,
            per_page,
            total_hits: 0,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Token of the most recently started request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new search: store the query, reset paging, and invalidate
    /// any in-flight request.
    pub fn begin_query(&mut self, query: String) {
        self.query = query;
        self.page = 1;
        self.total_hits = 0;
        self.bump();
    }

    /// Advance to the next page, invalidating any in-flight request.
    pub fn begin_next_page(&mut self) {
        self.page += 1;
        self.bump();
    }

    /// Undo a page advance whose request failed, so the visible state keeps
    /// matching what was actually fetched.
    pub fn rollback_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Record the total-hit count reported with a page of results.
    pub fn record_total(&mut self, total_hits: u32) {
        self.total_hits = total_hits;
    }

    /// Whether `token` belongs to the most recently started request.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }

    /// More pages remain when the pages fetched so far cannot have covered
    /// the total hit count.
    pub fn has_more(&self) -> bool {
        self.page.saturating_mul(self.per_page) < self.total_hits
    }

    fn bump(&mut self) {
        self.generation += 1;
    }
}
