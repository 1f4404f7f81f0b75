/// State management module
///
/// This module handles the non-visual application state:
/// - Query, paging, and request-generation bookkeeping (search.rs)

pub mod search;
