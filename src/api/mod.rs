/// Search API integration module
///
/// This module handles:
/// - The HTTP client for the Pixabay REST API (client.rs)
/// - Deserialized response shapes (models.rs)

pub mod client;
pub mod models;
