/// UI building blocks
///
/// This module holds the view-side pieces of the application:
/// - `gallery.rs` - the card grid built from search hits
/// - `lightbox.rs` - the full-size overlay viewer
/// - `toast.rs` - transient severity-tagged notifications

pub mod gallery;
pub mod lightbox;
pub mod toast;
