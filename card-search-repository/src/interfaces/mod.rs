//! Interface definitions for the reindex pipeline's external collaborators.
//!
//! These traits allow for dependency injection and swappable backend
//! implementations, including mocks in tests.

mod print_source;
mod search_index_provider;

pub use print_source::PrintSource;
pub use search_index_provider::SearchIndexProvider;
