//! Loader for the reindex pipeline.
//!
//! Accumulates documents for one game and flushes them to the search index
//! in fixed-size batches.

use std::sync::Arc;

use tracing::{debug, error, info};

use card_search_shared::PrintDocument;
use card_search_repository::SearchIndexProvider;

use crate::errors::ReindexError;

/// Batch loader for one game's documents.
///
/// Each full batch is flushed immediately; the remainder is flushed by
/// [`finish`](BatchLoader::finish). A flush failure aborts the game with no
/// partial-batch retry: the pipeline fails loudly and the operator re-runs
/// the full reindex, which is idempotent and cheap to repeat.
pub struct BatchLoader {
    provider: Arc<dyn SearchIndexProvider>,
    batch_size: usize,
    pending: Vec<PrintDocument>,
    flushed: u64,
}

impl BatchLoader {
    /// Create a loader flushing batches of `batch_size` documents.
    pub fn new(provider: Arc<dyn SearchIndexProvider>, batch_size: usize) -> Self {
        Self {
            provider,
            batch_size,
            pending: Vec::with_capacity(batch_size),
            flushed: 0,
        }
    }

    /// Queue one document, flushing if the batch is full.
    pub async fn push(&mut self, document: PrintDocument) -> Result<(), ReindexError> {
        self.pending.push(document);
        if self.pending.len() >= self.batch_size {
            self.flush().await?;
        }
        Ok(())
    }

    /// Flush any remainder and return the total documents flushed.
    pub async fn finish(mut self) -> Result<u64, ReindexError> {
        self.flush().await?;
        Ok(self.flushed)
    }

    async fn flush(&mut self) -> Result<(), ReindexError> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let batch: Vec<PrintDocument> = self.pending.drain(..).collect();
        let count = batch.len();

        debug!(count = count, "Flushing document batch");
        if let Err(e) = self.provider.add_documents(&batch).await {
            error!(error = %e, count = count, "Failed to flush document batch");
            return Err(e.into());
        }

        self.flushed += count as u64;
        info!(count = count, total = self.flushed, "Indexed batch");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use card_search_repository::SearchIndexError;

    /// Mock search provider recording flush calls and batch sizes.
    struct MockSearchProvider {
        flush_calls: AtomicUsize,
        batch_sizes: Mutex<Vec<usize>>,
        fail_adds: bool,
    }

    impl MockSearchProvider {
        fn new() -> Self {
            Self {
                flush_calls: AtomicUsize::new(0),
                batch_sizes: Mutex::new(Vec::new()),
                fail_adds: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail_adds: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl SearchIndexProvider for MockSearchProvider {
        async fn ensure_index_exists(&self) -> Result<(), SearchIndexError> {
            Ok(())
        }

        async fn add_documents(
            &self,
            documents: &[PrintDocument],
        ) -> Result<(), SearchIndexError> {
            if self.fail_adds {
                return Err(SearchIndexError::document_add("mock rejection"));
            }
            self.flush_calls.fetch_add(1, Ordering::SeqCst);
            self.batch_sizes.lock().unwrap().push(documents.len());
            Ok(())
        }

        async fn configure_attributes(&self) -> Result<(), SearchIndexError> {
            Ok(())
        }
    }

    fn document(id: u64) -> PrintDocument {
        PrintDocument {
            id: format!("mtg_{id}"),
            name: format!("Card {id}"),
            set_name: "Core Set".to_string(),
            game_slug: "mtg".to_string(),
            image: String::new(),
            keywords_localized: vec![format!("Card {id}")],
        }
    }

    #[tokio::test]
    async fn test_flush_count_is_ceil_of_rows_over_batch_size() {
        let provider = Arc::new(MockSearchProvider::new());
        let mut loader = BatchLoader::new(provider.clone(), 2);

        for id in 0..5 {
            loader.push(document(id)).await.unwrap();
        }
        let total = loader.finish().await.unwrap();

        // ceil(5 / 2) = 3 flushes summing to 5 documents
        assert_eq!(total, 5);
        assert_eq!(provider.flush_calls.load(Ordering::SeqCst), 3);
        assert_eq!(*provider.batch_sizes.lock().unwrap(), vec![2, 2, 1]);
    }

    #[tokio::test]
    async fn test_exact_multiple_has_no_trailing_flush() {
        let provider = Arc::new(MockSearchProvider::new());
        let mut loader = BatchLoader::new(provider.clone(), 2);

        for id in 0..4 {
            loader.push(document(id)).await.unwrap();
        }
        let total = loader.finish().await.unwrap();

        assert_eq!(total, 4);
        assert_eq!(provider.flush_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_sequence_flushes_nothing() {
        let provider = Arc::new(MockSearchProvider::new());
        let loader = BatchLoader::new(provider.clone(), 2);

        let total = loader.finish().await.unwrap();

        assert_eq!(total, 0);
        assert_eq!(provider.flush_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rejected_batch_aborts() {
        let provider = Arc::new(MockSearchProvider::failing());
        let mut loader = BatchLoader::new(provider, 1);

        let result = loader.push(document(0)).await;
        assert!(matches!(result, Err(ReindexError::SearchIndex(_))));
    }
}
