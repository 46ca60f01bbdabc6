//! Swappable model snapshot shared between readers.

use std::path::Path;
use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use super::Model;
use super::params::load_params_file;
use super::trainer::{TrainingExample, fit};
use crate::error::{Result, SentimentError};

/// Holds the current [`Model`] as an immutable, reference-counted snapshot.
///
/// Readers clone the `Arc` under a short read lock and then classify without
/// holding any lock. Training or loading builds the new model first and swaps
/// it in under the write lock, so readers see either the old model or the new
/// one in full.
#[derive(Debug, Default)]
pub struct ModelStore {
    current: RwLock<Option<Arc<Model>>>,
}

impl ModelStore {
    /// Create an empty store; classification fails until a model is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `model`.
    pub fn with_model(model: Model) -> Self {
        ModelStore {
            current: RwLock::new(Some(Arc::new(model))),
        }
    }

    /// Create a store from a params file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = Self::new();
        store.reload(path)?;
        Ok(store)
    }

    /// The current model snapshot.
    pub fn snapshot(&self) -> Result<Arc<Model>> {
        self.current
            .read()
            .clone()
            .ok_or_else(|| SentimentError::model_not_trained("no model has been loaded"))
    }

    /// Whether a model is present.
    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    /// Swap in `model`, returning the previous snapshot.
    pub fn replace(&self, model: Model) -> Option<Arc<Model>> {
        self.install(Arc::new(model))
    }

    fn install(&self, model: Arc<Model>) -> Option<Arc<Model>> {
        let mut guard = self.current.write();
        std::mem::replace(&mut *guard, Some(model))
    }

    /// Load a params file and swap it in. On failure the current model stays.
    ///
    /// Returns the snapshot that was installed, even if another swap has
    /// happened since.
    pub fn reload<P: AsRef<Path>>(&self, path: P) -> Result<Arc<Model>> {
        let path = path.as_ref();
        let model = Arc::new(load_params_file(path)?);
        self.install(Arc::clone(&model));
        info!(
            "loaded model from {} ({} tokens)",
            path.display(),
            model.vocabulary_size()
        );
        Ok(model)
    }

    /// Train on `examples` and swap the result in. On failure the current
    /// model stays.
    pub fn train<'a, I>(&self, examples: I) -> Result<Arc<Model>>
    where
        I: IntoIterator<Item = &'a TrainingExample>,
    {
        let model = Arc::new(fit(examples)?);
        self.install(Arc::clone(&model));
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenize;
    use crate::error::ErrorKind;
    use crate::model::Label;

    #[test]
    fn test_empty_store_is_not_trained() {
        let store = ModelStore::new();
        assert!(!store.is_loaded());
        assert_eq!(
            store.snapshot().unwrap_err().kind(),
            ErrorKind::ModelNotTrained
        );
    }

    #[test]
    fn test_replace_keeps_old_snapshot_alive() {
        let store = ModelStore::new();
        store
            .train(&[TrainingExample::new(Label::Positive, tokenize("good shop"))])
            .unwrap();
        let old = store.snapshot().unwrap();

        let current = store
            .train(&[TrainingExample::new(Label::Negative, tokenize("good shop"))])
            .unwrap();

        assert_eq!(old.classify("good shop").unwrap(), Label::Positive);
        assert_eq!(current.classify("good shop").unwrap(), Label::Negative);
    }

    #[test]
    fn test_swaps_return_the_installed_snapshot() {
        let store = ModelStore::new();
        let trained = store
            .train(&[TrainingExample::new(Label::Positive, tokenize("good shop"))])
            .unwrap();
        store.replace(
            fit(&[TrainingExample::new(Label::Negative, tokenize("bad"))]).unwrap(),
        );

        // The returned snapshot is the trained model, not whatever is current.
        assert_eq!(trained.vocabulary_size(), 2);
        assert_eq!(store.snapshot().unwrap().vocabulary_size(), 1);
        assert!(!Arc::ptr_eq(&trained, &store.snapshot().unwrap()));
    }

    #[test]
    fn test_failed_train_keeps_current_model() {
        let store = ModelStore::new();
        store
            .train(&[TrainingExample::new(Label::Neutral, tokenize("average"))])
            .unwrap();

        assert!(store.train(&Vec::<TrainingExample>::new()).is_err());
        assert_eq!(
            store.snapshot().unwrap().classify("average").unwrap(),
            Label::Neutral
        );
    }

    #[test]
    fn test_failed_reload_keeps_current_model() {
        let store = ModelStore::new();
        store
            .train(&[TrainingExample::new(Label::Neutral, tokenize("average"))])
            .unwrap();

        let err = store.reload("/nonexistent/params.json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert!(store.is_loaded());
    }
}
