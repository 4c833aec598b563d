//! Reference vocabulary loading.
//!
//! Reads the bundled word-list document (the Oxford 3000 by default),
//! normalizes it with the same rule applied to passages, and caches the
//! resulting set for the process lifetime. The document never changes within
//! a run, so each path is read at most once; later calls return the cached
//! set. A missing or empty document is fatal for the request; there is no
//! degraded mode without reference vocabulary.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{VocabularyError, VocabularyResult};
use crate::text;

/// Default location of the bundled Oxford 3000 word list, relative to the
/// working directory.
pub const DEFAULT_WORD_LIST: &str = "assets/oxford-3000.txt";

/// Per-process cache, keyed by word-list path. Written once per path on
/// first load, read-only after.
static CACHE: LazyLock<Mutex<HashMap<Utf8PathBuf, Arc<HashSet<String>>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Load the reference word list at `path`, reading the file at most once
/// per process.
///
/// # Errors
///
/// [`VocabularyError::Read`] when the document cannot be opened or read,
/// [`VocabularyError::NoWords`] when it parses to an empty set.
#[tracing::instrument]
pub fn load_word_list(path: &Utf8Path) -> VocabularyResult<Arc<HashSet<String>>> {
    let mut cache = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(words) = cache.get(path) {
        tracing::debug!(path = %path, "word list cache hit");
        return Ok(Arc::clone(words));
    }

    let raw =
        std::fs::read_to_string(path.as_std_path()).map_err(|source| VocabularyError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let words = text::word_set(&raw);
    if words.is_empty() {
        return Err(VocabularyError::NoWords {
            path: path.to_path_buf(),
        });
    }

    tracing::info!(path = %path, words = words.len(), "word list loaded");
    let words = Arc::new(words);
    cache.insert(path.to_path_buf(), Arc::clone(&words));
    Ok(words)
}
