//! Snippet storage — the ordered prompt list and its persistence.
//!
//! The whole collection lives in one JSON document under the platform
//! config dir, read in full at startup and written in full after every
//! mutation. Last writer wins; there is no incremental diffing and no
//! locking beyond the Tauri managed-state mutex around the store.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, persisted block of reusable text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    /// Unique, monotonic-ish: millisecond creation timestamp, bumped on
    /// collision. Stable across edits.
    pub id: String,
    pub title: String,
    pub text: String,
}

pub const TITLE_MAX_CHARS: usize = 100;
pub const TEXT_MIN_CHARS: usize = 10;

/// A save request violated the snippet contract. Messages are shown
/// verbatim next to the offending field in the popup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Title must be less than 100 characters")]
    TitleTooLong,
    #[error("A prompt with this title already exists")]
    DuplicateTitle,
    #[error("Prompt text is required")]
    EmptyText,
    #[error("Prompt text must be at least 10 characters")]
    TextTooShort,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no prompt with id {0}")]
    NotFound(String),
    #[error("failed writing prompt file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed encoding prompt file: {0}")]
    Encode(#[from] serde_json::Error),
}

/// On-disk shape: a named bucket keyed "prompts". A missing key (or a
/// missing file) is an empty collection.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PromptFile {
    #[serde(default)]
    prompts: Vec<Snippet>,
}

/// Owns the in-memory snippet list and its file. All mutation goes through
/// here so validation and persistence can never be skipped.
pub struct SnippetStore {
    path: PathBuf,
    prompts: Vec<Snippet>,
}

/// Default location of the prompt file.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prompt-dock")
        .join("prompts.json")
}

impl SnippetStore {
    /// Load the collection from `path`. A missing file is an empty store;
    /// an unreadable one is logged and treated as empty rather than
    /// blocking startup.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prompts = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<PromptFile>(&raw) {
                Ok(file) => file.prompts,
                Err(e) => {
                    log::warn!("[STORE] Could not parse {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        log::info!("[STORE] Loaded {} prompts from {}", prompts.len(), path.display());
        Self { path, prompts }
    }

    pub fn all(&self) -> &[Snippet] {
        &self.prompts
    }

    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.prompts.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring filter over title and text, preserving
    /// collection order. An empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<Snippet> {
        let needle = query.to_lowercase();
        self.prompts
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.text.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Create a snippet at the end of the collection.
    pub fn add(&mut self, title: &str, text: &str) -> Result<Snippet, StoreError> {
        let title = title.trim();
        let text = text.trim();
        self.validate(title, text, None)?;

        let snippet = Snippet {
            id: self.next_id(),
            title: title.to_string(),
            text: text.to_string(),
        };
        self.prompts.push(snippet.clone());
        self.persist()?;
        log::info!("[STORE] Added prompt '{}' ({})", snippet.title, snippet.id);
        Ok(snippet)
    }

    /// Edit title/text in place; id and collection position are stable.
    pub fn update(&mut self, id: &str, title: &str, text: &str) -> Result<Snippet, StoreError> {
        let title = title.trim();
        let text = text.trim();
        self.validate(title, text, Some(id))?;

        let snippet = self
            .prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        snippet.title = title.to_string();
        snippet.text = text.to_string();
        let updated = snippet.clone();
        self.persist()?;
        log::info!("[STORE] Updated prompt '{}' ({})", updated.title, id);
        Ok(updated)
    }

    pub fn remove(&mut self, id: &str) -> Result<Snippet, StoreError> {
        let index = self
            .prompts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let removed = self.prompts.remove(index);
        self.persist()?;
        log::info!("[STORE] Deleted prompt '{}' ({})", removed.title, id);
        Ok(removed)
    }

    fn validate(
        &self,
        title: &str,
        text: &str,
        editing_id: Option<&str>,
    ) -> Result<(), ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(ValidationError::TitleTooLong);
        }
        let duplicate = self.prompts.iter().any(|p| {
            p.title.to_lowercase() == title.to_lowercase() && Some(p.id.as_str()) != editing_id
        });
        if duplicate {
            return Err(ValidationError::DuplicateTitle);
        }
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if text.chars().count() < TEXT_MIN_CHARS {
            return Err(ValidationError::TextTooShort);
        }
        Ok(())
    }

    /// Millisecond timestamp, bumped past any existing id on collision so
    /// two saves in the same millisecond still get distinct ids.
    fn next_id(&self) -> String {
        let mut candidate = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        while self.prompts.iter().any(|p| p.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// Write the whole collection to disk.
    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = PromptFile { prompts: self.prompts.clone() };
        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    #[cfg(test)]
    fn path(&self) -> &PathBuf {
        &self.path
    }
}
