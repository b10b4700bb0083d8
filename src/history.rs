use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::translate::Translation;

/// One completed translation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TranslationRecord {
    pub fn new(translation: Translation, thumbnail_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: translation.title,
            text: translation.text,
            thumbnail_url,
            created_at: Utc::now(),
        }
    }
}

/// Append-only session history of completed translations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    records: Vec<TranslationRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TranslationRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest(&self) -> Option<&TranslationRecord> {
        self.records.last()
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &TranslationRecord> {
        self.records.iter().rev()
    }

    pub async fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        info!("Saved {} translation(s) to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, title: &str) -> TranslationRecord {
        TranslationRecord::new(
            Translation { text: text.to_string(), title: title.to_string() },
            None,
        )
    }

    #[test]
    fn test_records_get_unique_ids() {
        let a = record("hola", "Greeting");
        let b = record("hola", "Greeting");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_iter_is_newest_first() {
        let mut history = History::new();
        assert!(history.is_empty());
        history.push(record("first", "One"));
        history.push(record("second", "Two"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().text, "second");
        let titles: Vec<&str> = history.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Two", "One"]);
    }

    #[tokio::test]
    async fn test_save_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = History::new();
        history.push(TranslationRecord::new(
            Translation { text: "hola".to_string(), title: "Conversation".to_string() },
            Some("https://host/upload/so_1/v1/a.jpg".to_string()),
        ));
        history.save_json(&path).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: History = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded.latest().unwrap().thumbnail_url.as_deref(),
            Some("https://host/upload/so_1/v1/a.jpg")
        );
    }
}
