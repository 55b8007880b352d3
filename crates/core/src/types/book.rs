//! Book and chapter domain models
//!
//! A book is an ordered list of chapters ("key points"); each chapter
//! carries both an audio track and a text transcript. All of it is
//! immutable once constructed.

use crate::types::Validator;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    /// Creates a new random BookId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a BookId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the BookId as a string
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The audio side of a chapter: a stable identifier, a source locator
/// and a human-readable duration label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioTrack {
    /// Stable identifier the playback engine addresses this track by
    pub media_id: String,
    /// Source locator (remote URL or local path)
    pub url: String,
    /// Display label, e.g. "3:00"
    pub duration_label: String,
}

impl AudioTrack {
    pub fn new(
        media_id: impl Into<String>,
        url: impl Into<String>,
        duration_label: impl Into<String>,
    ) -> Self {
        Self {
            media_id: media_id.into(),
            url: url.into(),
            duration_label: duration_label.into(),
        }
    }
}

/// One addressable unit of content within a book, with both an audio
/// track and a text transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub audio: AudioTrack,
    pub transcript: String,
}

impl Chapter {
    pub fn new(title: impl Into<String>, audio: AudioTrack, transcript: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            audio,
            transcript: transcript.into(),
        }
    }
}

impl Validator for Chapter {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Chapter title cannot be empty".to_string());
        }

        if self.audio.media_id.trim().is_empty() {
            errors.push("Chapter media id cannot be empty".to_string());
        }

        if self.audio.url.trim().is_empty() {
            errors.push("Chapter audio url cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A complete audiobook: metadata plus its ordered chapter list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub cover_url: String,
    pub description: String,
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Creates a new book with a fresh id
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        cover_url: impl Into<String>,
        description: impl Into<String>,
        chapters: Vec<Chapter>,
    ) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
            cover_url: cover_url.into(),
            description: description.into(),
            chapters,
        }
    }

    /// Returns the number of chapters
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Gets a chapter by 0-based index
    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if self.chapters.is_empty() {
            errors.push("Book must have at least one chapter".to_string());
        }

        for chapter in &self.chapters {
            if let Err(chapter_errors) = chapter.validate() {
                errors.extend(chapter_errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
