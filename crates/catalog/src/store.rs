//! The catalog value and its bundled sample dataset

use bookplayer_core::{AudioTrack, Book, Chapter, CoreError, Result};
use serde::{Deserialize, Serialize};

/// Read-only collection of books. Accessors only; there are no mutation
/// operations after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates a catalog from an already-loaded book list
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Returns all books in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Gets a book by 0-based index
    pub fn book(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Gets a book by index, with a typed error for missing entries
    pub fn require(&self, index: usize) -> Result<&Book> {
        self.books.get(index).ok_or(CoreError::BookNotFound {
            index,
            len: self.books.len(),
        })
    }

    /// Returns the first book, if any
    pub fn first(&self) -> Option<&Book> {
        self.books.first()
    }

    /// Returns the number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The fixed demo dataset: one audiobook with five key points, each
    /// carrying an audio track and a transcript.
    pub fn sample() -> Self {
        let transcript = "Attention is a finite budget. Every notification, every open tab, \
             every half-finished conversation draws against it, and the balance \
             does not restore itself until the switching stops. Guarding long \
             unbroken blocks of focus is therefore the first practical skill.";

        let chapters = vec![
            Chapter::new(
                "Attention is a budget, not a faucet",
                AudioTrack::new(
                    "practice_of_attention_1",
                    "https://cdn.example.com/audio/practice_of_attention/01.mp3",
                    "3:00",
                ),
                transcript,
            ),
            Chapter::new(
                "Switching costs compound",
                AudioTrack::new(
                    "practice_of_attention_2",
                    "https://cdn.example.com/audio/practice_of_attention/02.mp3",
                    "3:00",
                ),
                transcript,
            ),
            Chapter::new(
                "Rituals beat willpower",
                AudioTrack::new(
                    "practice_of_attention_3",
                    "https://cdn.example.com/audio/practice_of_attention/03.mp3",
                    "3:00",
                ),
                transcript,
            ),
            Chapter::new(
                "Boredom is training",
                AudioTrack::new(
                    "practice_of_attention_4",
                    "https://cdn.example.com/audio/practice_of_attention/04.mp3",
                    "3:00",
                ),
                transcript,
            ),
            Chapter::new(
                "Depth is a choice made daily",
                AudioTrack::new(
                    "practice_of_attention_5",
                    "https://cdn.example.com/audio/practice_of_attention/05.mp3",
                    "3:00",
                ),
                transcript,
            ),
        ];

        Self::new(vec![Book::new(
            "The Practice of Attention",
            "M. Harlan",
            "https://cdn.example.com/covers/practice_of_attention.jpg",
            "A short field guide to reclaiming sustained focus in a world built \
             to interrupt it, distilled into five key ideas.",
            chapters,
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookplayer_core::Validator;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.first().is_none());
        assert!(catalog.book(0).is_none());
    }

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 1);

        let book = catalog.first().unwrap();
        assert_eq!(book.chapter_count(), 5);
        assert!(book.is_valid());
    }

    #[test]
    fn test_sample_media_ids_are_stable_and_unique() {
        let catalog = Catalog::sample();
        let book = catalog.first().unwrap();
        let mut ids: Vec<_> = book.chapters.iter().map(|c| c.audio.media_id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_require_out_of_range() {
        let catalog = Catalog::sample();
        let err = catalog.require(7).unwrap_err();
        assert_eq!(err, CoreError::BookNotFound { index: 7, len: 1 });
    }

    #[test]
    fn test_require_in_range() {
        let catalog = Catalog::sample();
        assert!(catalog.require(0).is_ok());
    }
}
