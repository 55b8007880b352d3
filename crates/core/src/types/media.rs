//! Media items: the unit of content handed to a playback handle

use crate::types::{Book, Chapter};
use serde::{Deserialize, Serialize};

/// One entry in a playback handle's working item list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub media_id: String,
    pub url: String,
    pub title: String,
    pub artist: String,
}

impl MediaItem {
    /// Builds a media item from a chapter; the book's author becomes the
    /// item's artist.
    pub fn from_chapter(chapter: &Chapter, artist: impl Into<String>) -> Self {
        Self {
            media_id: chapter.audio.media_id.clone(),
            url: chapter.audio.url.clone(),
            title: chapter.title.clone(),
            artist: artist.into(),
        }
    }
}

impl Book {
    /// Projects the ordered chapter list into playback items
    pub fn media_items(&self) -> Vec<MediaItem> {
        self.chapters
            .iter()
            .map(|chapter| MediaItem::from_chapter(chapter, &self.author))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AudioTrack;

    fn chapter(n: usize) -> Chapter {
        Chapter::new(
            format!("Chapter {n}"),
            AudioTrack::new(format!("id_{n}"), format!("https://example.com/{n}"), "3:00"),
            "text",
        )
    }

    #[test]
    fn test_from_chapter() {
        let item = MediaItem::from_chapter(&chapter(1), "The Author");
        assert_eq!(item.media_id, "id_1");
        assert_eq!(item.url, "https://example.com/1");
        assert_eq!(item.title, "Chapter 1");
        assert_eq!(item.artist, "The Author");
    }

    #[test]
    fn test_media_items_preserve_order() {
        let book = Book::new(
            "Book",
            "Author",
            "cover",
            "desc",
            vec![chapter(1), chapter(2), chapter(3)],
        );

        let items = book.media_items();
        assert_eq!(items.len(), 3);
        let ids: Vec<_> = items.iter().map(|i| i.media_id.as_str()).collect();
        assert_eq!(ids, vec!["id_1", "id_2", "id_3"]);
        assert!(items.iter().all(|i| i.artist == "Author"));
    }
}
