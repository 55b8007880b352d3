//! Home screen state holder
//!
//! A thin, read-only projection of the catalog for the book list screen:
//! all books plus the key points of the currently selected book. The
//! selection defaults to the first book.

use bookplayer_catalog::Catalog;
use bookplayer_core::{Book, Chapter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Snapshot of the home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HomeState {
    pub selected: usize,
    pub books: Vec<Book>,
    pub key_points: Vec<Chapter>,
}

impl HomeState {
    /// The currently selected book, if the catalog is non-empty
    pub fn selected_book(&self) -> Option<&Book> {
        self.books.get(self.selected)
    }
}

/// Stateless holder exposing a catalog snapshot to the home screen
pub struct HomeModel {
    state: HomeState,
}

impl HomeModel {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let books = catalog.books().to_vec();
        let key_points = catalog
            .first()
            .map(|book| book.chapters.clone())
            .unwrap_or_default();

        Self {
            state: HomeState {
                selected: 0,
                books,
                key_points,
            },
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }
}
