use crate::core::direction::Direction;
use crate::core::media::MediaItem;

/// Ordered media references plus the index currently shown.
///
/// A group is never empty, so `current` always resolves and the index stays
/// in range through `navigate`.
#[derive(Clone, Debug)]
pub struct MediaGroup {
    items: Vec<MediaItem>,
    index: usize,
}

impl MediaGroup {
    /// Returns `None` for an empty list. An out-of-range start opens at 0.
    pub fn new(items: Vec<MediaItem>, start: usize) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let index = if start < items.len() { start } else { 0 };
        Some(Self { items, index })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn current(&self) -> &MediaItem {
        &self.items[self.index]
    }

    pub fn navigate(&mut self, dir: Direction) -> &MediaItem {
        self.index = dir.step(self.index, self.items.len());
        self.current()
    }

    pub fn next(&mut self) -> &MediaItem {
        self.navigate(Direction::Next)
    }

    pub fn prev(&mut self) -> &MediaItem {
        self.navigate(Direction::Prev)
    }
}
