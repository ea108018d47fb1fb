/// Navigation direction shared by the viewer and the marquee arrows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    #[inline]
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowLeft" => Some(Direction::Prev),
            "ArrowRight" => Some(Direction::Next),
            _ => None,
        }
    }

    /// Adjacent index with wrap-around at both ends. An empty list yields 0.
    #[inline]
    pub fn step(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let index = index % len;
        match self {
            Direction::Prev => (index + len - 1) % len,
            Direction::Next => (index + 1) % len,
        }
    }
}
