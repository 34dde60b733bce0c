/// Integer 2D offset, top-left origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset2Di {
    pub x: i32,
    pub y: i32,
}

/// Integer 2D extent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent2Di {
    pub width: i32,
    pub height: i32,
}

/// Integer rectangle, laid out like `XrRect2Di` so sub-image rects can be
/// handed to a runtime unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect2Di {
    pub offset: Offset2Di,
    pub extent: Extent2Di,
}

impl Rect2Di {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            offset: Offset2Di { x, y },
            extent: Extent2Di { width, height },
        }
    }

    /// Exclusive right edge, widened so it cannot overflow.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.offset.x as i64 + self.extent.width as i64
    }

    /// Exclusive bottom edge, widened so it cannot overflow.
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.offset.y as i64 + self.extent.height as i64
    }

    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.offset.x
            && (x as i64) < self.right()
            && y >= self.offset.y
            && (y as i64) < self.bottom()
    }
}
