use crate::math::Vec2;

/// Axis-aligned box in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl Rect<f32> {
    pub const ZERO: Self = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub fn from_origin_size(origin: Vec2, size: Size<f32>) -> Self {
        Rect::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<f32> {
        Size::new(self.width, self.height)
    }

    /// Returns the rect moved by `offset`, keeping its size.
    pub fn translate(&self, offset: Vec2) -> Self {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

/// Per-edge values in CSS order (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T> Sides<T> {
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Sides {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Sides<U> {
        Sides {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }
}

impl<T: Clone> Sides<T> {
    pub fn all(value: T) -> Self {
        Sides::new(value.clone(), value.clone(), value.clone(), value)
    }
}
