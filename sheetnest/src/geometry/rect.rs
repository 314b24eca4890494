use crate::geometry::CollidesWith;
use crate::geometry::Point;
use crate::util::FPA;
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle, `y` pointing downwards (top-left anchored)
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    pub fn try_new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self> {
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its top-left corner at `anchor` and the given dimensions.
    pub fn from_anchor(anchor: Point, width: f32, height: f32) -> Self {
        let Point(x, y) = anchor;
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    /// Returns a new rectangle grown by `d` towards the right and the bottom.
    /// The top-left corner stays in place.
    pub fn grow(self, d: f32) -> Self {
        Rect {
            x_max: self.x_max + d,
            y_max: self.y_max + d,
            ..self
        }
    }

    /// Returns a new rectangle translated by `(dx, dy)`.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Rect {
            x_min: self.x_min + dx,
            y_min: self.y_min + dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Whether `other` lies entirely within `self` (boundaries included, with float tolerance).
    pub fn contains(&self, other: &Rect) -> bool {
        FPA(other.x_min) >= FPA(self.x_min)
            && FPA(other.y_min) >= FPA(self.y_min)
            && FPA(other.x_max) <= FPA(self.x_max)
            && FPA(other.y_max) <= FPA(self.y_max)
    }

    /// Whether the open intervals `[y_min, y_max]` of both rectangles share a stretch of positive length.
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        FPA(f32::max(self.y_min, other.y_min)) < FPA(f32::min(self.y_max, other.y_max))
    }

    /// Whether the open intervals `[x_min, x_max]` of both rectangles share a stretch of positive length.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        FPA(f32::max(self.x_min, other.x_min)) < FPA(f32::min(self.x_max, other.x_max))
    }

    pub fn top_left(&self) -> Point {
        Point(self.x_min, self.y_min)
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f32 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }
}

impl CollidesWith<Rect> for Rect {
    /// Interiors overlap. Rectangles which only share (part of) an edge do not collide.
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        self.overlaps_horizontally(other) && self.overlaps_vertically(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rects_do_not_collide() {
        let a = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        let right = Rect::try_new(10.0, 0.0, 20.0, 10.0).unwrap();
        let below = Rect::try_new(0.0, 10.0, 10.0, 20.0).unwrap();
        let corner = Rect::try_new(10.0, 10.0, 20.0, 20.0).unwrap();
        assert!(!a.collides_with(&right));
        assert!(!a.collides_with(&below));
        assert!(!a.collides_with(&corner));
    }

    #[test]
    fn overlapping_rects_collide() {
        let a = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Rect::try_new(9.5, 9.5, 20.0, 20.0).unwrap();
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
    }

    #[test]
    fn containment_includes_boundary() {
        let outer = Rect::try_new(0.0, 0.0, 100.0, 50.0).unwrap();
        assert!(outer.contains(&Rect::from_anchor(Point(60.0, 0.0), 40.0, 50.0)));
        assert!(!outer.contains(&Rect::from_anchor(Point(60.0, 0.0), 40.5, 50.0)));
        assert!(!outer.contains(&Rect::from_anchor(Point(-0.5, 0.0), 10.0, 10.0)));
    }

    #[test]
    fn grow_keeps_anchor() {
        let r = Rect::from_anchor(Point(5.0, 7.0), 10.0, 20.0).grow(2.0);
        assert_eq!(r.top_left(), Point(5.0, 7.0));
        assert_eq!((r.width(), r.height()), (12.0, 22.0));
    }

    #[test]
    fn invalid_rect_is_rejected() {
        assert!(Rect::try_new(10.0, 0.0, 5.0, 10.0).is_err());
    }
}
