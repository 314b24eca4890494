use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Outline of a part. Circles are described by their bounding box (`width == height == diameter`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartShape {
    Rectangle,
    Circle,
}

/// A single physical unit to be cut out of a sheet.
/// Quantities are expanded before nesting, so every copy is its own [`NestingPart`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestingPart {
    pub id: usize,
    /// Width of the bounding box in mm
    pub width: f32,
    /// Height of the bounding box in mm
    pub height: f32,
    pub shape: PartShape,
    /// Speculative part, only included to show the impact of adding it
    #[serde(default)]
    pub is_preview: bool,
    /// Index of the row in the part list this unit was expanded from
    pub original_index: usize,
}

impl NestingPart {
    pub fn new(id: usize, width: f32, height: f32, shape: PartShape) -> Self {
        NestingPart {
            id,
            width,
            height,
            shape,
            is_preview: false,
            original_index: id,
        }
    }

    pub fn rectangle(id: usize, width: f32, height: f32) -> Self {
        NestingPart::new(id, width, height, PartShape::Rectangle)
    }

    pub fn circle(id: usize, diameter: f32) -> Self {
        NestingPart::new(id, diameter, diameter, PartShape::Circle)
    }

    pub fn with_original_index(mut self, original_index: usize) -> Self {
        self.original_index = original_index;
        self
    }

    pub fn as_preview(mut self) -> Self {
        self.is_preview = true;
        self
    }

    /// Material actually consumed by the part
    pub fn area(&self) -> f32 {
        match self.shape {
            PartShape::Rectangle => self.width * self.height,
            PartShape::Circle => PI / 4.0 * self.width * self.height,
        }
    }

    pub fn perimeter(&self) -> f32 {
        match self.shape {
            PartShape::Rectangle => 2.0 * (self.width + self.height),
            PartShape::Circle => PI * (self.width + self.height) / 2.0,
        }
    }

    /// Whether rotating the part by 90° yields a different footprint.
    /// Never true for circles and squares.
    pub fn is_rotatable(&self) -> bool {
        self.shape != PartShape::Circle && self.width != self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn circle_area_is_smaller_than_its_bounding_box() {
        let c = NestingPart::circle(0, 100.0);
        assert!(approx_eq!(f32, c.area(), 7853.9816, epsilon = 0.01));
        assert!(approx_eq!(f32, c.perimeter(), 314.15927, epsilon = 0.01));
    }

    #[test]
    fn squares_and_circles_do_not_rotate() {
        assert!(!NestingPart::circle(0, 50.0).is_rotatable());
        assert!(!NestingPart::rectangle(1, 50.0, 50.0).is_rotatable());
        assert!(NestingPart::rectangle(2, 50.0, 80.0).is_rotatable());
    }

    #[test]
    fn serde_uses_lowercase_shapes() {
        let part = NestingPart::circle(3, 20.0).as_preview();
        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains("\"shape\":\"circle\""));
        let back: NestingPart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, part);
    }
}
