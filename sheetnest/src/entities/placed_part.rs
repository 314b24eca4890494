use crate::entities::NestingPart;
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A [`NestingPart`] that has been placed on a sheet.
/// Coordinates are relative to the top-left corner of the usable area (inside the margin).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedPart {
    pub part: NestingPart,
    pub x: f32,
    pub y: f32,
    /// Whether the part was turned by 90°, swapping its width and height
    pub rotated: bool,
}

impl PlacedPart {
    pub fn new(part: NestingPart, anchor: Point, rotated: bool) -> Self {
        PlacedPart {
            part,
            x: anchor.x(),
            y: anchor.y(),
            rotated,
        }
    }

    /// Width of the part as it lies on the sheet
    pub fn width(&self) -> f32 {
        match self.rotated {
            true => self.part.height,
            false => self.part.width,
        }
    }

    /// Height of the part as it lies on the sheet
    pub fn height(&self) -> f32 {
        match self.rotated {
            true => self.part.width,
            false => self.part.height,
        }
    }

    /// Bounding box of the part, relative to the usable area
    pub fn rect(&self) -> Rect {
        Rect::from_anchor(Point(self.x, self.y), self.width(), self.height())
    }

    /// Bounding box of the part in sheet coordinates (margin included)
    pub fn sheet_rect(&self, margin: f32) -> Rect {
        self.rect().translate(margin, margin)
    }

    /// Region blocked by this part for any later placement
    pub fn footprint(&self, spacing: f32) -> OccupiedSpace {
        OccupiedSpace::from(self.rect().grow(spacing))
    }
}

/// Footprint of a placed part, grown by the spacing towards the right and the bottom.
/// Only used for collision checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OccupiedSpace {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl OccupiedSpace {
    pub fn rect(&self) -> Rect {
        Rect::from_anchor(Point(self.x, self.y), self.w, self.h)
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.w
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.h
    }
}

impl From<Rect> for OccupiedSpace {
    fn from(r: Rect) -> Self {
        OccupiedSpace {
            x: r.x_min,
            y: r.y_min,
            w: r.width(),
            h: r.height(),
        }
    }
}
