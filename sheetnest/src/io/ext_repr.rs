use crate::entities::{NestingOptions, PartShape};
use serde::{Deserialize, Serialize};

/// A part list as entered by the user, together with the sheet it should be nested on
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub options: NestingOptions,
    /// Part types with their quantities
    pub parts: Vec<ExtPartRow>,
    /// Optional speculative part, nested as a single unit on top of `parts`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<ExtPartRow>,
}

/// A part type with a demand
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPartRow {
    pub shape: PartShape,
    /// Width in mm, the diameter for circles
    pub width: f32,
    /// Height in mm, the diameter for circles
    pub height: f32,
    /// Amount of times this part has to be produced
    pub quantity: u64,
}

/// Nesting result
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// Number of stock sheets needed
    pub sheets_needed: usize,
    /// Sum of the area of the placed parts divided by the sum of the usable area of the sheets
    pub total_efficiency: f32,
    pub total_wasted_area: f32,
    pub sheets: Vec<ExtSheet>,
    /// Parts which fit on no sheet
    pub unplaced: Vec<ExtPart>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheet {
    pub index: usize,
    pub efficiency: f32,
    pub wasted_area: f32,
    pub placements: Vec<ExtPlacedPart>,
}

/// A part as it lies on a sheet.
/// `x` and `y` are relative to the usable area, `sheet_x` and `sheet_y` to the corner of the sheet.
/// `width` and `height` are the dimensions after rotation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedPart {
    pub part_id: usize,
    pub original_index: usize,
    pub shape: PartShape,
    pub x: f32,
    pub y: f32,
    pub sheet_x: f32,
    pub sheet_y: f32,
    pub width: f32,
    pub height: f32,
    pub rotated: bool,
    pub is_preview: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPart {
    pub id: usize,
    pub original_index: usize,
    pub shape: PartShape,
    pub width: f32,
    pub height: f32,
    pub is_preview: bool,
}
