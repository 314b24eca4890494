use crate::entities::{NestingOptions, NestingPart, NestingResult, PlacedPart};
use crate::io::ext_repr::{ExtPart, ExtPlacedPart, ExtSheet, ExtSolution};

/// Exports a result out of the library
pub fn export(result: &NestingResult, options: &NestingOptions) -> ExtSolution {
    ExtSolution {
        sheets_needed: result.sheets_needed(),
        total_efficiency: result.total_efficiency,
        total_wasted_area: result.total_wasted_area,
        sheets: result
            .sheets
            .iter()
            .enumerate()
            .map(|(index, sheet)| ExtSheet {
                index,
                efficiency: sheet.efficiency,
                wasted_area: sheet.wasted_area,
                placements: sheet
                    .placements
                    .iter()
                    .map(|pp| export_placed_part(pp, options))
                    .collect(),
            })
            .collect(),
        unplaced: result.unplaced_parts.iter().map(export_part).collect(),
    }
}

pub fn export_placed_part(placed_part: &PlacedPart, options: &NestingOptions) -> ExtPlacedPart {
    let sheet_rect = placed_part.sheet_rect(options.margin);
    ExtPlacedPart {
        part_id: placed_part.part.id,
        original_index: placed_part.part.original_index,
        shape: placed_part.part.shape,
        x: placed_part.x,
        y: placed_part.y,
        sheet_x: sheet_rect.x_min,
        sheet_y: sheet_rect.y_min,
        width: placed_part.width(),
        height: placed_part.height(),
        rotated: placed_part.rotated,
        is_preview: placed_part.part.is_preview,
    }
}

pub fn export_part(part: &NestingPart) -> ExtPart {
    ExtPart {
        id: part.id,
        original_index: part.original_index,
        shape: part.shape,
        width: part.width,
        height: part.height,
        is_preview: part.is_preview,
    }
}
