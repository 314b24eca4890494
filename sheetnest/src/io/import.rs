use crate::entities::{NestingOptions, NestingPart, PartShape};
use crate::io::ext_repr::{ExtInstance, ExtPartRow};
use anyhow::{Context, Result, ensure};
use log::debug;

/// Validates an instance and expands its part list, see [`import_parts`].
pub fn import(ext_instance: &ExtInstance) -> Result<(NestingOptions, Vec<NestingPart>)> {
    ext_instance
        .options
        .validate()
        .with_context(|| format!("invalid options in instance {}", ext_instance.name))?;
    let parts = import_parts(&ext_instance.parts, ext_instance.preview.as_ref())?;
    debug!(
        "[IMPORT] instance {} expanded into {} parts",
        ext_instance.name,
        parts.len()
    );
    Ok((ext_instance.options, parts))
}

/// Expands part rows into one [`NestingPart`] per unit.
///
/// Parts receive sequential ids, `original_index` refers to the row they stem from.
/// The preview part (if any, and with a non-zero quantity) is appended as a single unit with
/// `original_index == rows.len()`.
pub fn import_parts(rows: &[ExtPartRow], preview: Option<&ExtPartRow>) -> Result<Vec<NestingPart>> {
    let mut parts = vec![];
    for (index, row) in rows.iter().enumerate() {
        validate_row(row).with_context(|| format!("invalid part row {index}"))?;
        for _ in 0..row.quantity {
            let part = NestingPart::new(parts.len(), row.width, row.height, row.shape)
                .with_original_index(index);
            parts.push(part);
        }
    }
    if let Some(row) = preview {
        validate_row(row).context("invalid preview part")?;
        if row.quantity > 0 {
            let part = NestingPart::new(parts.len(), row.width, row.height, row.shape)
                .with_original_index(rows.len())
                .as_preview();
            parts.push(part);
        }
    }
    Ok(parts)
}

fn validate_row(row: &ExtPartRow) -> Result<()> {
    ensure!(
        row.width.is_finite() && row.width > 0.0,
        "width must be positive, got {}",
        row.width
    );
    ensure!(
        row.height.is_finite() && row.height > 0.0,
        "height must be positive, got {}",
        row.height
    );
    if row.shape == PartShape::Circle {
        ensure!(
            row.width == row.height,
            "circles need equal width and height, got {}x{}",
            row.width,
            row.height
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn row(shape: PartShape, width: f32, height: f32, quantity: u64) -> ExtPartRow {
        ExtPartRow {
            shape,
            width,
            height,
            quantity,
        }
    }

    #[test]
    fn quantities_are_expanded() {
        let rows = vec![
            row(PartShape::Rectangle, 600.0, 400.0, 2),
            row(PartShape::Circle, 100.0, 100.0, 0),
            row(PartShape::Circle, 50.0, 50.0, 3),
        ];
        let parts = import_parts(&rows, None).unwrap();
        assert_eq!(parts.len(), 5);
        assert_eq!(parts.iter().map(|p| p.id).collect_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            parts.iter().map(|p| p.original_index).collect_vec(),
            vec![0, 0, 2, 2, 2]
        );
        assert!(parts.iter().all(|p| !p.is_preview));
    }

    #[test]
    fn preview_is_a_single_unit() {
        let rows = vec![row(PartShape::Rectangle, 600.0, 400.0, 1)];
        let preview = row(PartShape::Rectangle, 200.0, 100.0, 7);
        let parts = import_parts(&rows, Some(&preview)).unwrap();
        assert_eq!(parts.len(), 2);
        assert!(parts[1].is_preview);
        assert_eq!(parts[1].original_index, 1);
    }

    #[test]
    fn invalid_rows_are_rejected() {
        assert!(import_parts(&[row(PartShape::Rectangle, 0.0, 10.0, 1)], None).is_err());
        assert!(import_parts(&[row(PartShape::Rectangle, 10.0, f32::NAN, 1)], None).is_err());
        assert!(import_parts(&[row(PartShape::Circle, 10.0, 20.0, 1)], None).is_err());
    }

    #[test]
    fn instance_options_are_validated() {
        let instance = ExtInstance {
            name: "bad".into(),
            options: NestingOptions {
                sheet_width: -1.0,
                ..NestingOptions::default()
            },
            parts: vec![],
            preview: None,
        };
        assert!(import(&instance).is_err());
    }
}
