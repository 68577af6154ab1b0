// src/services/sprite_sheet.rs
// Cuts the sprite sheet into one image per falling sprite.

use nannou::image::{imageops, RgbaImage};

use super::AssetError;
use crate::models::SheetCell;

pub fn slice_sheet(sheet: &RgbaImage, cells: &[SheetCell]) -> Result<Vec<RgbaImage>, AssetError> {
    let (sheet_width, sheet_height) = sheet.dimensions();

    cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let fits = cell.width > 0
                && cell.height > 0
                && cell.x.checked_add(cell.width).is_some_and(|right| right <= sheet_width)
                && cell.y.checked_add(cell.height).is_some_and(|bottom| bottom <= sheet_height);
            if !fits {
                return Err(AssetError::CellOutOfBounds {
                    index,
                    sheet_width,
                    sheet_height,
                });
            }
            Ok(imageops::crop_imm(sheet, cell.x, cell.y, cell.width, cell.height).to_image())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FALLING_SHEET_CELLS;
    use nannou::image::Rgba;

    #[test]
    fn test_cells_are_cut_at_their_offsets() {
        let mut sheet = RgbaImage::new(20, 10);
        sheet.put_pixel(5, 2, Rgba([255, 0, 0, 255]));

        let cells = [SheetCell::new(5, 2, 4, 3), SheetCell::new(0, 0, 20, 10)];
        let sprites = slice_sheet(&sheet, &cells).unwrap();

        assert_eq!(sprites[0].dimensions(), (4, 3));
        assert_eq!(sprites[0].get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(sprites[1].dimensions(), (20, 10));
    }

    #[test]
    fn test_falling_cells_fit_the_authored_sheet() {
        let sheet = RgbaImage::new(1340, 1040);
        let sprites = slice_sheet(&sheet, &FALLING_SHEET_CELLS).unwrap();
        let sizes: Vec<(u32, u32)> = sprites.iter().map(|s| s.dimensions()).collect();
        assert_eq!(sizes, vec![(400, 339), (200, 226), (500, 543), (200, 70), (500, 471)]);
    }

    #[test]
    fn test_cell_outside_the_sheet_is_an_error() {
        let sheet = RgbaImage::new(100, 100);
        let result = slice_sheet(&sheet, &[SheetCell::new(90, 0, 20, 20)]);
        assert!(matches!(
            result,
            Err(AssetError::CellOutOfBounds { index: 0, .. })
        ));
    }
}
