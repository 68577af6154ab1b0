pub mod geometry;
pub mod letterforms;
pub mod scene_model;

pub use geometry::{arc_points, deg_to_rad, rotated_canvas_side, CanvasSize};
pub use letterforms::{
    mad_men_title, FigureDef, LetterDef, LetterformDef, PathChainDef, SegmentDef, ShapeDef,
};
pub use scene_model::{
    FallingSpriteDef, SheetCell, FALLING_SHEET_CELLS, FALLING_SPRITES, FINAL_IMAGE_ORIGIN,
};
