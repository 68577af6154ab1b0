// src/models/letterforms.rs
// Hand-authored letterforms for the "MAD MEN" title.
//
// Letters are either path chains (one uncut line made of straight and angled
// segments) or shapes (independent lines and arcs drawn in sync).
// All coordinates are canvas space.

use nannou::prelude::*;

/// One segment of a path chain.
/// A straight segment only needs its end point; a chain's opening straight
/// segment also carries its start point.
/// An angled segment carries its vertex and its end point.
#[derive(Debug, Clone)]
pub struct SegmentDef {
    pub is_angle: bool,
    pub coords: Vec<Point2>,
}

impl SegmentDef {
    pub fn straight(coords: &[(f32, f32)]) -> Self {
        Self {
            is_angle: false,
            coords: to_points(coords),
        }
    }

    pub fn angle(coords: &[(f32, f32)]) -> Self {
        Self {
            is_angle: true,
            coords: to_points(coords),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PathChainDef {
    pub velocity: f64, // fraction of a segment drawn per tick, in (0, 1]
    pub segments: Vec<SegmentDef>,
}

#[derive(Debug, Clone)]
pub enum FigureDef {
    Line {
        from: Point2,
        to: Point2,
    },
    // angles in degrees, canvas convention (clockwise on screen)
    Arc {
        center: Point2,
        radius: f32,
        start_angle: f32,
        full_angle: f32,
    },
}

#[derive(Debug, Clone)]
pub struct ShapeDef {
    pub velocity: f64,
    pub figures: Vec<FigureDef>,
}

#[derive(Debug, Clone)]
pub enum LetterformDef {
    Chain(PathChainDef),
    Shape(ShapeDef),
}

#[derive(Debug, Clone)]
pub struct LetterDef {
    pub name: char,
    pub color: Rgba,
    pub form: LetterformDef,
}

// #020202
pub fn ink_color() -> Rgba {
    rgba(2.0 / 255.0, 2.0 / 255.0, 2.0 / 255.0, 1.0)
}

// #c32a25
pub fn accent_color() -> Rgba {
    rgba(195.0 / 255.0, 42.0 / 255.0, 37.0 / 255.0, 1.0)
}

fn to_points(coords: &[(f32, f32)]) -> Vec<Point2> {
    coords.iter().map(|&(x, y)| pt2(x, y)).collect()
}

fn line(from: (f32, f32), to: (f32, f32)) -> FigureDef {
    FigureDef::Line {
        from: pt2(from.0, from.1),
        to: pt2(to.0, to.1),
    }
}

/// The title in drawing order: "MAD" in ink, "MEN" in the accent color.
pub fn mad_men_title() -> Vec<LetterDef> {
    vec![
        LetterDef {
            name: 'M',
            color: ink_color(),
            form: LetterformDef::Chain(first_m()),
        },
        LetterDef {
            name: 'A',
            color: ink_color(),
            form: LetterformDef::Chain(letter_a()),
        },
        LetterDef {
            name: 'D',
            color: ink_color(),
            form: LetterformDef::Shape(letter_d()),
        },
        LetterDef {
            name: 'M',
            color: accent_color(),
            form: LetterformDef::Chain(second_m()),
        },
        LetterDef {
            name: 'E',
            color: accent_color(),
            form: LetterformDef::Shape(letter_e()),
        },
        LetterDef {
            name: 'N',
            color: accent_color(),
            form: LetterformDef::Chain(letter_n()),
        },
    ]
}

pub fn first_m() -> PathChainDef {
    PathChainDef {
        velocity: 0.01,
        segments: vec![
            SegmentDef::straight(&[(450.0, 370.0), (450.0, 230.0)]),
            SegmentDef::angle(&[(450.0, 220.0), (455.0, 235.0)]),
            SegmentDef::straight(&[(504.0, 360.0)]),
            SegmentDef::angle(&[(505.0, 365.0), (506.0, 360.0)]),
            SegmentDef::straight(&[(555.0, 245.0)]),
            SegmentDef::angle(&[(565.0, 220.0), (565.0, 230.0)]),
            SegmentDef::straight(&[(565.0, 370.0)]),
        ],
    }
}

pub fn letter_a() -> PathChainDef {
    PathChainDef {
        velocity: 0.01,
        segments: vec![
            SegmentDef::straight(&[(605.0, 370.0), (652.0, 230.0)]),
            SegmentDef::angle(&[(655.0, 220.0), (658.0, 230.0)]),
            SegmentDef::straight(&[(705.0, 370.0)]),
            SegmentDef::straight(&[(685.0, 320.0)]),
            SegmentDef::straight(&[(625.0, 320.0)]),
        ],
    }
}

pub fn letter_d() -> ShapeDef {
    ShapeDef {
        velocity: 0.0025,
        figures: vec![
            line((745.0, 370.0), (745.0, 220.0)),
            FigureDef::Arc {
                center: pt2(745.0, 295.0),
                radius: 65.0,
                start_angle: 270.0,
                full_angle: 180.0,
            },
        ],
    }
}

pub fn second_m() -> PathChainDef {
    PathChainDef {
        velocity: 0.01,
        segments: vec![
            SegmentDef::straight(&[(845.0, 370.0), (845.0, 230.0)]),
            SegmentDef::angle(&[(845.0, 220.0), (855.0, 245.0)]),
            SegmentDef::straight(&[(904.0, 360.0)]),
            SegmentDef::angle(&[(905.0, 365.0), (906.0, 360.0)]),
            SegmentDef::straight(&[(955.0, 245.0)]),
            SegmentDef::angle(&[(965.0, 220.0), (965.0, 230.0)]),
            SegmentDef::straight(&[(965.0, 370.0)]),
        ],
    }
}

pub fn letter_e() -> ShapeDef {
    ShapeDef {
        velocity: 0.0025,
        figures: vec![
            line((1005.0, 220.0), (1005.0, 370.0)),
            line((1005.0, 230.0), (1095.0, 230.0)),
            line((1005.0, 295.0), (1095.0, 295.0)),
            line((1005.0, 360.0), (1095.0, 360.0)),
        ],
    }
}

pub fn letter_n() -> PathChainDef {
    PathChainDef {
        velocity: 0.008,
        segments: vec![
            SegmentDef::straight(&[(1125.0, 370.0), (1125.0, 245.0)]),
            SegmentDef::angle(&[(1125.0, 225.0), (1135.0, 245.0)]),
            SegmentDef::straight(&[(1195.0, 345.0)]),
            SegmentDef::angle(&[(1205.0, 365.0), (1205.0, 345.0)]),
            SegmentDef::straight(&[(1205.0, 220.0)]),
        ],
    }
}
