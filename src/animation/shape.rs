// src/animation/shape.rs
//
// A shape is a set of lines and arcs drawn in sync: every figure shares the
// shape's step counter, so they all finish on the same tick.

use nannou::prelude::*;

use super::{step_plan, AnimationError};
use crate::draw::{CreditsSurface, StrokeStyle};
use crate::models::geometry::lerp_point;
use crate::models::{deg_to_rad, FigureDef, ShapeDef};

#[derive(Debug, Clone)]
struct LineFigure {
    draw_coords: Vec<Point2>, // start + one point per step
}

#[derive(Debug, Clone)]
struct ArcFigure {
    center: Point2,
    radius: f32,
    draw_arcs: Vec<(f32, f32)>, // (start_arc, end_arc) per step, radians
}

#[derive(Debug, Clone)]
pub struct Shape {
    lines: Vec<LineFigure>,
    arcs: Vec<ArcFigure>,
    steps: usize,
    move_index: usize,
    complete: bool,
}

impl Shape {
    pub fn new(def: &ShapeDef) -> Result<Self, AnimationError> {
        let (moves, steps) = step_plan(def.velocity)?;
        if def.figures.is_empty() {
            return Err(AnimationError::Empty);
        }

        let mut lines = Vec::new();
        let mut arcs = Vec::new();

        for figure in &def.figures {
            match figure {
                FigureDef::Line { from, to } => {
                    let mut draw_coords = Vec::with_capacity(steps + 1);
                    draw_coords.push(*from);
                    draw_coords
                        .extend((1..=steps).map(|step| lerp_point(*from, *to, step as f64 / moves)));
                    lines.push(LineFigure { draw_coords });
                }
                FigureDef::Arc {
                    center,
                    radius,
                    start_angle,
                    full_angle,
                } => {
                    let start_arc = deg_to_rad(*start_angle) as f64;
                    let velocity_arc = deg_to_rad(*full_angle) as f64 / moves;
                    let draw_arcs = (1..=steps)
                        .map(|step| {
                            (start_arc as f32, (start_arc + velocity_arc * step as f64) as f32)
                        })
                        .collect();
                    arcs.push(ArcFigure {
                        center: *center,
                        radius: *radius,
                        draw_arcs,
                    });
                }
            }
        }

        Ok(Self {
            lines,
            arcs,
            steps,
            move_index: 0,
            complete: false,
        })
    }

    /// Draws one tick of the shape: lines first, then arcs.
    pub fn animate(&mut self, surface: &mut dyn CreditsSurface, style: &StrokeStyle) {
        let index = self.move_index;

        for line in &self.lines {
            surface.stroke_polyline(&[line.draw_coords[0], line.draw_coords[index + 1]], style);
        }

        for arc in &self.arcs {
            let (start_arc, end_arc) = arc.draw_arcs[index];
            surface.stroke_arc(arc.center, arc.radius, start_arc, end_arc, style);
        }

        // saturates on the last step
        if index + 1 >= self.steps {
            self.complete = true;
        }
        self.move_index = (index + 1).min(self.steps - 1);
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn move_index(&self) -> usize {
        self.move_index
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recorder::{DrawCommand, RecordingSurface};
    use crate::models::letterforms::{letter_d, letter_e};

    #[test]
    fn test_letter_d_builds_in_sync() {
        let shape = Shape::new(&letter_d()).unwrap();
        assert_eq!(shape.steps(), 400);
        assert_eq!(shape.lines.len(), 1);
        assert_eq!(shape.arcs.len(), 1);
        assert_eq!(shape.lines[0].draw_coords.len(), 401);
        assert_eq!(shape.arcs[0].draw_arcs.len(), 400);

        let (start, end) = *shape.arcs[0].draw_arcs.last().unwrap();
        assert!((start - deg_to_rad(270.0)).abs() < 1e-5);
        assert!((end - deg_to_rad(450.0)).abs() < 1e-4);
    }

    #[test]
    fn test_figures_share_one_counter() {
        let mut shape = Shape::new(&letter_e()).unwrap();
        let style = StrokeStyle::default();
        let mut surface = RecordingSurface::new();

        shape.animate(&mut surface, &style);
        assert_eq!(surface.strokes(), 4);
        assert_eq!(shape.move_index(), 1);

        // every line has advanced exactly one step (1/400 of its length)
        let lines = surface.polylines();
        assert!((lines[0][1] - pt2(1005.0, 220.375)).length() < 1e-3);
        assert!((lines[1][1] - pt2(1005.225, 230.0)).length() < 1e-3);
    }

    #[test]
    fn test_counter_saturates_on_last_step() {
        let mut shape = Shape::new(&letter_d()).unwrap();
        let style = StrokeStyle::default();
        let mut surface = RecordingSurface::new();

        for _ in 0..399 {
            shape.animate(&mut surface, &style);
        }
        assert!(!shape.is_complete());

        for _ in 0..10 {
            surface.clear();
            shape.animate(&mut surface, &style);
            assert!(shape.is_complete());
            assert_eq!(shape.move_index(), 399);

            // the full figure keeps being drawn
            match &surface.commands[0] {
                DrawCommand::Polyline { points, .. } => {
                    assert_eq!(points[1], pt2(745.0, 220.0));
                }
                other => panic!("expected the line first, got {:?}", other),
            }
            match &surface.commands[1] {
                DrawCommand::Arc { end_arc, .. } => {
                    assert!((end_arc - deg_to_rad(450.0)).abs() < 1e-4);
                }
                other => panic!("expected the arc second, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_single_step_shape() {
        let def = ShapeDef {
            velocity: 1.0,
            figures: vec![FigureDef::Line {
                from: pt2(0.0, 0.0),
                to: pt2(10.0, 0.0),
            }],
        };
        let mut shape = Shape::new(&def).unwrap();
        let mut surface = RecordingSurface::new();
        shape.animate(&mut surface, &StrokeStyle::default());
        assert!(shape.is_complete());
        assert_eq!(surface.polylines()[0], &vec![pt2(0.0, 0.0), pt2(10.0, 0.0)]);
    }

    #[test]
    fn test_empty_shape_is_rejected() {
        let def = ShapeDef {
            velocity: 0.5,
            figures: vec![],
        };
        assert_eq!(Shape::new(&def).unwrap_err(), AnimationError::Empty);
    }
}
