// src/draw/recorder.rs
// A CreditsSurface that records what was drawn, for tests.

use nannou::prelude::*;

use super::{CreditsSurface, StrokeStyle};
use crate::animation::RotatedFrame;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polyline {
        points: Vec<Point2>,
        style: StrokeStyle,
    },
    Arc {
        center: Point2,
        radius: f32,
        start_arc: f32,
        end_arc: f32,
        style: StrokeStyle,
    },
    Sprite {
        sprite: usize,
        center: Point2,
        angle: f32,
    },
    Noise {
        frame: usize,
        alpha: f32,
    },
    Black {
        alpha: f32,
    },
    FinalImage {
        origin: Point2,
        alpha: f32,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn strokes(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polyline { .. } | DrawCommand::Arc { .. }))
            .count()
    }

    pub fn polylines(&self) -> Vec<&Vec<Point2>> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polyline { points, .. } => Some(points),
                _ => None,
            })
            .collect()
    }

    pub fn sprites(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count()
    }

    pub fn noise_alpha(&self) -> Option<f32> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Noise { alpha, .. } => Some(*alpha),
            _ => None,
        })
    }

    pub fn black_alpha(&self) -> Option<f32> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Black { alpha } => Some(*alpha),
            _ => None,
        })
    }

    pub fn final_image_alpha(&self) -> Option<f32> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::FinalImage { alpha, .. } => Some(*alpha),
            _ => None,
        })
    }
}

impl CreditsSurface for RecordingSurface {
    fn stroke_polyline(&mut self, points: &[Point2], style: &StrokeStyle) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            style: style.clone(),
        });
    }

    fn stroke_arc(
        &mut self,
        center: Point2,
        radius: f32,
        start_arc: f32,
        end_arc: f32,
        style: &StrokeStyle,
    ) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_arc,
            end_arc,
            style: style.clone(),
        });
    }

    fn draw_sprite(&mut self, sprite: usize, center: Point2, frame: &RotatedFrame) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            center,
            angle: frame.angle,
        });
    }

    fn draw_noise(&mut self, frame: usize, alpha: f32) {
        self.commands.push(DrawCommand::Noise { frame, alpha });
    }

    fn fill_black(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::Black { alpha });
    }

    fn draw_final_image(&mut self, origin: Point2, alpha: f32) {
        self.commands.push(DrawCommand::FinalImage { origin, alpha });
    }
}
