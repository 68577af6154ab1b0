// src/animation/path_chain.rs
//
// A path chain is a series of segments drawn as one uncut line.
// Segments draw in order: a segment starts only once the one before it is
// done. Straight segments grow step by step, angled segments (a vertex
// between two short strokes) appear in a single tick.

use nannou::prelude::*;

use super::{step_plan, AnimationError};
use crate::draw::{CreditsSurface, StrokeStyle};
use crate::models::geometry::lerp_point;
use crate::models::PathChainDef;

#[derive(Debug, Clone)]
pub struct PathSegment {
    pub is_angle: bool,
    pub done: bool,
    // straight: start + one point per step; angle: start, vertex, end
    pub draw_coords: Vec<Point2>,
}

#[derive(Debug, Clone)]
pub struct PathChain {
    segments: Vec<PathSegment>,
    steps: usize,
    move_index: usize,
}

impl PathChain {
    pub fn new(def: &PathChainDef) -> Result<Self, AnimationError> {
        let (moves, steps) = step_plan(def.velocity)?;
        if def.segments.is_empty() {
            return Err(AnimationError::Empty);
        }

        let mut segments = Vec::with_capacity(def.segments.len());

        for (i, segment) in def.segments.iter().enumerate() {
            let last = *segment.coords.last().ok_or(AnimationError::EmptySegment(i))?;

            // a segment picks up where the previous one's outline ends
            let previous = match i {
                0 => None,
                _ => Some(&def.segments[i - 1]),
            };
            let first = match previous {
                Some(prev) => *prev.coords.last().ok_or(AnimationError::EmptySegment(i - 1))?,
                None => segment.coords[0],
            };

            let draw_coords = if !segment.is_angle {
                let mut coords = Vec::with_capacity(steps + 1);
                coords.push(first);
                coords.extend((1..=steps).map(|step| lerp_point(first, last, step as f64 / moves)));
                coords
            } else {
                let vertex = match previous {
                    Some(_) => segment.coords[0],
                    None => *segment.coords.get(1).unwrap_or(&segment.coords[0]),
                };
                vec![first, vertex, last]
            };

            segments.push(PathSegment {
                is_angle: segment.is_angle,
                done: false,
                draw_coords,
            });
        }

        Ok(Self {
            segments,
            steps,
            move_index: 0,
        })
    }

    /// Draws one tick of the chain.
    pub fn animate(&mut self, surface: &mut dyn CreditsSurface, style: &StrokeStyle) {
        for i in 0..self.segments.len() {
            // checked as we go: a segment finishing this tick unlocks the next one now
            let unlocked = i == 0 || self.segments[i - 1].done;
            if !unlocked {
                continue;
            }

            let segment = &mut self.segments[i];
            let coords = &segment.draw_coords;

            if segment.is_angle {
                surface.stroke_polyline(&coords[..3], style);
                segment.done = true;
            } else if !segment.done {
                self.move_index += 1;
                surface.stroke_polyline(&[coords[0], coords[self.move_index]], style);

                if self.move_index == self.steps {
                    segment.done = true;
                    self.move_index = 0;
                }
            } else {
                surface.stroke_polyline(&[coords[0], coords[self.steps]], style);
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.segments.iter().all(|segment| segment.done)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}
