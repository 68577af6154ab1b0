// src/animation/letterform.rs
// A title letter: a path chain or a shape, with the style it strokes in.

use super::{AnimationError, PathChain, Shape};
use crate::draw::{CreditsSurface, StrokeStyle};
use crate::models::{LetterDef, LetterformDef};

#[derive(Debug, Clone)]
enum Form {
    Chain(PathChain),
    Shape(Shape),
}

#[derive(Debug, Clone)]
pub struct Letterform {
    pub name: char,
    pub style: StrokeStyle,
    form: Form,
}

impl Letterform {
    pub fn new(def: &LetterDef, stroke_weight: f32) -> Result<Self, AnimationError> {
        let form = match &def.form {
            LetterformDef::Chain(chain) => Form::Chain(PathChain::new(chain)?),
            LetterformDef::Shape(shape) => Form::Shape(Shape::new(shape)?),
        };

        Ok(Self {
            name: def.name,
            style: StrokeStyle {
                color: def.color,
                stroke_weight,
            },
            form,
        })
    }

    pub fn animate(&mut self, surface: &mut dyn CreditsSurface) {
        match &mut self.form {
            Form::Chain(chain) => chain.animate(surface, &self.style),
            Form::Shape(shape) => shape.animate(surface, &self.style),
        }
    }

    pub fn is_complete(&self) -> bool {
        match &self.form {
            Form::Chain(chain) => chain.is_complete(),
            Form::Shape(shape) => shape.is_complete(),
        }
    }
}
