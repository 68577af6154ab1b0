// src/draw/nannou_surface.rs
// CreditsSurface backed by a nannou Draw for one frame.
// Canvas-space input is converted to nannou space on the way in.

use nannou::prelude::*;

use super::{CreditsSurface, CreditsTextures, StrokeStyle};
use crate::animation::RotatedFrame;
use crate::models::{arc_points, deg_to_rad, CanvasSize};

pub struct NannouSurface<'a> {
    pub draw: &'a Draw,
    pub canvas: CanvasSize,
    pub textures: &'a mut CreditsTextures,
    pub device: &'a wgpu::Device,
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub arc_resolution: usize,
}

impl<'a> NannouSurface<'a> {
    fn to_nannou(&self, point: Point2) -> Point2 {
        self.canvas.to_nannou(point)
    }
}

impl<'a> CreditsSurface for NannouSurface<'a> {
    fn stroke_polyline(&mut self, points: &[Point2], style: &StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        let points: Vec<Point2> = points.iter().map(|p| self.to_nannou(*p)).collect();

        self.draw
            .polyline()
            .weight(style.stroke_weight)
            .join_bevel()
            .points(points)
            .color(style.color);
    }

    fn stroke_arc(
        &mut self,
        center: Point2,
        radius: f32,
        start_arc: f32,
        end_arc: f32,
        style: &StrokeStyle,
    ) {
        let points = arc_points(center, radius, start_arc, end_arc, self.arc_resolution);
        self.stroke_polyline(&points, style);
    }

    fn draw_sprite(&mut self, sprite: usize, center: Point2, frame: &RotatedFrame) {
        let Some(texture) = self.textures.sprite(sprite) else {
            return;
        };

        // canvas rotation is clockwise on screen, nannou's is counter-clockwise
        self.draw
            .texture(texture)
            .xy(self.canvas.to_nannou(center))
            .w_h(frame.source_width, frame.source_height)
            .rotate(-deg_to_rad(frame.angle));
    }

    fn draw_noise(&mut self, frame: usize, alpha: f32) {
        let canvas = self.canvas;
        let Some(layer) = self.textures.noise_layer(self.device, self.encoder, frame, alpha) else {
            return;
        };

        self.draw
            .texture(layer.texture())
            .xy(pt2(0.0, 0.0))
            .w_h(canvas.width, canvas.height);
    }

    fn fill_black(&mut self, alpha: f32) {
        self.draw
            .rect()
            .xy(pt2(0.0, 0.0))
            .w_h(self.canvas.width, self.canvas.height)
            .color(rgba(0.0, 0.0, 0.0, alpha));
    }

    fn draw_final_image(&mut self, origin: Point2, alpha: f32) {
        let canvas = self.canvas;
        let Some(layer) = self.textures.final_layer(self.device, self.encoder, alpha) else {
            return;
        };

        let [width, height] = layer.size();
        let (width, height) = (width as f32, height as f32);
        let center = origin + vec2(width / 2.0, height / 2.0);

        self.draw
            .texture(layer.texture())
            .xy(canvas.to_nannou(center))
            .w_h(width, height);
    }
}
