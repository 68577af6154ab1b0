// src/lib.rs

pub mod animation;
pub mod config;
pub mod draw;
pub mod effects;
pub mod models;
pub mod services;
pub mod utilities;
pub mod views;
