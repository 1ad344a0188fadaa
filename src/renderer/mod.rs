//! Wireframe rendering
//!
//! Consumes `sim::Frame` draw commands and rasterizes them onto a character
//! canvas. Nothing here feeds back into the simulation.

pub mod canvas;
pub mod shapes;

pub use canvas::Canvas;
pub use shapes::{Models, wireframe};

use crate::sim::{DrawCommand, Frame};

/// Clear `canvas` and draw every command in `frame`, in order
pub fn present(canvas: &mut Canvas, models: &Models, frame: &Frame) {
    canvas.clear();

    for draw in &frame.draws {
        match draw {
            DrawCommand::Polygon {
                model,
                pos,
                rotation,
                scale,
                color,
            } => {
                let outline = wireframe(models.get(*model), *pos, *rotation, *scale);
                canvas.polygon(&outline, *color);
            }
            DrawCommand::Point { pos, color } => canvas.point(*pos, *color),
            DrawCommand::Text { pos, text, .. } => canvas.text(*pos, text),
        }
    }
}
