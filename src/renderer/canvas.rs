//! Character-cell canvas
//!
//! One cell per field unit. Plotted pixels wrap around the canvas edges, so an
//! outline straddling an edge shows up on both sides.

use std::fmt;

use glam::Vec2;

use crate::sim::Color;

/// Glyph used for a plotted pixel of `color`
pub fn glyph(color: Color) -> char {
    match color {
        Color::Yellow => '*',
        Color::Red => 'o',
        Color::Green => '#',
        Color::Cyan => '+',
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    /// Canvas sized to cover a play-field
    pub fn for_field(width: f32, height: f32) -> Self {
        Self::new(width.max(1.0) as usize, height.max(1.0) as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Plot one cell, wrapping the coordinate into the canvas
    pub fn plot(&mut self, x: i32, y: i32, ch: char) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let x = x.rem_euclid(self.width as i32) as usize;
        let y = y.rem_euclid(self.height as i32) as usize;
        self.cells[y * self.width + x] = ch;
    }

    pub fn point(&mut self, p: Vec2, color: Color) {
        self.plot(p.x as i32, p.y as i32, glyph(color));
    }

    /// Bresenham line between two points
    pub fn line(&mut self, a: Vec2, b: Vec2, color: Color) {
        let ch = glyph(color);
        let (mut x0, mut y0) = (a.x as i32, a.y as i32);
        let (x1, y1) = (b.x as i32, b.y as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, ch);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Closed outline through `points`
    pub fn polygon(&mut self, points: &[Vec2], color: Color) {
        let n = points.len();
        for i in 0..n {
            self.line(points[i], points[(i + 1) % n], color);
        }
    }

    /// Text is clipped at the canvas edge rather than wrapped
    pub fn text(&mut self, pos: Vec2, text: &str) {
        let (x, y) = (pos.x as i32, pos.y as i32);
        if y < 0 || y as usize >= self.height {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let cx = x + i as i32;
            if cx >= 0 && (cx as usize) < self.width {
                self.cells[y as usize * self.width + cx as usize] = ch;
            }
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
