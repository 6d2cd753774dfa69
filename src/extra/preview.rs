//! Flat preview of a volume.
//!
//! Points are projected orthographically along the z axis into a character grid. Colors falling
//! into the same cell are mixed, which is roughly what an observer sees when looking through a
//! volumetric display.
//!
//! With `crossterm` feature, the preview can be queued straight onto a terminal.

use crate::{color::Color1b, Vector3};
use alloc::vec::Vec;

pub struct Preview {
    width: usize,
    height: usize,
    cells: Vec<Color1b>,
}

impl Preview {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: alloc::vec![Color1b::OFF; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resizes the preview, clearing it.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width * height, Color1b::OFF);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Color1b::OFF);
    }

    /// Projects points within the `[min, max]` x/y window onto the preview.
    ///
    /// Screen rows grow downwards, so `max.y` lands on the top row.
    pub fn project(
        &mut self,
        points: impl IntoIterator<Item = (Vector3, Color1b)>,
        min: &Vector3,
        max: &Vector3,
    ) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let extent = max - min;
        if !(extent.x > 0.0 && extent.y > 0.0) {
            return;
        }

        let (w, h) = (self.width as f32, self.height as f32);

        for (pos, color) in points {
            let u = (pos.x - min.x) / extent.x;
            let v = (max.y - pos.y) / extent.y;

            if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
                continue;
            }

            let col = ((u * w) as usize).min(self.width - 1);
            let row = ((v * h) as usize).min(self.height - 1);

            let cell = &mut self.cells[row * self.width + col];
            *cell = cell.add(color);
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Color1b {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col]
        } else {
            Color1b::OFF
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color1b]> {
        self.cells.chunks(self.width.max(1))
    }
}

#[cfg(feature = "crossterm")]
mod term {
    use super::*;
    use crossterm::{
        cursor::MoveTo,
        style::{Color, Print, SetForegroundColor},
        QueueableCommand,
    };
    use std::io::{self, Write};

    pub fn to_crossterm(c: Color1b) -> Color {
        match (c.r, c.g, c.b) {
            (false, false, false) => Color::Black,
            (true, false, false) => Color::Red,
            (false, true, false) => Color::Green,
            (false, false, true) => Color::Blue,
            (true, true, false) => Color::Yellow,
            (false, true, true) => Color::Cyan,
            (true, false, true) => Color::Magenta,
            (true, true, true) => Color::White,
        }
    }

    impl Preview {
        /// Queues the preview onto a terminal, starting at `(x, y)`.
        pub fn queue<W: Write>(&self, out: &mut W, x: u16, y: u16) -> io::Result<()> {
            for (i, row) in self.rows().enumerate() {
                out.queue(MoveTo(x, y + i as u16))?;
                for c in row {
                    if c.is_off() {
                        out.queue(Print(' '))?;
                    } else {
                        out.queue(SetForegroundColor(to_crossterm(*c)))?
                            .queue(Print('@'))?;
                    }
                }
            }
            Ok(())
        }
    }
}

#[cfg(feature = "crossterm")]
pub use term::to_crossterm;
