//! Renderer capability injected by drivers.
//!
//! The engine never draws. A driver hands frames to whatever implements
//! [`Renderer`]: a pixel window, a terminal, or a test buffer.

use std::io;

use tessel_core::{Generation, GridState};

/// Something that can present one frame of the grid.
///
/// Implementations read the grid through [`GridState::get`],
/// [`GridState::dimensions`] or [`GridState::iter`] and must not retain
/// it past the call.
pub trait Renderer {
    /// Present `grid` as generation `generation`.
    fn render(&mut self, grid: &GridState, generation: Generation) -> io::Result<()>;
}

/// Writes text frames to any [`io::Write`]: a header line, then one line
/// per row with `#` for Alive and `.` for Dead.
#[derive(Debug)]
pub struct AsciiRenderer<W: io::Write> {
    out: W,
    frames: u64,
}

impl<W: io::Write> AsciiRenderer<W> {
    /// Wrap `out`.
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> Renderer for AsciiRenderer<W> {
    fn render(&mut self, grid: &GridState, generation: Generation) -> io::Result<()> {
        let (rows, cols) = grid.dimensions();
        writeln!(
            self.out,
            "generation {generation} ({rows}x{cols}, population {})",
            grid.population()
        )?;
        write!(self.out, "{grid}")?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}
