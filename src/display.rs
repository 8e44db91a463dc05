use crate::scramble::Frame;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// How each new frame replaces the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Redraw {
    /// Return to the start of the line and overwrite it.
    SameLine,
    /// Clear the screen and draw from the top left corner.
    FullScreen,
}

/// Writes animation frames to a terminal.
pub(crate) struct FrameWriter<W: Write> {
    output: W,
    redraw: Redraw,
    widest: usize,
}

impl<W: Write> FrameWriter<W> {
    /// Construct a writer. Multi-line phrases can't be overwritten in place so they redraw the
    /// whole screen instead.
    pub(crate) fn new(output: W, multiline: bool) -> Self {
        let redraw = if multiline { Redraw::FullScreen } else { Redraw::SameLine };
        Self { output, redraw, widest: 0 }
    }

    /// Move the cursor home and clear the screen.
    pub(crate) fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.output, MoveTo(0, 0), Clear(ClearType::All))?;
        self.output.flush()
    }

    /// Replace the previously shown frame with this one.
    pub(crate) fn show(&mut self, frame: &Frame) -> io::Result<()> {
        let text = frame.to_string();
        match self.redraw {
            Redraw::SameLine => {
                let width = text.width();
                self.widest = self.widest.max(width);
                let padding = self.widest - width;
                write!(self.output, "\r{text}{:padding$}", "")?;
            }
            Redraw::FullScreen => {
                queue!(self.output, MoveTo(0, 0), Clear(ClearType::All))?;
                write!(self.output, "{text}")?;
            }
        }
        self.output.flush()
    }

    /// Terminate the animation with a newline.
    pub(crate) fn finish(mut self) -> io::Result<()> {
        writeln!(self.output)?;
        self.output.flush()
    }
}
