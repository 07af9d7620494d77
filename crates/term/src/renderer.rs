//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previously presented one and only changed
//! spans are re-emitted. A size change or [`TerminalRenderer::invalidate`]
//! forces a full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last frame written to the terminal; `None` forces a full redraw
    presented: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            presented: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next frame to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.presented = None;
    }

    /// Present `fb`, then hand back the previous frame in its place.
    ///
    /// Keep one framebuffer and pass it in every frame; the two buffers
    /// trade places so nothing is cloned.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.presented.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.presented = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            pen.print(out, fb.get(x, y).unwrap_or_default())?;
        }
    }
    pen.finish(out)
}

/// Encode only the spans that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for span in DirtySpans::new(prev, next) {
        out.queue(cursor::MoveTo(span.x, span.y))?;
        for x in span.x..span.x + span.len {
            pen.print(out, next.get(x, span.y).unwrap_or_default())?;
        }
    }
    pen.finish(out)
}

/// Tracks the active style so unchanged styles are not re-sent.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            let style = cell.style;
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(style);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// A horizontal run of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// Iterator over changed spans, row by row. Frames of different size are
/// reported as one full-width span per row of `next`.
pub struct DirtySpans<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    x: u16,
    y: u16,
}

impl<'a> DirtySpans<'a> {
    pub fn new(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> Self {
        Self {
            prev,
            next,
            x: 0,
            y: 0,
        }
    }

    fn same_size(&self) -> bool {
        self.prev.width() == self.next.width() && self.prev.height() == self.next.height()
    }

    fn differs(&self, x: u16, y: u16) -> bool {
        self.prev.get(x, y) != self.next.get(x, y)
    }
}

impl Iterator for DirtySpans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let (w, h) = (self.next.width(), self.next.height());
        if w == 0 {
            return None;
        }

        if !self.same_size() {
            if self.y >= h {
                return None;
            }
            let span = Span {
                x: 0,
                y: self.y,
                len: w,
            };
            self.y += 1;
            return Some(span);
        }

        while self.y < h {
            while self.x < w && !self.differs(self.x, self.y) {
                self.x += 1;
            }
            if self.x < w {
                let start = self.x;
                while self.x < w && self.differs(self.x, self.y) {
                    self.x += 1;
                }
                return Some(Span {
                    x: start,
                    y: self.y,
                    len: self.x - start,
                });
            }
            self.x = 0;
            self.y += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(fb: &mut FrameBuffer, x: u16, y: u16) {
        fb.put_char(x, y, 'X', CellStyle::default());
    }

    #[test]
    fn adjacent_changes_coalesce_into_one_span() {
        let a = FrameBuffer::new(5, 2);
        let mut b = FrameBuffer::new(5, 2);
        for x in 1..=3 {
            mark(&mut b, x, 0);
        }
        mark(&mut b, 0, 1);
        mark(&mut b, 4, 1);

        let spans: Vec<Span> = DirtySpans::new(&a, &b).collect();
        assert_eq!(
            spans,
            vec![
                Span { x: 1, y: 0, len: 3 },
                Span { x: 0, y: 1, len: 1 },
                Span { x: 4, y: 1, len: 1 },
            ]
        );
    }

    #[test]
    fn identical_frames_have_no_spans() {
        let a = FrameBuffer::new(4, 3);
        assert_eq!(DirtySpans::new(&a, &a.clone()).count(), 0);
    }

    #[test]
    fn size_change_marks_every_row() {
        let a = FrameBuffer::new(4, 3);
        let b = FrameBuffer::new(6, 2);
        let spans: Vec<Span> = DirtySpans::new(&a, &b).collect();
        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.x == 0 && s.len == 6));
    }

    #[test]
    fn diff_encoding_is_empty_of_text_when_nothing_changed() {
        let a = FrameBuffer::new(3, 1);
        let mut unchanged = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut unchanged).unwrap();

        let mut b = a.clone();
        mark(&mut b, 1, 0);
        let mut changed = Vec::new();
        encode_diff_into(&a, &b, &mut changed).unwrap();

        assert!(!unchanged.contains(&b'X'));
        assert!(changed.contains(&b'X'));
        assert!(changed.len() > unchanged.len());
    }
}
