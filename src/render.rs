use crate::{Frame, RenderSink};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{
    io::{Stdout, Write},
    time::Duration,
};

/// Color of an alive cell indexed by its neighbor count.
const NEIGHBOR_COLORS: [Color; 9] = [
    Color::DarkGrey,
    Color::Blue,
    Color::Green,
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Red,
    Color::DarkRed,
    Color::White,
];

/// Writes one text line per row: `#` for alive cells, space for dead ones.
pub fn draw_frame(out: &mut impl Write, frame: &Frame) -> Result<()> {
    queue!(
        out,
        MoveTo(0, 0),
        Clear(ClearType::CurrentLine),
        Print(format!(
            "GEN={} POP={} FPS={:.1}",
            frame.generation, frame.population, frame.fps
        ))
    )?;
    for (y, row) in frame.grid.rows().enumerate() {
        queue!(out, MoveTo(0, y as u16 + 1))?;
        match frame.counts {
            None => {
                let line = row
                    .iter()
                    .map(|c| if c.is_alive() { '#' } else { ' ' })
                    .collect::<String>();
                queue!(out, Print(line))?;
            }
            Some(counts) => {
                for (x, cell) in row.iter().enumerate() {
                    if cell.is_alive() {
                        let color = NEIGHBOR_COLORS[counts.get(x, y) as usize];
                        queue!(out, SetForegroundColor(color), Print('#'))?;
                    } else {
                        queue!(out, Print(' '))?;
                    }
                }
                queue!(out, ResetColor)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Draws generations on the alternate screen of the controlling terminal.
///
/// In raw mode `q`, `Esc` and `Ctrl+C` are polled between frames.
pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    raw_mode: bool,
}

impl TerminalRenderer {
    pub fn new() -> Result<Self> {
        Self::with_writer(std::io::stdout(), true)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, raw_mode: bool) -> Result<Self> {
        // built before any setup, so a failed step below is undone on drop
        let mut renderer = Self {
            out,
            raw_mode: false,
        };
        if raw_mode {
            terminal::enable_raw_mode()?;
            renderer.raw_mode = true;
        }
        execute!(renderer.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(renderer)
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        if frame.generation == 0 {
            queue!(self.out, Clear(ClearType::All))?;
        }
        draw_frame(&mut self.out, frame)
    }

    fn should_stop(&mut self) -> Result<bool> {
        if !self.raw_mode {
            return Ok(false);
        }
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, Show, LeaveAlternateScreen);
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}
