//! Terminal presentation of the playfield
//!
//! The simulation never depends on this; it only consumes a per-frame
//! snapshot of paddle offsets, ball position, and scores.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

use game_core::Params;

/// Everything the presentation layer needs from one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot {
    pub left_offset: f32,
    pub right_offset: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub score_left: u8,
    pub score_right: u8,
}

pub struct TermRenderer {
    out: Stdout,
    cols: u16,
    rows: u16,
}

impl TermRenderer {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        let (cols, rows) = terminal::size()?;
        Ok(Self { out, cols, rows })
    }

    /// Playfield x in [-1, 1] to a terminal column
    fn col_for(&self, x: f32) -> u16 {
        let t = ((x + 1.0) / 2.0).clamp(0.0, 1.0);
        (t * self.cols.saturating_sub(1) as f32) as u16
    }

    /// Playfield y in [0, 1] to a terminal row, bottom-up, below the header
    fn row_for(&self, y: f32) -> u16 {
        let t = (1.0 - y).clamp(0.0, 1.0);
        1 + (t * self.rows.saturating_sub(2) as f32) as u16
    }

    pub fn draw(&mut self, frame: &FrameSnapshot) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        let header = format!("{:>2} | {:<2}", frame.score_left, frame.score_right);
        let header_col = (self.cols / 2).saturating_sub(header.len() as u16 / 2);
        queue!(self.out, cursor::MoveTo(header_col, 0), Print(header))?;

        for (x, lower_y) in [(-1.0f32, frame.left_offset), (1.0, frame.right_offset)] {
            let col = self.col_for(x);
            let top = self.row_for(lower_y + Params::PADDLE_HEIGHT);
            let bottom = self.row_for(lower_y);
            for row in top..=bottom {
                queue!(self.out, cursor::MoveTo(col, row), Print('#'))?;
            }
        }

        let ball_col = self.col_for(frame.ball_x);
        let ball_row = self.row_for(frame.ball_y);
        queue!(self.out, cursor::MoveTo(ball_col, ball_row), Print('o'))?;

        self.out.flush()
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
