use std::{
    io::{self, Write},
    mem::MaybeUninit,
    os::fd::{AsRawFd, RawFd},
};

use lib_2048::{Board, Status, SIZE};

const SQUARE_HEIGHT: usize = 3;
const TOP_ROW: &[u8] = "┏━━━━━━━┳━━━━━━━┳━━━━━━━┳━━━━━━━┓\n".as_bytes();
const SEPERATOR_ROW: &[u8] = "┣━━━━━━━╋━━━━━━━╋━━━━━━━╋━━━━━━━┫\n".as_bytes();
const BOTTOM_ROW: &[u8] = "┗━━━━━━━┻━━━━━━━┻━━━━━━━┻━━━━━━━┛\n".as_bytes();
const EMPTY_CELL: &[u8] = "┃       ".as_bytes();
const COLOUR_TABLE: [u8; 7] = [90, 33, 31, 32, 33, 36, 35];

/// Lines written by `draw_frame`: scores, the grid, then status and help.
const FRAME_LINES: usize = 1 + 1 + SIZE * SQUARE_HEIGHT + (SIZE - 1) + 1 + 2;

fn cell_colour(exponent: u8) -> Option<u8> {
    exponent
        .checked_sub(1)
        .map(|i| COLOUR_TABLE[i as usize % COLOUR_TABLE.len()])
}

fn draw_padding_line(out: &mut impl Write, row: &[u8; SIZE]) -> io::Result<()> {
    for &exponent in row {
        match cell_colour(exponent) {
            Some(colour) => write!(out, "┃\x1b[{}m       \x1b[m", colour + 10)?,
            None => out.write_all(EMPTY_CELL)?,
        }
    }

    out.write_all("┃\n".as_bytes())
}

fn draw_board_row(out: &mut impl Write, row: &[u8; SIZE]) -> io::Result<()> {
    let above = (SQUARE_HEIGHT - 1) / 2;
    let below = SQUARE_HEIGHT - 1 - above;

    for _ in 0..above {
        draw_padding_line(out, row)?;
    }

    for &exponent in row {
        match cell_colour(exponent) {
            Some(colour) => {
                let num = 1u32 << exponent;

                write!(out, "┃\x1b[7m\x1b[{colour}m{num:^7}\x1b[m")?;
            }
            None => out.write_all(EMPTY_CELL)?,
        }
    }

    out.write_all("┃\n".as_bytes())?;

    for _ in 0..below {
        draw_padding_line(out, row)?;
    }

    Ok(())
}

fn status_message(status: Status) -> &'static str {
    match status {
        Status::Playing => "",
        Status::Won => "You win! Keep going, or press r for a new game.",
        Status::GameOver => "Game over! Press r for a new game.",
    }
}

pub fn draw_frame(
    out: &mut impl Write,
    board: &Board,
    score: u32,
    best_score: u32,
    status: Status,
) -> io::Result<()> {
    writeln!(out, "Score: {score}    Best: {best_score}\x1b[K")?;
    out.write_all(TOP_ROW)?;

    for (i, row) in board.exponents().iter().enumerate() {
        if i != 0 {
            out.write_all(SEPERATOR_ROW)?;
        }

        draw_board_row(out, row)?;
    }

    out.write_all(BOTTOM_ROW)?;
    writeln!(out, "{}\x1b[K", status_message(status))?;
    out.write_all(b"arrows/wasd move, r restart, q quit\x1b[K\n")?;

    out.flush()
}

/// Moves the cursor back over the previous frame and draws over it.
pub fn redraw_frame(
    out: &mut impl Write,
    board: &Board,
    score: u32,
    best_score: u32,
    status: Status,
) -> io::Result<()> {
    write!(out, "\x1b[{FRAME_LINES}F")?;

    draw_frame(out, board, score, best_score, status)
}

/// Puts the terminal in non-canonical, no-echo mode until dropped.
pub struct RawTerminal {
    fd: RawFd,
    original: libc::termios,
}

impl RawTerminal {
    pub fn new(fd: &impl AsRawFd) -> io::Result<Self> {
        let fd = fd.as_raw_fd();
        let mut termios = MaybeUninit::uninit();

        let original = unsafe {
            if libc::tcgetattr(fd, termios.as_mut_ptr()) != 0 {
                return Err(io::Error::last_os_error());
            }

            termios.assume_init()
        };

        let mut raw = original;
        raw.c_lflag &= !(libc::ECHO | libc::ICANON);

        unsafe {
            if libc::tcsetattr(fd, libc::TCSADRAIN, &raw) != 0 {
                return Err(io::Error::last_os_error());
            }
        }

        Ok(Self { fd, original })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        unsafe {
            libc::tcsetattr(self.fd, libc::TCSADRAIN, &self.original);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(board: &Board, status: Status) -> String {
        let mut out = Vec::new();
        draw_frame(&mut out, board, 4, 16, status).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn frame_has_a_fixed_height() {
        let frame = render(&Board::EMPTY, Status::Playing);

        assert_eq!(frame.lines().count(), FRAME_LINES);
    }

    #[test]
    fn frame_shows_tiles_scores_and_status() {
        let board = Board::from_rows([[2048, 0, 0, 0], [0; 4], [0, 0, 4, 0], [0; 4]]).unwrap();
        let frame = render(&board, Status::Won);

        assert!(frame.contains("Score: 4"));
        assert!(frame.contains("Best: 16"));
        assert!(frame.contains(" 2048 "));
        assert!(frame.contains("   4   "));
        assert!(frame.contains("You win!"));
    }
}
