//! Session: command dispatch over an exclusively owned canvas.

use super::parse::Command;
use crate::canvas::{flood_fill, Canvas};
use crate::error::{Error, Result};
use crate::render;

/// Outcome of a successfully executed command.
///
/// Commands that only mutate the canvas owe the caller nothing; the rest
/// tell the caller what to do, so the library never prints or exits itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The command completed; no output owed.
    Done,
    /// The command produced image text to show (`P`).
    Image(String),
    /// The caller should render its usage guide (`G`).
    Guide,
    /// The caller should end the session (`X`).
    Quit,
}

/// One editing session: an owned canvas plus command dispatch.
///
/// The canvas is session state, not process state; independent sessions
/// (and their tests) never interfere. `X` surfaces as [`Reply::Quit`]
/// rather than terminating the process.
#[derive(Debug, Default)]
pub struct Session {
    /// The canvas under edit.
    canvas: Canvas,
}

impl Session {
    /// Create a session with an uninitialized canvas.
    pub const fn new() -> Self {
        Self { canvas: Canvas::new() }
    }

    /// Get the canvas under edit.
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Execute one parsed command.
    ///
    /// Grid-dependent commands fail with the `empty` category until an
    /// initialize succeeds; `G`, `P`, `X`, and `I` are always available
    /// (`P` renders the empty sentinel). Every failure leaves the canvas
    /// unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        match command {
            Command::Guide => Ok(Reply::Guide),
            Command::Quit => Ok(Reply::Quit),
            Command::Print => Ok(Reply::Image(render::to_text(&self.canvas))),
            Command::Initialize { columns, rows } => {
                self.canvas.initialize(columns, rows);
                Ok(Reply::Done)
            }
            _ if !self.canvas.is_initialized() => Err(Error::Uninitialized),
            Command::Clear => {
                self.canvas.clear()?;
                Ok(Reply::Done)
            }
            Command::Set { col, row, value } => {
                self.canvas.set(col, row, value)?;
                Ok(Reply::Done)
            }
            Command::Vertical { col, row_top, row_bottom, value } => {
                self.canvas.vertical_segment(col, row_top, row_bottom, value)?;
                Ok(Reply::Done)
            }
            Command::Horizontal { col_left, col_right, row, value } => {
                self.canvas.horizontal_segment(col_left, col_right, row, value)?;
                Ok(Reply::Done)
            }
            Command::Rect { col_top, row_top, col_bottom, row_bottom, value } => {
                self.canvas.fill_rect(col_top, row_top, col_bottom, row_bottom, value)?;
                Ok(Reply::Done)
            }
            Command::Fill { col, row, value } => {
                flood_fill(&mut self.canvas, col, row, value)?;
                Ok(Reply::Done)
            }
            Command::Save { path } => {
                render::save(&self.canvas, &path)?;
                Ok(Reply::Done)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Category;
    use crate::render::{to_text, EMPTY_SENTINEL};

    fn run(session: &mut Session, line: &str) -> Result<Reply> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        session.execute(Command::parse(&tokens)?)
    }

    #[test]
    fn test_blocks_grid_commands_before_initialize() {
        let mut session = Session::new();
        for line in ["C", "L 1 1 c", "V 1 1 2 c", "H 1 2 1 c", "K 1 1 2 2 c", "F 1 1 c", "S 'image.txt'"] {
            let err = run(&mut session, line).unwrap_err();
            assert_eq!(err.category(), Category::Empty, "{line} should be blocked");
        }
    }

    #[test]
    fn test_always_available_commands() {
        let mut session = Session::new();
        assert_eq!(run(&mut session, "G").unwrap(), Reply::Guide);
        assert_eq!(run(&mut session, "X").unwrap(), Reply::Quit);
        assert_eq!(
            run(&mut session, "P").unwrap(),
            Reply::Image(EMPTY_SENTINEL.to_string())
        );
        assert_eq!(run(&mut session, "I 3 2").unwrap(), Reply::Done);
    }

    #[test]
    fn test_editing_scenario() {
        let mut session = Session::new();
        run(&mut session, "I 4 3").unwrap();
        run(&mut session, "L 1 1 A").unwrap();
        run(&mut session, "V 2 1 3 |").unwrap();
        run(&mut session, "H 3 4 3 -").unwrap();

        let Reply::Image(text) = run(&mut session, "P").unwrap() else {
            panic!("P should produce image text");
        };
        assert_eq!(text, "A|OO\nO|OO\nO|--\n");
    }

    #[test]
    fn test_fill_through_commands() {
        let mut session = Session::new();
        run(&mut session, "I 5 3").unwrap();
        run(&mut session, "V 3 1 3 #").unwrap();
        run(&mut session, "F 1 1 .").unwrap();

        assert_eq!(to_text(session.canvas()), "..#OO\n..#OO\n..#OO\n");
    }

    #[test]
    fn test_failed_command_leaves_canvas_unchanged() {
        let mut session = Session::new();
        run(&mut session, "I 4 3").unwrap();
        run(&mut session, "L 2 2 A").unwrap();
        let before = to_text(session.canvas());

        assert_eq!(run(&mut session, "L 9 1 B").unwrap_err().category(), Category::Bounds);
        assert_eq!(run(&mut session, "V 1 3 1 B").unwrap_err().category(), Category::Interval);
        assert_eq!(run(&mut session, "K 1 1 9 9 B").unwrap_err().category(), Category::Bounds);
        assert_eq!(to_text(session.canvas()), before);
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut session = Session::new();
        run(&mut session, "I 3 3").unwrap();
        run(&mut session, "K 1 1 3 3 #").unwrap();
        run(&mut session, "C").unwrap();
        assert_eq!(to_text(session.canvas()), "OOO\nOOO\nOOO\n");
    }

    #[test]
    fn test_reinitialize_replaces_image() {
        let mut session = Session::new();
        run(&mut session, "I 2 2").unwrap();
        run(&mut session, "L 1 1 A").unwrap();
        run(&mut session, "I 3 1").unwrap();
        assert_eq!(to_text(session.canvas()), "OOO\n");
    }

    #[test]
    fn test_save_through_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");
        let mut session = Session::new();
        run(&mut session, "I 3 2").unwrap();
        run(&mut session, "L 2 1 *").unwrap();
        run(&mut session, &format!("S '{}'", path.display())).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            to_text(session.canvas())
        );
    }
}
