//! Plain-text board rendering.

use rand::Rng;
use strictly_dots::{Cell, Direction, DotsGame, Vertex};

/// Draws the board with `+` dots, `---` and `|` edges, and the owner's
/// initial inside each captured cell. Rows and columns are numbered so the
/// player can type coordinates.
pub fn render_board<R: Rng>(game: &DotsGame<R>) -> String {
    let board = game.board();
    let mut lines = Vec::with_capacity(board.rows() * 2);

    let mut header = String::from("   ");
    for col in 1..=board.cols() {
        header.push_str(&format!("{:<4}", col));
    }
    lines.push(header);

    for row in 1..=board.rows() {
        let mut dots = format!("{:>2} ", row);
        for col in 1..=board.cols() {
            dots.push('+');
            if col < board.cols() {
                let drawn = game.edge_drawn(Vertex::new(row, col), Direction::Horizontal);
                dots.push_str(if drawn { "---" } else { "   " });
            }
        }
        lines.push(dots);

        if row == board.rows() {
            break;
        }

        let mut cells = String::from("   ");
        for col in 1..=board.cols() {
            let drawn = game.edge_drawn(Vertex::new(row, col), Direction::Vertical);
            cells.push(if drawn { '|' } else { ' ' });
            if col < board.cols() {
                let owner = board
                    .cell_owner(Cell::new(row, col))
                    .map_or(' ', |mover| mover.initial());
                cells.push(' ');
                cells.push(owner);
                cells.push(' ');
            }
        }
        lines.push(cells);
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let game = DotsGame::seeded(2, 3, 0).unwrap();
        assert_eq!(render_board(&game), "   1   2   3\n 1 +   +   +\n\n 2 +   +   +");
    }

    #[test]
    fn test_captured_cell() {
        let mut game = DotsGame::seeded(2, 2, 0).unwrap();
        game.submit_human_move(Vertex::new(1, 1), Vertex::new(1, 2))
            .unwrap();
        game.submit_computer_move().unwrap();
        game.submit_human_move(Vertex::new(2, 1), Vertex::new(2, 2))
            .unwrap();
        game.submit_computer_move().unwrap();

        assert_eq!(
            render_board(&game),
            "   1   2\n 1 +---+\n   | C |\n 2 +---+"
        );
    }
}
