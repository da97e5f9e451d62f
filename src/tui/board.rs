//! Tic-tac-toe board rendering and hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictactoe_core::{Board, Player, Position, Square, WinningLine};

use super::screen::hit;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen rectangles of the nine cells, indexed like [`Position::to_index`].
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = row_columns(row_area);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = cell;
        }
    }
    cells
}

/// The cell under terminal cell (`column`, `row`), if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_rects(area)
        .iter()
        .position(|rect| hit(*rect, column, row))
        .and_then(Position::from_index)
}

/// Renders the board with the winning line and cursor highlighted.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    winning: Option<WinningLine>,
    cursor: Option<Position>,
) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let cells = cell_rects(area);

    // Separators sit in the one-cell gaps right of and below the first two cells.
    for left in [cells[0], cells[1]] {
        let gap = Rect::new(left.right(), board_area.y, 1, board_area.height);
        render_vertical_sep(frame, gap.intersection(board_area));
    }
    for above in [cells[0], cells[3]] {
        let gap = Rect::new(board_area.x, above.bottom(), board_area.width, 1);
        render_separator(frame, gap.intersection(board_area));
    }
    for (pos, cell) in Position::ALL.into_iter().zip(cells) {
        render_square(frame, cell, board, pos, winning, cursor);
    }
}

fn row_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area)
}

fn render_square(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    winning: Option<WinningLine>,
    cursor: Option<Position>,
) {
    let (text, mut style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if winning.is_some_and(|win| win.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if cursor == Some(pos) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Pad vertically so the mark sits on the middle line of the cell.
    let lines = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(format!("{:^width$}", text, width = area.width as usize), style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_click_in_each_cell_maps_back_to_it() {
        let area = Rect::new(0, 0, 60, 20);
        let rects = cell_rects(area);
        for (index, rect) in rects.iter().enumerate() {
            assert!(rect.width > 0 && rect.height > 0, "cell {} collapsed", index);
            let column = rect.x + rect.width / 2;
            let row = rect.y + rect.height / 2;
            assert_eq!(cell_at(area, column, row), Position::from_index(index));
        }
    }

    #[test]
    fn test_click_outside_board_misses() {
        let area = Rect::new(0, 0, 60, 20);
        assert_eq!(cell_at(area, 0, 0), None);
        let first = cell_rects(area)[0];
        // The separator column right of the first cell.
        assert_eq!(cell_at(area, first.x + first.width, first.y), None);
    }

    #[test]
    fn test_marks_are_drawn_inside_clickable_cells() {
        let backend = TestBackend::new(40, 15);
        let mut terminal = Terminal::new(backend).unwrap();
        let board = Board::from_cells("X../.../..O").unwrap();
        terminal
            .draw(|f| render_board(f, f.area(), &board, None, None))
            .unwrap();

        let cells = cell_rects(Rect::new(0, 0, 40, 15));
        let buffer = terminal.backend().buffer();
        let symbol_at = |rect: Rect| {
            buffer[(rect.x + rect.width / 2, rect.y + rect.height / 2)]
                .symbol()
                .to_string()
        };
        assert_eq!(symbol_at(cells[0]), "X");
        assert_eq!(symbol_at(cells[4]), "5");
        assert_eq!(symbol_at(cells[8]), "O");
        assert_eq!(buffer[(cells[0].right(), cells[0].y)].symbol(), "│");
        assert_eq!(buffer[(cells[0].x, cells[0].bottom())].symbol(), "─");
    }

    #[test]
    fn test_render_shows_marks_and_hints() {
        let backend = TestBackend::new(40, 15);
        let mut terminal = Terminal::new(backend).unwrap();
        let board = Board::from_cells("X../.O./...").unwrap();
        terminal
            .draw(|f| render_board(f, f.area(), &board, None, None))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains('X'));
        assert!(text.contains('O'));
        assert!(text.contains('9'));
        assert!(!text.contains('1'));
    }
}
