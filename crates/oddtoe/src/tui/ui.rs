//! Stateless rendering of the board, scores and history.

use super::app::App;
use super::cursor::Cursor;
use oddtoe_rules::{Board, Cell, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Rounds shown in the history panel.
const HISTORY_ROWS: usize = 5;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let session = app.session();
    let side = session.engine().size().get();
    let board_height = u16::try_from(side * 2).unwrap_or(u16::MAX);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(board_height), // Board
        Constraint::Length(1), // Scores
        Constraint::Length(HISTORY_ROWS as u16 + 2), // History
        Constraint::Length(3), // Status
        Constraint::Length(1), // Help
    ])
    .split(frame.area());

    let title = Paragraph::new(format!("oddtoe: {}", session.engine().size()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], session.engine().board(), app.cursor());

    let scores = session.scores();
    let score_line = format!(
        "{} (X): {}   {} (O): {}   Draws: {}",
        session.player(Mark::X).name(),
        scores.x_wins(),
        session.player(Mark::O).name(),
        scores.o_wins(),
        scores.draws()
    );
    frame.render_widget(
        Paragraph::new(score_line).alignment(Alignment::Center),
        chunks[2],
    );

    let history: Vec<Line> = session
        .history()
        .iter()
        .rev()
        .take(HISTORY_ROWS)
        .map(|record| Line::from(record.to_string()))
        .collect();
    let history = Paragraph::new(history)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title("History").borders(Borders::ALL));
    frame.render_widget(history, chunks[3]);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[4]);

    let help = Paragraph::new("arrows/hjkl move  enter place  +/- size  n next  c clear  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Cursor) {
    let separator_style = Style::default().fg(Color::DarkGray);
    let side = board.side();
    let mut lines = Vec::with_capacity(side * 2);

    for (row, cells) in board.rows().enumerate() {
        if row > 0 {
            let rule = vec!["───"; side].join("┼");
            lines.push(Line::from(Span::styled(rule, separator_style)));
        }
        let mut spans = Vec::with_capacity(side * 2);
        for (col, cell) in cells.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", separator_style));
            }
            spans.push(cell_span(*cell, cursor == Cursor { row, col }));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn cell_span(cell: Cell, highlighted: bool) -> Span<'static> {
    let (symbol, style) = match cell {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Marked(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        style.bg(Color::White).fg(Color::Black)
    } else {
        style
    };
    Span::styled(symbol, style)
}
