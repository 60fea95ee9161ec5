//! Play command implementation - interactive TUI game.

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io::stdout;
use std::time::Duration;
use twenty48::{Board, Direction, WIN_TILE};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the board size is invalid or the TUI fails.
pub(crate) fn execute(size: usize, seed: Option<u64>) -> Result<(), CliError> {
    let seed = super::seed_or_entropy(seed);
    let app = App::new(size, seed)?;
    run_tui(app)
}

/// Outcome state of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Playing,
    Won,
    Lost,
}

/// App state for the TUI.
struct App {
    board: Board,
    empty: Board,
    rng: StdRng,
    status: Status,
    moves: u32,
    seed: u64,
}

impl App {
    fn new(size: usize, seed: u64) -> Result<Self, CliError> {
        let empty = Board::new(size)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = empty.clone();
        board.add_random_tile(&mut rng);

        Ok(Self {
            board,
            empty,
            rng,
            status: Status::Playing,
            moves: 0,
            seed,
        })
    }

    /// Apply one directional move; spawn a tile only if the board changed.
    fn apply_move(&mut self, direction: Direction) {
        if self.status != Status::Playing {
            return;
        }

        let next = self.board.merge(direction);
        if next == self.board {
            return;
        }

        self.board = next;
        self.board.add_random_tile(&mut self.rng);
        self.moves += 1;

        if self.board.max_value() >= WIN_TILE {
            self.status = Status::Won;
        } else if !self.board.has_empty_space() && !self.board.future_moves_possible() {
            self.status = Status::Lost;
        }
    }

    /// Start a fresh game on the same board size with a bumped seed.
    fn restart(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.rng = StdRng::seed_from_u64(self.seed);
        self.board = self.empty.clone();
        self.board.add_random_tile(&mut self.rng);
        self.status = Status::Playing;
        self.moves = 0;
    }
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    loop {
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if event::poll(Duration::from_millis(50)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('r') => app.restart(),
                KeyCode::Up | KeyCode::Char('w') => app.apply_move(Direction::Up),
                KeyCode::Down | KeyCode::Char('s') => app.apply_move(Direction::Down),
                KeyCode::Left | KeyCode::Char('a') => app.apply_move(Direction::Left),
                KeyCode::Right | KeyCode::Char('d') => app.apply_move(Direction::Right),
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_board(f, chunks[1], app);
    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = match app.status {
        Status::Playing => "PLAYING",
        Status::Won => "YOU WIN!",
        Status::Lost => "YOU LOSE",
    };

    let title = format!(
        " Twenty48 | {status} | Moves: {} | Best tile: {} | Seed: {} ",
        app.moves,
        app.board.max_value(),
        app.seed
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(status_color(app.status))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Playing => Color::Cyan,
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
    }
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    for row in app.board.rows() {
        let mut spans = vec![Span::raw("  ")];
        for &tile in row {
            spans.push(Span::styled(format_tile(tile), tile_style(tile)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board_widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Board "));

    f.render_widget(board_widget, area);
}

fn format_tile(tile: u32) -> String {
    if tile == 0 {
        "      ".to_string()
    } else {
        format!("{tile:^6}")
    }
}

/// Background colors follow the original terminal game's palette.
fn tile_style(tile: u32) -> Style {
    let color = match tile {
        0 => Color::DarkGray,
        2 => Color::Cyan,
        4 => Color::LightCyan,
        8 => Color::Magenta,
        16 => Color::Red,
        32 => Color::LightRed,
        64 => Color::Yellow,
        WIN_TILE => Color::Green,
        _ => Color::LightYellow,
    };
    Style::default().bg(color).fg(Color::Black)
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = match app.status {
        Status::Playing => " [arrows/wasd] Move  [r] Restart  [q] Quit ",
        Status::Won | Status::Lost => " [r] Restart  [q] Quit ",
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
