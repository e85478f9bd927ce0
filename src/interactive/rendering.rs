//! TUI rendering with ratatui
//!
//! Board, keyboard and round information for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Tile, TileState};
use crate::output::formatters::kind_label;
use crate::player::Item;
use crate::session::GameSession;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info and messages
        ])
        .split(chunks[1]);

    render_board(f, app.game.session(), main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app.game.session(), chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = format!("🧩 WORDLE QUEST - {}", kind_label(app.game.kind()));
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: TileState) -> Style {
    let style = Style::new().add_modifier(Modifier::BOLD);
    match state {
        TileState::Correct => style.fg(Color::Black).bg(Color::Green),
        TileState::Present => style.fg(Color::Black).bg(Color::Yellow),
        TileState::Absent => style.fg(Color::White).bg(Color::DarkGray),
        TileState::Hint => style.fg(Color::LightBlue),
        TileState::Filled => style.fg(Color::White),
        TileState::Empty => Style::new().fg(Color::DarkGray),
    }
}

fn tile_span(tile: Tile) -> Span<'static> {
    let letter = if tile.letter == ' ' { '·' } else { tile.letter };
    Span::styled(format!(" {letter} "), tile_style(tile.state))
}

fn render_board(f: &mut Frame, session: &GameSession, area: Rect) {
    let lines: Vec<Line> = session
        .board()
        .into_iter()
        .flat_map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .flat_map(|tile| [tile_span(tile), Span::raw(" ")])
                .collect();
            [Line::from(spans), Line::from("")]
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, session: &GameSession, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    let style = if session.is_eliminated(letter) {
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT)
                    } else {
                        session
                            .keyboard_state(letter)
                            .map_or_else(|| Style::default().fg(Color::White), tile_style)
                    };
                    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guesses gauge
            Constraint::Length(7), // Player
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_guesses(f, app.game.session(), chunks[0]);
    render_player(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_guesses(f: &mut Frame, session: &GameSession, area: Rect) {
    let used = session.completed_guesses().len();
    let max = session.max_guesses();
    let percent = (used * 100 / max.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_player<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let player = app.game.player();
    let inventory = &player.inventory;

    let content = vec![
        Line::from(vec![
            Span::raw("Coins: "),
            Span::styled(
                player.currency.coins.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Lives: "),
            Span::styled(
                "♥".repeat(player.currency.lives as usize),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(format!(
            "F1 extra guess x{}",
            inventory.count(Item::AddGuess)
        )),
        Line::from(format!(
            "F2 remove letter x{}",
            inventory.count(Item::RemoveLetter)
        )),
        Line::from(format!(
            "F3 reveal letter x{}",
            inventory.count(Item::RevealLetter)
        )),
        Line::from(format!(
            "Won {}/{} ({:.0}%)",
            player.stats.games_won,
            player.stats.games_played,
            player.stats.win_rate()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Player ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (help_text, color) = match app.input_mode {
        InputMode::Guessing => (
            "Enter: Submit | Backspace: Delete | F1-F3: Items | Tab: Give up | Esc: Quit",
            Color::DarkGray,
        ),
        InputMode::OutOfGuesses => (
            "F1: Extra guess | F4: Spend a life | Enter: Give up | Esc: Quit",
            Color::Yellow,
        ),
        InputMode::RoundOver => ("n: Next round | q: Quit", Color::Green),
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}
