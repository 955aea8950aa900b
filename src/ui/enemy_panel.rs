use cyborg_clicker::dungeon::types::DUNGEONS;
use cyborg_clicker::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::UiState;

/// Draws the current enemy with its HP bar, the last hit and the dungeon list
pub fn draw_enemy_panel(frame: &mut Frame, area: Rect, state: &GameState, ui: &UiState) {
    let enemy = &state.enemy;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} (Lv {}) ", enemy.name, enemy.level));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // HP bar
            Constraint::Length(2), // Hit flash
            Constraint::Min(0),    // Dungeons
        ])
        .split(inner);

    let hp = Gauge::default()
        .gauge_style(Style::default().fg(Color::Red))
        .ratio((enemy.hp_percent() / 100.0).clamp(0.0, 1.0))
        .label(format!("HP {}/{}", enemy.hp, enemy.max_hp));
    frame.render_widget(hp, chunks[0]);

    let hit = match ui.last_hit {
        Some(hit) if hit.is_crit => Line::from(Span::styled(
            format!("CRIT! -{}", hit.value),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Some(hit) => Line::from(Span::styled(
            format!("-{}", hit.value),
            Style::default().fg(Color::White),
        )),
        None => Line::from(""),
    };
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), hit]).alignment(Alignment::Center),
        chunks[1],
    );

    let level = state.player.level;
    let dungeon_lines: Vec<Line> = DUNGEONS
        .iter()
        .zip(["d", "D"])
        .map(|(dungeon, key)| {
            let unlocked = level >= dungeon.required_level;
            let style = if unlocked {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{} (req. Lv {})", dungeon.name, dungeon.required_level),
                    style,
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(dungeon_lines), chunks[2]);
}
