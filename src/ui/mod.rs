pub mod enemy_panel;
pub mod inventory_panel;
pub mod stats_panel;

use std::time::{Duration, Instant};

use cyborg_clicker::{GameEvent, ProgressionEngine};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use enemy_panel::draw_enemy_panel;
use inventory_panel::{draw_inventory_panel, draw_log_panel};
use stats_panel::draw_stats_panel;

/// How long a damage number or popup stays on screen.
const FLASH_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy)]
pub struct HitFlash {
    pub value: u64,
    pub is_crit: bool,
    pub at: Instant,
}

/// Front-end only state: selection, mute and short-lived effects.
#[derive(Debug, Default)]
pub struct UiState {
    pub selected: usize,
    pub muted: bool,
    pub last_hit: Option<HitFlash>,
    pub popup: Option<(String, Instant)>,
}

impl UiState {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            ..Self::default()
        }
    }

    /// Picks up the events the UI shows directly.
    pub fn observe(&mut self, event: &GameEvent, now: Instant) {
        match event {
            GameEvent::DamageNumber { value, is_crit } => {
                self.last_hit = Some(HitFlash {
                    value: *value,
                    is_crit: *is_crit,
                    at: now,
                });
            }
            GameEvent::LevelUp { new_level } => {
                self.popup = Some((format!("LEVEL UP! Level {}", new_level), now));
            }
            GameEvent::LootFound(item) => {
                self.popup = Some((format!("{} {}", item.icon(), item.name), now));
            }
            _ => {}
        }
    }

    /// Keeps the selection inside the inventory and expires old effects.
    pub fn refresh(&mut self, inventory_len: usize, now: Instant) {
        if inventory_len == 0 {
            self.selected = 0;
        } else if self.selected >= inventory_len {
            self.selected = inventory_len - 1;
        }
        if self
            .last_hit
            .is_some_and(|hit| now.duration_since(hit.at) > FLASH_DURATION)
        {
            self.last_hit = None;
        }
        if self
            .popup
            .as_ref()
            .is_some_and(|(_, at)| now.duration_since(*at) > FLASH_DURATION)
        {
            self.popup = None;
        }
    }
}

pub fn draw_ui(frame: &mut Frame, engine: &ProgressionEngine, ui: &UiState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(8), // Game log
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Min(0)])
        .split(columns[1]);

    let state = engine.state();
    draw_stats_panel(frame, columns[0], state);
    draw_enemy_panel(frame, right[0], state, ui);
    draw_inventory_panel(frame, right[1], state, ui.selected);
    draw_log_panel(frame, rows[1], engine.log());
    draw_footer(frame, rows[2], ui);

    if let Some((message, _)) = &ui.popup {
        draw_popup(frame, message);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, ui: &UiState) {
    let key = Style::default().fg(Color::Yellow);
    let sound = if ui.muted { "Sound: off" } else { "Sound: on" };

    let text = Line::from(vec![
        Span::styled("[Space]", key),
        Span::raw(" Attack  "),
        Span::styled("[1-4]", key),
        Span::raw(" Upgrade  "),
        Span::styled("[d/D]", key),
        Span::raw(" Dungeon  "),
        Span::styled("[↑↓/u]", key),
        Span::raw(" Use item  "),
        Span::styled("[s]", key),
        Span::raw(" Save  "),
        Span::styled("[m]", key),
        Span::raw(format!(" {}  ", sound)),
        Span::styled("[q]", key),
        Span::raw(" Quit"),
    ]);

    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn draw_popup(frame: &mut Frame, message: &str) {
    let area = frame.size();
    let width = (message.chars().count() as u16 + 6).min(area.width);
    let height = 3.min(area.height);
    let popup_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let popup = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Magenta))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(ratatui::widgets::Clear, popup_area);
    frame.render_widget(popup, popup_area);
}
