use cyborg_clicker::core::constants::INVENTORY_DISPLAY_SLOTS;
use cyborg_clicker::items::types::{EquipmentSlot, Rarity};
use cyborg_clicker::GameState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::White,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Yellow,
    }
}

/// Draws equipped items and the inventory list
pub fn draw_inventory_panel(frame: &mut Frame, area: Rect, state: &GameState, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let equipment = &state.player.equipment;
    let equipped: Vec<Line> = EquipmentSlot::all()
        .iter()
        .map(|slot| {
            let item = equipment.get(*slot);
            let (name, color) = match item {
                Some(item) => (item.name.clone(), rarity_color(item.rarity)),
                None => ("(empty)".to_string(), Color::DarkGray),
            };
            Line::from(vec![
                Span::raw(format!("{:<8}", slot.name())),
                Span::styled(name, Style::default().fg(color)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(equipped).block(Block::default().borders(Borders::ALL).title("Equipment")),
        chunks[0],
    );

    let inventory = &state.player.inventory;
    let items: Vec<ListItem> = inventory
        .iter()
        .take(INVENTORY_DISPLAY_SLOTS)
        .enumerate()
        .map(|(i, item)| {
            let mut style = Style::default().fg(rarity_color(item.rarity));
            if i == selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(
                format!("{} {} (value {})", item.icon(), item.name, item.value),
                style,
            )))
        })
        .collect();

    let title = format!("Inventory ({})", inventory.len());
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(title)),
        chunks[1],
    );
}

/// Draws the most recent game log lines, newest at the bottom
pub fn draw_log_panel<'a>(frame: &mut Frame, area: Rect, log: impl Iterator<Item = &'a String>) {
    let entries: Vec<&String> = log.collect();
    let visible = area.height.saturating_sub(2) as usize;
    let start = entries.len().saturating_sub(visible);

    let lines: Vec<Line> = entries[start..]
        .iter()
        .map(|entry| Line::from(entry.as_str()))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log")),
        area,
    );
}
