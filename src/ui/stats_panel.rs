use cyborg_clicker::character::upgrades::UpgradeType;
use cyborg_clicker::core::constants::MAX_ENERGY;
use cyborg_clicker::GameState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws player stats, resource bars and the upgrade shop
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // XP bar
            Constraint::Length(3), // Energy bar
            Constraint::Length(9), // Stats
            Constraint::Min(6),    // Upgrades
        ])
        .split(area);

    draw_xp_bar(frame, chunks[0], state);
    draw_energy_bar(frame, chunks[1], state);
    draw_stats(frame, chunks[2], state);
    draw_upgrades(frame, chunks[3], state);
}

fn draw_xp_bar(frame: &mut Frame, area: Rect, state: &GameState) {
    let player = &state.player;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Level {}", player.level)),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((player.xp_percent() / 100.0).clamp(0.0, 1.0))
        .label(format!("XP {}/{}", player.xp, player.max_xp));
    frame.render_widget(gauge, area);
}

fn draw_energy_bar(frame: &mut Frame, area: Rect, state: &GameState) {
    let energy = state.player.energy;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Energy"))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio((energy as f64 / MAX_ENERGY as f64).clamp(0.0, 1.0))
        .label(format!("{}/{}", energy, MAX_ENERGY));
    frame.render_widget(gauge, area);
}

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<14}", label)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn draw_stats(frame: &mut Frame, area: Rect, state: &GameState) {
    let player = &state.player;
    let lines = vec![
        stat_line("Credits", player.credits.to_string(), Color::Yellow),
        stat_line("Nanobots", player.nanobots.to_string(), Color::LightBlue),
        stat_line(
            "Damage",
            format!("{}-{}", player.damage.min, player.damage.max),
            Color::Red,
        ),
        stat_line("Defense", player.effective_defense().to_string(), Color::White),
        stat_line(
            "Attack speed",
            format!("{:.2}", player.attack_speed),
            Color::White,
        ),
        stat_line("Crit chance", format!("{}%", player.crit_chance), Color::Magenta),
        stat_line(
            "Weapon bonus",
            format!("+{}", player.equipment.weapon_bonus()),
            Color::Red,
        ),
    ];

    let stats = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(stats, area);
}

fn draw_upgrades(frame: &mut Frame, area: Rect, state: &GameState) {
    let credits = state.player.credits;
    let lines: Vec<Line> = UpgradeType::all()
        .iter()
        .enumerate()
        .map(|(i, upgrade_type)| {
            let upgrade = state.upgrades.get(*upgrade_type);
            let affordable = credits >= upgrade.cost;
            let cost_style = if affordable {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{:<12}", upgrade_type.name()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("Lv {:<3} ", upgrade.level)),
                Span::styled(format!("{} cr", upgrade.cost), cost_style),
            ])
        })
        .collect();

    let upgrades =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Upgrades"));
    frame.render_widget(upgrades, area);
}
