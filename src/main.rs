mod ui;

use cyborg_clicker::character::upgrades::UpgradeType;
use cyborg_clicker::core::constants::{LOG_FILE_NAME, TICK_INTERVAL_MS};
use cyborg_clicker::utils::{data_dir, init_logging, SaveManager, SaveWorker};
use cyborg_clicker::{Command, GameEvent, ProgressionEngine};

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use ui::{draw_ui, UiState};

const USAGE: &str = "Cyborg Clicker - Terminal Idle Clicker

Usage: cyborg-clicker [options]
       cyborg-clicker import <legacy.json> [--save <path>]

Options:
  --save <path>  Use a different save file
  --mute         Start with sound off
  --version      Show version information
  --help         Show this help message

Set RUST_LOG to change log verbosity (default: info).";

#[derive(Debug, Default)]
struct Options {
    save_path: Option<PathBuf>,
    muted: bool,
    import: Option<PathBuf>,
}

fn parse_args() -> Options {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("cyborg-clicker {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            "--mute" => options.muted = true,
            "--save" | "import" => {
                let Some(path) = args.next() else {
                    eprintln!("Missing path after '{}'", arg);
                    std::process::exit(1);
                };
                if arg == "import" {
                    options.import = Some(PathBuf::from(path));
                } else {
                    options.save_path = Some(PathBuf::from(path));
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'cyborg-clicker --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    options
}

fn main() -> io::Result<()> {
    let options = parse_args();

    let log_dir = data_dir().unwrap_or_else(|_| std::env::temp_dir());
    init_logging(&log_dir.join(LOG_FILE_NAME))?;

    let save_manager = match &options.save_path {
        Some(path) => SaveManager::with_path(path),
        None => SaveManager::new()?,
    };

    if let Some(legacy_path) = &options.import {
        let snapshot = save_manager.import(legacy_path)?;
        println!(
            "Imported level {} save into {}",
            snapshot.player.level,
            save_manager.path().display()
        );
        return Ok(());
    }

    let mut engine = ProgressionEngine::load_from(&save_manager);
    let save_worker = SaveWorker::spawn(save_manager.clone())?;
    let mut ui_state = UiState::new(options.muted);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(
        &mut terminal,
        &mut engine,
        &mut ui_state,
        &save_worker,
    );

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    // Drain pending autosaves before the final write so it lands last.
    save_worker.shutdown();
    let snapshot = engine.snapshot(Utc::now().timestamp_millis());
    match save_manager.save(&snapshot) {
        Ok(()) => info!("saved on exit"),
        Err(e) => {
            warn!(error = %e, "final save failed");
            eprintln!("Warning: could not save game: {}", e);
        }
    }

    result?;
    println!("Goodbye!");
    Ok(())
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    engine: &mut ProgressionEngine,
    ui_state: &mut UiState,
    save_worker: &SaveWorker,
) -> io::Result<()> {
    loop {
        let now = Instant::now();
        ui_state.refresh(engine.state().player.inventory.len(), now);
        terminal.draw(|frame| draw_ui(frame, engine, ui_state))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    match handle_key(key_event, ui_state) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Run(command) => {
                            let events = engine.handle(command);
                            process_events(&events, ui_state, save_worker);
                        }
                        KeyAction::None => {}
                    }
                }
            }
        }

        let events = engine.tick(Instant::now());
        process_events(&events, ui_state, save_worker);
    }
}

enum KeyAction {
    Run(Command),
    Quit,
    None,
}

fn handle_key(key_event: KeyEvent, ui_state: &mut UiState) -> KeyAction {
    match key_event.code {
        KeyCode::Char(' ') | KeyCode::Enter => KeyAction::Run(Command::Attack),
        KeyCode::F(1) | KeyCode::Char('d') => KeyAction::Run(Command::EnterDungeon(1)),
        KeyCode::F(2) | KeyCode::Char('D') => KeyAction::Run(Command::EnterDungeon(2)),
        KeyCode::Up => {
            ui_state.selected = ui_state.selected.saturating_sub(1);
            KeyAction::None
        }
        KeyCode::Down => {
            ui_state.selected += 1;
            KeyAction::None
        }
        KeyCode::Char('u') => KeyAction::Run(Command::UseItem(ui_state.selected)),
        KeyCode::Char('s') => KeyAction::Run(Command::Save),
        KeyCode::Char('m') => {
            ui_state.muted = !ui_state.muted;
            KeyAction::None
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char(c) => match UpgradeType::from_shortcut(c) {
            Some(upgrade_type) => KeyAction::Run(Command::BuyUpgrade(upgrade_type)),
            None => KeyAction::None,
        },
        _ => KeyAction::None,
    }
}

fn process_events(events: &[GameEvent], ui_state: &mut UiState, save_worker: &SaveWorker) {
    let now = Instant::now();
    for event in events {
        ui_state.observe(event, now);
        match event {
            GameEvent::SaveRequested(snapshot) => save_worker.submit(snapshot.clone()),
            GameEvent::Sound(_) if !ui_state.muted => ring_bell(),
            _ => {}
        }
    }
}

fn ring_bell() {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
