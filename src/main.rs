//! Replay viewer (default binary).
//!
//! Walks through the four display phases: the pregame screen until a game
//! type is picked, the waiting screen while the replay loads, the replay
//! frames themselves, and the game-over screen once they run out.

use std::fs::{self, File};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use arena_display::config::ViewerConfig;
use arena_display::core::{Control, Replay, SimpleRng};
use arena_display::term::{AssetTable, FrameBuffer, Renderer, Terminal};
use arena_display::types::GamePhase;

fn main() -> Result<()> {
    let config = ViewerConfig::from_env();
    init_logging(&config)?;

    // Missing sprites are fatal before the terminal is touched.
    let assets = config.load_assets()?;
    info!(count = assets.len(), "assets ready");

    let mut term = Terminal::new();
    term.enter()?;

    let result = run(&mut term, &config, assets);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &ViewerConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();
    Ok(())
}

fn load_replay(config: &ViewerConfig) -> Result<Replay> {
    let path = &config.replay_path;
    let text = fs::read_to_string(path).with_context(|| format!("reading replay {}", path.display()))?;
    let replay = Replay::from_json(&text).with_context(|| format!("decoding replay {}", path.display()))?;
    info!(frames = replay.len(), path = %path.display(), "replay loaded");
    Ok(replay)
}

fn run(term: &mut Terminal, config: &ViewerConfig, assets: AssetTable) -> Result<()> {
    let (mut width, mut height) = Terminal::size().unwrap_or((80, 24));
    let mut renderer = Renderer::new(width, height, assets);
    let mut fb = FrameBuffer::new(width, height);

    let mut control = Control::new(config.player_image.clone());
    let mut rng = SimpleRng::new(clock_seed());
    let mut phase = GamePhase::Pregame;
    let mut replay: Option<Replay> = None;
    let mut frame = 0usize;

    let tick = config.frame_interval();
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = Terminal::size().unwrap_or((width, height));
        if (w, h) != (width, height) {
            (width, height) = (w, h);
            renderer.resize(w, h);
            fb.resize(w, h);
            term.invalidate();
        }

        // Render.
        let snap = replay
            .as_ref()
            .and_then(|r| r.snapshot(frame))
            .unwrap_or_default();
        renderer.paint(phase, &mut fb, &snap, &control)?;
        if phase == GamePhase::Playing {
            if let Some(r) = &replay {
                for ev in r.events(frame) {
                    renderer.process_event(&mut fb, &snap, &control, ev);
                }
            }
        }
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    handle_key(key, &mut phase, &mut control, &mut rng);
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            match phase {
                GamePhase::WaitingForGame => {
                    let loaded = load_replay(config)?;
                    frame = 0;
                    phase = if loaded.is_empty() {
                        GamePhase::GameOver
                    } else {
                        GamePhase::Playing
                    };
                    replay = Some(loaded);
                }
                GamePhase::Playing => {
                    let len = replay.as_ref().map(Replay::len).unwrap_or(0);
                    if frame + 1 < len {
                        frame += 1;
                    } else {
                        info!(frame, "replay finished");
                        phase = GamePhase::GameOver;
                    }
                }
                GamePhase::Pregame | GamePhase::GameOver => {}
            }
        }
    }
}

fn handle_key(key: KeyEvent, phase: &mut GamePhase, control: &mut Control, rng: &mut SimpleRng) {
    match key.code {
        KeyCode::Char(mode @ ('m' | 's' | 't')) if *phase == GamePhase::Pregame => {
            info!(%mode, "game type selected");
            *phase = GamePhase::WaitingForGame;
        }
        KeyCode::Char('i') => control.toggle_info(),
        KeyCode::Char('b') => {
            let color = control.randomize_background(rng);
            debug!(?color, "background requested");
        }
        _ => {}
    }
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
