use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use dash_logging::{dash_debug, dash_info};
use scandash_client::ApiClient;
use scandash_core::{update, AppState, Msg};

use super::constants::{
    DEFAULT_BASE_URL, INPUT_POLL_INTERVAL, STATUS_POLL_INTERVAL, TARGETS_POLL_INTERVAL,
};
use super::effects::EffectRunner;
use super::input::{self, InputMode, InputOutcome};
use super::logging::{self, LogDestination};
use super::ui;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run_app() -> Result<()> {
    logging::initialize(LogDestination::File);

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    dash_info!("scandash starting against {base_url}");

    let api = ApiClient::new(&base_url).context("building API client")?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(api, msg_tx.clone());

    // Two independent poll timers; a tick never waits for the previous
    // fetch of the same kind to resolve.
    spawn_timer(msg_tx.clone(), TARGETS_POLL_INTERVAL, || Msg::TargetsTick);
    spawn_timer(msg_tx.clone(), STATUS_POLL_INTERVAL, || Msg::StatusTick);

    // Startup kicks, once each.
    let _ = msg_tx.send(Msg::TargetsTick);
    let _ = msg_tx.send(Msg::StatusTick);

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &msg_rx, &msg_tx, &runner);
    restore_terminal()?;
    result
}

fn spawn_timer<F>(msg_tx: mpsc::Sender<Msg>, interval: Duration, make_msg: F)
where
    F: Fn() -> Msg + Send + 'static,
{
    thread::spawn(move || loop {
        thread::sleep(interval);
        if msg_tx.send(make_msg()).is_err() {
            break;
        }
    });
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, DisableBracketedPaste, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Single dispatch-and-render loop; all state mutation and every draw
/// happen on this thread.
fn event_loop(
    terminal: &mut Term,
    msg_rx: &mpsc::Receiver<Msg>,
    msg_tx: &mpsc::Sender<Msg>,
    runner: &EffectRunner,
) -> Result<()> {
    let mut state = AppState::new();
    let mut mode = InputMode::Normal;
    let mut poll_tick: u64 = 0;
    let mut needs_redraw = true;

    loop {
        // Apply everything that arrived since the last pass, in arrival
        // order; when overlapping fetches resolve out of order the
        // last-applied result wins.
        let inbox: Vec<Msg> = msg_rx.try_iter().collect();
        for msg in inbox {
            if matches!(msg, Msg::TargetsTick) {
                poll_tick += 1;
                dash_logging::set_poll_tick(poll_tick);
                dash_debug!("repository poll tick {poll_tick}");
            }
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.enqueue(effects);
        }
        if state.consume_dirty() {
            needs_redraw = true;
        }

        if needs_redraw {
            let view = state.view();
            terminal.draw(|frame| ui::render::render(frame, &view, &mode))?;
            needs_redraw = false;
        }

        if event::poll(INPUT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let notice_shown = state.view().notice.is_some();
                    match input::handle_key(key.code, &mut mode, notice_shown) {
                        InputOutcome::Quit => break,
                        InputOutcome::Dispatch(msg) => {
                            let _ = msg_tx.send(msg);
                        }
                        InputOutcome::Redraw => needs_redraw = true,
                        InputOutcome::None => {}
                    }
                }
                Event::Paste(text) => {
                    let _ = msg_tx.send(Msg::FilesDropped(input::paths_from_paste(&text)));
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }
    }

    Ok(())
}
