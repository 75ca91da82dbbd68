use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use soar::constants::{INPUT_POLL_MS, TICK_INTERVAL_MS};
use soar::input::{map_key, GameInput};
use soar::session::GameSession;
use soar::{build_info, ui};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("soar {} ({})", build_info::BUILD_DATE, build_info::BUILD_COMMIT);
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Soar - Terminal Flappy Game\n");
                println!("Usage: soar\n");
                println!("In game: any key flaps, q or Esc quits.");
                println!("\nOptions:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'soar --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = GameSession::new();
    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();

    // Host scheduler: draw every iteration, poll input briefly, run one
    // simulation tick per frame interval. The session never reschedules
    // itself; pausing just makes tick() a no-op.
    'game: loop {
        terminal.draw(|frame| ui::draw_ui(frame, &session))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match map_key(key_event) {
                    GameInput::Quit => break 'game,
                    input => session.handle_input(input),
                }
            }
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            session.tick(&mut rng);
            last_tick = Instant::now();
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    if session.best() > 0 {
        println!("Best this session: {}", session.best());
    }

    Ok(())
}
