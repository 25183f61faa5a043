mod build_info;
mod catalog;
mod clock;
mod constants;
mod hanoi;
mod hanoi_logic;
mod input;
mod leaderboard;
mod progress;
mod session;
mod sliding;
mod sliding_logic;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use catalog::PuzzleKind;
use clock::Clock;
use constants::INPUT_POLL_MS;
use hanoi::HanoiGame;
use input::{
    handle_catalog_input, handle_hanoi_input, handle_sliding_input, InputResult,
};
use progress::PlayerProgress;
use sliding::SlidingGame;

enum Screen {
    Catalog,
    Hanoi,
    Sliding,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "puzzlebox {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Puzzlebox - Terminal Puzzle Catalog\n");
                println!("Usage: puzzlebox [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'puzzlebox --help' for usage.");
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

    let result = run(&mut terminal);

    // Restore terminal even if the loop errored
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut current_screen = Screen::Catalog;
    let mut selected_puzzle: usize = 0;
    let progress = PlayerProgress::default();

    // Each puzzle screen owns a fresh game; the clock is started and
    // stopped by the input handlers from the session flags.
    let mut hanoi_game = HanoiGame::new();
    let mut sliding_game = SlidingGame::new();
    let mut clock = Clock::new();

    loop {
        // Timer tick for the active puzzle. The session itself discards
        // ticks while stopped or won.
        if clock.poll() {
            match current_screen {
                Screen::Hanoi => hanoi_game.session.tick(),
                Screen::Sliding => sliding_game.session.tick(),
                Screen::Catalog => {}
            }
        }

        // Draw
        terminal.draw(|frame| {
            let area = frame.size();
            match current_screen {
                Screen::Catalog => {
                    ui::catalog_scene::render_catalog(frame, area, selected_puzzle, &progress)
                }
                Screen::Hanoi => ui::hanoi_scene::render_hanoi(frame, area, &hanoi_game),
                Screen::Sliding => ui::sliding_scene::render_sliding(frame, area, &sliding_game),
            }
        })?;

        // Handle input
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                let result = match current_screen {
                    Screen::Catalog => handle_catalog_input(key_event, &mut selected_puzzle),
                    Screen::Hanoi => handle_hanoi_input(key_event, &mut hanoi_game, &mut clock),
                    Screen::Sliding => {
                        handle_sliding_input(key_event, &mut sliding_game, &mut clock)
                    }
                };

                match result {
                    InputResult::Continue => {}
                    InputResult::OpenPuzzle(kind) => {
                        // Every visit starts from a fresh board
                        clock.stop();
                        match kind {
                            PuzzleKind::Hanoi => {
                                hanoi_game = HanoiGame::new();
                                current_screen = Screen::Hanoi;
                            }
                            PuzzleKind::Sliding => {
                                sliding_game = SlidingGame::new();
                                current_screen = Screen::Sliding;
                            }
                        }
                    }
                    InputResult::ToCatalog => {
                        current_screen = Screen::Catalog;
                    }
                    InputResult::Quit => return Ok(()),
                }
            }
        }
    }
}
