use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    style::{Color, Print, PrintStyledContent, Stylize},
    terminal::{self, ClearType},
};
use rand::Rng;

use mazerace::{Race, SearchState, Strategy};

/// How long to wait for a key before advancing the active search one step.
const TICK: Duration = Duration::from_millis(15);

/// Log to a file instead of the terminal; raw-mode output and log lines do
/// not mix. The guard must stay alive for the logger to flush.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazerace.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    guard
}

/// Set a panic hook to restore terminal state on panic, so a failed run does
/// not leave the terminal in raw mode or the alternate screen.
fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
        hook(panic_info);
    }));
}

/// Setup terminal in raw mode and enter alternate screen.
fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    set_panic_hook();
    queue!(
        stdout,
        terminal::EnterAlternateScreen,
        terminal::Clear(ClearType::All),
        cursor::Hide,
        cursor::MoveTo(0, 0)
    )?;
    stdout.flush()
}

/// Restore terminal to original state.
fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
    queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
    stdout.flush()?;
    terminal::disable_raw_mode()
}

fn draw(stdout: &mut Stdout, race: &Race) -> std::io::Result<()> {
    let maze = race.maze();
    let mut row: u16 = 0;

    for y in 0..maze.height() {
        // Wall line above this cell row.
        let mut top = String::new();
        for x in 0..maze.width() {
            top.push('+');
            top.push_str(if maze[(x, y)].north { "  " } else { "--" });
        }
        top.push('+');
        queue!(stdout, cursor::MoveTo(0, row), Print(top))?;
        row += 1;

        queue!(stdout, cursor::MoveTo(0, row))?;
        for x in 0..maze.width() {
            let cell = maze[(x, y)];
            queue!(stdout, Print(if cell.west { " " } else { "|" }))?;
            let glyph = if (x, y) == maze.start() {
                "S ".with(Color::Green)
            } else if (x, y) == maze.goal() {
                "G ".with(Color::Red)
            } else if cell.on_path {
                "**".with(Color::Yellow)
            } else if cell.visited {
                ". ".with(Color::Blue)
            } else {
                "  ".with(Color::Reset)
            };
            queue!(stdout, PrintStyledContent(glyph))?;
        }
        queue!(stdout, Print("|"))?;
        row += 1;
    }

    // Bottom border; the outer boundary is always walled.
    let mut bottom = String::new();
    for _ in 0..maze.width() {
        bottom.push_str("+--");
    }
    bottom.push('+');
    queue!(stdout, cursor::MoveTo(0, row), Print(bottom))?;

    let status = match race.state() {
        SearchState::Idle => "idle",
        SearchState::Running => "searching",
        SearchState::Succeeded => "solved",
        SearchState::Aborted => "paused",
    };
    queue!(
        stdout,
        cursor::MoveTo(0, row + 2),
        terminal::Clear(ClearType::CurrentLine),
        Print(format!(
            "BFS: {}   DFS: {}   [{}]",
            race.bfs_steps(),
            race.dfs_steps(),
            status
        )),
        cursor::MoveTo(0, row + 3),
        Print("b: BFS  d: DFS  p: pause/resume  r: reset  q: quit"),
    )?;
    if let Some(winner) = race.winner() {
        let label = match winner {
            Strategy::Bfs => "BFS wins!",
            Strategy::Dfs => "DFS wins!",
        };
        queue!(stdout, cursor::MoveTo(0, row + 4), Print(label))?;
    }
    stdout.flush()
}

fn run(stdout: &mut Stdout, race: &mut Race) -> std::io::Result<()> {
    loop {
        draw(stdout, race)?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('b') => race.start(Strategy::Bfs),
                    KeyCode::Char('d') => race.start(Strategy::Dfs),
                    KeyCode::Char('p') => match race.state() {
                        SearchState::Running => race.pause(),
                        SearchState::Aborted => race.resume(),
                        _ => {}
                    },
                    KeyCode::Char('r') => race.reset(),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    _ => {}
                }
            }
        }

        if race.state() == SearchState::Running {
            race.step();
        }
    }
}

fn main() -> std::io::Result<()> {
    let _guard = init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let width: u8 = args.first().map_or(Ok(40), |s| s.parse()).unwrap_or(0);
    let height: u8 = args.get(1).map_or(Ok(20), |s| s.parse()).unwrap_or(0);
    if width == 0 || height == 0 {
        eprintln!("usage: mazerace [width] [height] [seed]  (1-255 each)");
        return Ok(());
    }
    let seed: u64 = match args.get(2) {
        Some(s) => match s.parse() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("seed must be an unsigned integer");
                return Ok(());
            }
        },
        None => rand::rng().random(),
    };
    tracing::info!(width, height, seed, "starting race");

    let mut race = Race::new(width, height, seed);
    let mut stdout = stdout();
    setup_terminal(&mut stdout)?;
    let result = run(&mut stdout, &mut race);
    restore_terminal(&mut stdout)?;
    result
}
