use crossterm::event;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::core::logging;
use flappy::game::{process_input, process_tick};
use flappy::input::map_event;
use flappy::{AppError, Assets, GameConfig, GameSession, InputOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Command-line options.
struct Options {
    config: Option<PathBuf>,
    assets: PathBuf,
    seed: Option<u64>,
    log: Option<PathBuf>,
}

fn print_help() {
    println!("flappy - flappy bird in your terminal");
    println!();
    println!("Usage: flappy [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <path>   Game config JSON (default: ~/.flappy/config.json)");
    println!("  --assets <dir>    Sprite and font directory (default: ./assets)");
    println!("  --seed <n>        Seed for pipe placement");
    println!("  --log <path>      Log file (default: ~/.flappy/flappy.log)");
    println!("  -v, --version     Print version");
    println!("  -h, --help        Print this help");
    println!();
    println!("Controls: Space/Up/Enter to start and flap, Esc or Q to quit.");
}

/// Parse arguments. Returns `Ok(None)` when the program should exit
/// without starting the game.
fn parse_args(args: &[String]) -> Result<Option<Options>, AppError> {
    let mut options = Options {
        config: None,
        assets: PathBuf::from("assets"),
        seed: None,
        log: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| AppError::Usage(format!("{name} needs a value")))
        };
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(None);
            }
            "--version" | "-v" => {
                println!("flappy {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--config" => options.config = Some(PathBuf::from(value("--config")?)),
            "--assets" => options.assets = PathBuf::from(value("--assets")?),
            "--log" => options.log = Some(PathBuf::from(value("--log")?)),
            "--seed" => {
                let raw = value("--seed")?;
                let seed = raw
                    .parse()
                    .map_err(|_| AppError::Usage(format!("--seed expects a number, got {raw}")))?;
                options.seed = Some(seed);
            }
            other => {
                return Err(AppError::Usage(format!(
                    "unknown argument {other}; run 'flappy --help' for usage"
                )))
            }
        }
    }
    Ok(Some(options))
}

fn load_config(options: &Options) -> Result<GameConfig, AppError> {
    let config = match &options.config {
        // An explicitly named file must exist.
        Some(path) => GameConfig::load(path)?,
        None => match GameConfig::default_path() {
            Some(path) => GameConfig::load_or_default(&path)?,
            None => GameConfig::default(),
        },
    };
    Ok(config)
}

fn main() -> Result<(), AppError> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args)? {
        Some(options) => options,
        None => return Ok(()),
    };

    if let Some(path) = options.log.clone().or_else(logging::default_log_path) {
        if let Err(e) = logging::init(&path) {
            eprintln!("Warning: logging disabled ({}): {}", path.display(), e);
        }
    }

    let config = load_config(&options)?;
    log::info!("starting with config {:?}", config);

    let assets = Assets::load(&options.assets, &config);
    let session = GameSession::with_masks(config, assets.bird.mask(), assets.pipe.mask());
    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, session, &assets, rng);

    // Restore the terminal even if the loop failed.
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Ok(high_score) = &result {
        log::info!("quit with high score {}", high_score);
    }
    result.map(|_| ())
}

/// Fixed-rate game loop: input, tick, draw, sleep. Returns the high score.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut session: GameSession,
    assets: &Assets,
    mut rng: StdRng,
) -> Result<u32, AppError> {
    let frame_duration = session.config.frame_duration();
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Drain every pending event before simulating this frame.
        while event::poll(Duration::ZERO)? {
            let Some(input) = map_event(&event::read()?) else {
                continue;
            };
            if process_input(&mut session, input) == InputOutcome::Quit {
                return Ok(session.high_score);
            }
        }

        let now = Instant::now();
        let elapsed = now - last_tick;
        last_tick = now;
        let result = process_tick(&mut session, elapsed, &mut rng);
        if result.points_scored > 0 {
            log::debug!("score {}", session.score);
        }
        if let Some(collision) = result.collision {
            log::info!(
                "game over ({:?}): score {}, high score {}",
                collision,
                session.score,
                session.high_score
            );
        }

        terminal.draw(|frame| flappy::ui::draw(frame, &session, assets))?;

        if let Some(remaining) = frame_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}
