//! Command line front end for the Life board

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_board::{
    animation::{GenerationsPerMinute, LifeSession},
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{
        create_example_grids, load_grid_auto, load_grids_from_directory, patterns,
        save_grid_auto, EvolutionTracker, Grid, LifeRules,
    },
    utils::{ColorOutput, GridFormatter},
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "life_board")]
#[command(about = "Conway's Game of Life on a bounded board")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the first generation comes from, shared by `run` and `step`
#[derive(clap::Args, Debug)]
struct BoardArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Built-in pattern to start from (overrides config)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Initial state file, text or .json snapshot (overrides config)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Board rows (overrides config)
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns (overrides config)
    #[arg(long)]
    cols: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the board in the terminal
    Run {
        #[command(flatten)]
        board: BoardArgs,

        /// Generations per minute, 1 to 250 (overrides config)
        #[arg(long)]
        gpm: Option<GenerationsPerMinute>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Save the last displayed generation here (.json for a snapshot)
        #[arg(long)]
        save: Option<PathBuf>,

        /// Save the starting board here (.json for a snapshot)
        #[arg(long)]
        save_initial: Option<PathBuf>,

        /// Redraw in place instead of scrolling
        #[arg(long)]
        clear: bool,
    },

    /// Advance a fixed number of generations without animation
    Step {
        #[command(flatten)]
        board: BoardArgs,

        /// Number of generations to advance
        #[arg(short = 'n', long, default_value_t = 1)]
        generations: usize,

        /// Write the result here (.json for a snapshot, text otherwise)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Snapshot directory for non-text output formats (overrides config)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Show every generation on the way
        #[arg(long)]
        show_evolution: bool,
    },

    /// Print a grid file with coordinates and statistics
    Show {
        /// Grid file (text or .json snapshot), or a directory of them
        path: PathBuf,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            board,
            gpm,
            generations,
            save,
            save_initial,
            clear,
        } => run_command(board, gpm, generations, SaveTargets { save, save_initial }, clear),
        Commands::Step {
            board,
            generations,
            output,
            output_dir,
            show_evolution,
        } => step_command(board, generations, output, output_dir, show_evolution),
        Commands::Show { path } => show_command(path),
        Commands::Setup { directory, force } => setup_command(directory, force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

/// Where `run` writes boards once the animation stops
#[derive(Debug)]
struct SaveTargets {
    /// Last displayed generation
    save: Option<PathBuf>,
    /// The starting board, kept across the whole run
    save_initial: Option<PathBuf>,
}

fn load_settings(board: &BoardArgs, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = if board.config.exists() {
        Settings::from_file(&board.config)
            .with_context(|| format!("Failed to load config from {}", board.config.display()))?
    } else {
        Settings::default()
    };

    settings.merge_with_cli(&CliOverrides {
        rows: board.rows,
        cols: board.cols,
        pattern: board.pattern.clone(),
        initial_state_file: board.input.clone(),
        ..overrides
    });
    settings
        .validate()
        .context("Configuration validation failed")?;

    Ok(settings)
}

fn run_command(
    board: BoardArgs,
    gpm: Option<GenerationsPerMinute>,
    generations: Option<u64>,
    targets: SaveTargets,
    clear: bool,
) -> Result<()> {
    let settings = load_settings(
        &board,
        CliOverrides {
            generations_per_minute: gpm,
            max_generations: generations,
            ..Default::default()
        },
    )?;
    let pace = settings.animation.generations_per_minute;
    let limit = settings.animation.max_generations;

    let mut session = LifeSession::new(settings.initial_grid()?);
    println!("{}", GridFormatter::format_frame(0, session.current()));

    let driver = session
        .start(pace)
        .context("Cannot start the animation")?;
    println!(
        "{}",
        ColorOutput::info(&format!("Running animation at {}...", pace))
    );

    while let Some(frame) = driver.recv() {
        if clear {
            print!("\x1b[2J\x1b[H");
        }
        println!("{}", GridFormatter::format_frame(frame.generation, &frame.grid));

        let extinct = frame.grid.is_empty();
        session.accept(frame);

        if extinct {
            println!("{}", ColorOutput::warning("All cells are dead"));
            break;
        }
        if limit.is_some_and(|limit| session.generation() >= limit) {
            break;
        }
    }

    session.stop(driver).context("Animation stopped abnormally")?;
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Animation paused at generation {}",
            session.generation()
        ))
    );

    if let Some(path) = targets.save {
        save_grid_auto(session.current(), &path)?;
        println!("Saved generation {} to {}", session.generation(), path.display());
    }
    if let Some(path) = targets.save_initial {
        save_grid_auto(session.initial(), &path)?;
        println!("Saved initial state to {}", path.display());
    }

    Ok(())
}

fn step_command(
    board: BoardArgs,
    generations: usize,
    output: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    show_evolution: bool,
) -> Result<()> {
    let settings = load_settings(
        &board,
        CliOverrides {
            output_dir,
            ..Default::default()
        },
    )?;
    let initial = settings.initial_grid()?;

    let mut tracker = EvolutionTracker::new(EvolutionTracker::DEFAULT_WINDOW);
    let mut current = initial.clone();
    let mut next = initial.clone();
    if show_evolution {
        println!("{}", GridFormatter::format_frame(0, &current));
    }
    tracker.push(current.clone());

    let start_time = Instant::now();
    for generation in 1..=generations {
        LifeRules::step_into(&current, &mut next)?;
        std::mem::swap(&mut current, &mut next);
        if show_evolution {
            println!("{}", GridFormatter::format_frame(generation as u64, &current));
        }
        tracker.push(current.clone());
    }
    let elapsed = start_time.elapsed();

    if !show_evolution {
        let ends = [initial, current.clone()];
        println!("{}", GridFormatter::format_side_by_side(&ends));
    }

    if let Some(analysis) = tracker.finish() {
        println!("{}", analysis);
    }
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Advanced {} generation(s) in {:.3}ms",
            generations,
            elapsed.as_secs_f64() * 1000.0
        ))
    );

    match output {
        Some(target) => {
            save_grid_auto(&current, &target)?;
            println!("Saved result to {}", target.display());
        }
        None if settings.output.format != OutputFormat::Text => {
            let saved = GridFormatter::save_grid(
                &current,
                &settings.output.snapshot_directory,
                &format!("generation_{:04}", generations),
                settings.output.format,
            )?;
            println!("Saved result to {}", saved.display());
        }
        None => {}
    }

    Ok(())
}

fn show_command(path: PathBuf) -> Result<()> {
    if path.is_dir() {
        let grids = load_grids_from_directory(&path)?;
        if grids.is_empty() {
            println!(
                "{}",
                ColorOutput::warning(&format!("No grid files in {}", path.display()))
            );
        }
        for (name, grid) in &grids {
            println!("{}", ColorOutput::info(&format!("== {} ==", name)));
            print_grid_summary(grid);
        }
        return Ok(());
    }

    let grid = load_grid_auto(&path)
        .with_context(|| format!("Failed to load grid from {}", path.display()))?;
    print_grid_summary(&grid);
    Ok(())
}

fn print_grid_summary(grid: &Grid) {
    let (rows, cols) = grid.dimensions();

    println!("Grid ({}x{}):", rows, cols);
    println!("{}", GridFormatter::format_grid_with_coords(grid));

    println!("Grid Statistics:");
    println!("  Living cells: {}", grid.living_count());
    println!(
        "  Density: {:.1}%",
        (grid.living_count() as f64 / (rows * cols) as f64) * 100.0
    );

    let next = LifeRules::step(grid);
    if next == *grid {
        println!("  {}", ColorOutput::info("Still life: unchanged by a step"));
    } else {
        println!("  Living cells next generation: {}", next.living_count());
    }
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/patterns");
    let output_dir = directory.join("output/snapshots");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_grids(&input_dir).context("Failed to create example grids")?;
    println!("Created example patterns in: {}", input_dir.display());

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut slow_blinker = Settings::default();
    slow_blinker.animation.generations_per_minute = GenerationsPerMinute::new(30)?;
    slow_blinker.animation.max_generations = Some(10);
    slow_blinker.input.pattern = "blinker".to_string();
    slow_blinker.to_file(&examples_dir.join("blinker.yaml"))?;

    let mut big_board = Settings::default();
    big_board.board.rows = 40;
    big_board.board.cols = 60;
    big_board.animation.generations_per_minute =
        GenerationsPerMinute::new(GenerationsPerMinute::MAX)?;
    big_board.input.pattern = "r-pentomino".to_string();
    big_board.output.format = OutputFormat::Json;
    big_board.to_file(&examples_dir.join("r_pentomino.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("Available patterns: {}", patterns::names().collect::<Vec<_>>().join(", "));

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Draw your own boards in {}", input_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
