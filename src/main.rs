//! Numberline - graph inequalities on a number line and get graded
//!
//! Thin terminal driver around the core session: reads pointer events as
//! text commands, polls the session state back, and draws it.

use numberline::app::cli::{Cli, Commands, ConfigAction};
use numberline::app::config::Config;
use numberline::app::render;
use numberline::quiz::QuizGenerator;
use numberline::session::{Script, Session, SessionEvent};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    match cli.command {
        Commands::Play { seed, record } => {
            run_play(seed, record, &config)?;
        }
        Commands::Replay { input, seed } => {
            run_replay(&input, seed, &config)?;
        }
        Commands::Quiz { count, seed } => {
            run_quiz(count, seed, &config)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

/// Build a generator from the CLI seed, falling back to the configured seed
fn make_generator(seed: Option<u64>, config: &Config) -> anyhow::Result<QuizGenerator> {
    let generator = match seed.or(config.quiz.seed) {
        Some(s) => QuizGenerator::seeded(s),
        None => QuizGenerator::new(),
    };
    Ok(generator.with_variables(&config.quiz.variables)?)
}

fn make_session(seed: Option<u64>, config: &Config) -> anyhow::Result<Session> {
    let generator = make_generator(seed, config)?;
    let session = Session::with_generator(config.range()?, config.line.track_width_px, generator)?;
    Ok(session)
}

fn run_play(
    seed: Option<u64>,
    record: Option<PathBuf>,
    config: &Config,
) -> anyhow::Result<()> {
    let mut session = make_session(seed, config)?;
    let mut script = Script::new("play");

    println!("Track is {:.0}px wide. Commands:", config.line.track_width_px);
    println!("  click <px> | hover <px> | check | next | reset | reset-score | quit");
    println!();
    println!("{}", render::render_status(&session));

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["click", px] => match px.parse::<f64>() {
                Ok(px) => {
                    session.click(px);
                    script.push(SessionEvent::Click { px });
                }
                Err(_) => println!("expected a pixel number, got '{}'", px),
            },
            ["hover", px] => match px.parse::<f64>() {
                Ok(px) => {
                    session.hover(px);
                    script.push(SessionEvent::Hover { px });
                }
                Err(_) => println!("expected a pixel number, got '{}'", px),
            },
            ["check"] => {
                let report = session.check();
                script.push(SessionEvent::Check);
                println!("{}", report.message);
            }
            ["next"] => {
                session.next();
                script.push(SessionEvent::Next);
            }
            ["reset"] => session.reset_answer(),
            ["reset-score"] => session.reset_score(),
            other => {
                println!("unknown command: {}", other.join(" "));
                continue;
            }
        }
        println!("{}", render::render_status(&session));
    }

    let score = session.score();
    println!("Final score: {}/{}", score.correct, score.attempts);

    if let Some(path) = record {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        script.save(&path)?;
        info!("Saved {} events to {:?}", script.len(), path);
        println!("Recorded {} events to {}", script.len(), path.display());
    }

    Ok(())
}

fn run_replay(input: &Path, seed: Option<u64>, config: &Config) -> anyhow::Result<()> {
    if !input.exists() {
        anyhow::bail!("Script file not found: {:?}", input);
    }

    let script = Script::load(input)?;
    info!(name = %script.name, events = script.len(), "loaded script");
    if seed.or(config.quiz.seed).is_none() {
        warn!("replaying without a seed; quizzes will not match the recorded session");
    }

    let mut session = make_session(seed, config)?;
    println!("Quiz: {}", session.quiz().text);
    for line in session.replay(&script) {
        println!("{}", line);
    }

    println!();
    println!("{}", render::render_status(&session));
    Ok(())
}

fn run_quiz(count: u32, seed: Option<u64>, config: &Config) -> anyhow::Result<()> {
    let range = config.range()?;
    let mut generator = make_generator(seed, config)?;
    for _ in 0..count {
        println!("{}", generator.generate(range).text);
    }
    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save_default()?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    std::fs::create_dir_all(Cli::scripts_dir())?;
    println!("Scripts directory: {:?}", Cli::scripts_dir());

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("Configuration ({:?}):\n", Config::default_path());
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Get { key } => {
            let doc: toml::Value = toml::from_str(&config.to_toml()?)?;
            match lookup_value(&doc, &key) {
                Some(value) => println!("{} = {}", key, value),
                None => anyhow::bail!("Configuration key '{}' not found", key),
            }
        }
        ConfigAction::Set { key, value } => {
            let config_path = Config::default_path();
            if !config_path.exists() {
                anyhow::bail!("No config file found. Run 'numberline init' first.");
            }

            let content = std::fs::read_to_string(&config_path)?;
            let mut doc: toml::Value = toml::from_str(&content)?;
            if !store_value(&mut doc, &key, &value) {
                anyhow::bail!("Failed to set '{}'. Key may not exist in config.", key);
            }

            // Round-trip through Config so invalid values are rejected
            // before they land on disk
            let updated: Config = doc.try_into()?;
            updated.validate()?;
            updated.save(&config_path)?;
            println!("Set {} = {}", key, value);
        }
        ConfigAction::Reset { force } => {
            let config_path = Config::default_path();

            if config_path.exists() && !force {
                println!("Config exists at {:?}", config_path);
                println!("Use --force to reset to defaults");
                return Ok(());
            }

            Config::default().save_default()?;
            println!("Configuration reset to defaults at {:?}", config_path);
        }
    }

    Ok(())
}

/// Look up a dotted key in a TOML document
fn lookup_value<'a>(doc: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = doc;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

/// Set a dotted key to a parsed scalar; false if the key does not exist
fn store_value(doc: &mut toml::Value, key: &str, raw: &str) -> bool {
    let mut parts = key.split('.').collect::<Vec<_>>();
    let Some(leaf) = parts.pop() else {
        return false;
    };

    let mut current = doc;
    for part in parts {
        match current.get_mut(part) {
            Some(next) => current = next,
            None => return false,
        }
    }

    let Some(table) = current.as_table_mut() else {
        return false;
    };
    if !table.contains_key(leaf) {
        return false;
    }
    table.insert(leaf.to_string(), parse_scalar(raw));
    true
}

/// Parse a CLI string into the closest TOML scalar type
fn parse_scalar(raw: &str) -> toml::Value {
    if let Ok(v) = raw.parse::<i64>() {
        return toml::Value::Integer(v);
    }
    if let Ok(v) = raw.parse::<f64>() {
        return toml::Value::Float(v);
    }
    if let Ok(v) = raw.parse::<bool>() {
        return toml::Value::Boolean(v);
    }
    toml::Value::String(raw.to_string())
}
