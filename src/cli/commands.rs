//! CLI command implementations
//!
//! Each command loads the config, does its work, and writes exactly one
//! envelope per result to stdout. Confirmation prompts (delete, import)
//! live here, not in the blog operation layer: a dispatched operation
//! is already confirmed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use crate::age;
use crate::blog::{
    default_export_filename, dispatch, read_import, write_export, BlogOp, CreateOp, DurableSlot,
    ListOp, OpOutcome, PostStore, ReplaceAllOp, SortKey, Theme, UpdateOp,
};
use crate::calc::{evaluate_expression, format_value};
use crate::rps::{self, Move, Scoreboard};
use crate::weather::WeatherClient;

use super::args::{BlogAction, Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{
    prompt_confirm, read_lines, write_error, write_error_details, write_response,
};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the durable slots (optional, default ./kitbag-data)
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Weather lookup settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

/// Weather section of the config. Units are always metric; the labels
/// in the report assume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_weather_api_key")]
    pub api_key: String,

    /// City fetched when the command names none
    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_data_dir() -> String {
    "./kitbag-data".to_string()
}
fn default_weather_endpoint() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}
fn default_weather_api_key() -> String {
    "67b92f0af5416edbfe58458f502b0a31".to_string()
}
fn default_city() -> String {
    "Bengaluru".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        WeatherConfig {
            endpoint: default_weather_endpoint(),
            api_key: default_weather_api_key(),
            default_city: default_city(),
        }
    }
}

impl Config {
    /// Load configuration. A missing file means defaults; a file that
    /// exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            let config = Config::default();
            config.validate()?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config("data_dir must not be empty"));
        }

        if Url::parse(&self.weather.endpoint).is_err() {
            return Err(CliError::config(format!(
                "Invalid weather endpoint URL: '{}'",
                self.weather.endpoint
            )));
        }

        if self.weather.api_key.trim().is_empty() {
            return Err(CliError::config("weather.api_key must not be empty"));
        }

        if self.weather.default_city.trim().is_empty() {
            return Err(CliError::config("weather.default_city must not be empty"));
        }

        Ok(())
    }

    /// Get data directory as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }
}

/// Main CLI entry point
///
/// Parses arguments, dispatches, and on failure writes the error
/// envelope. This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    if let Err(error) = run_command(cli) {
        report_error(&error)?;
        return Err(error);
    }
    Ok(())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Command::Blog { action } => blog(&config, action),
        Command::Weather { city } => weather(&config, city),
        Command::Calc { expr } => calc(&expr),
        Command::Age { born, on } => age(&born, on),
        Command::Rps { r#move } => rps(r#move),
        Command::Init => init(&cli.config, &config),
    }
}

/// Write the error envelope for a failed command
fn report_error(error: &CliError) -> CliResult<()> {
    match error.details() {
        Some(details) => write_error_details(error.code(), &error.to_string(), details),
        None => write_error(error.code(), &error.to_string()),
    }
}

/// Write the default config file if absent and seed the blog store.
/// Optional: every command self-seeds through the store's load path.
pub fn init(config_path: &Path, config: &Config) -> CliResult<()> {
    let mut config_written = false;
    if !config_path.exists() {
        let body = serde_json::to_string_pretty(config)?;
        fs::write(config_path, body).map_err(|e| {
            CliError::config(format!("Failed to write config {:?}: {}", config_path, e))
        })?;
        config_written = true;
    }

    let slot = DurableSlot::open(config.data_path())?;
    let store = PostStore::load(slot);

    write_response(json!({
        "initialized": true,
        "config_written": config_written,
        "data_dir": config.data_dir,
        "posts": store.len(),
    }))
}

fn blog(config: &Config, action: BlogAction) -> CliResult<()> {
    let slot = DurableSlot::open(config.data_path())?;

    match action {
        BlogAction::Create {
            title,
            category,
            content,
            image_url,
        } => run_op(
            slot,
            BlogOp::Create(CreateOp {
                title,
                category,
                content,
                image_url,
            }),
        ),
        BlogAction::Update {
            id,
            title,
            category,
            content,
            image_url,
        } => run_op(
            slot,
            BlogOp::Update(UpdateOp {
                id,
                title,
                category,
                content,
                image_url,
            }),
        ),
        BlogAction::Show { id } => run_op(slot, BlogOp::Show { id }),
        BlogAction::List {
            category,
            search,
            sort,
        } => {
            let sort = sort
                .parse::<SortKey>()
                .map_err(CliError::invalid_argument)?;
            run_op(
                slot,
                BlogOp::List(ListOp {
                    filter: Some(category),
                    search,
                    sort: Some(sort),
                }),
            )
        }
        BlogAction::Stats => run_op(slot, BlogOp::Stats),
        BlogAction::Delete { id, yes } => delete(slot, id, yes),
        BlogAction::Export { out } => export(slot, out),
        BlogAction::Import { file, yes } => import(slot, &file, yes),
        BlogAction::Theme { value } => theme(&slot, value),
    }
}

fn run_op(slot: DurableSlot, op: BlogOp) -> CliResult<()> {
    let mut store = PostStore::load(slot);
    let outcome = dispatch(&mut store, op)?;
    write_outcome(&outcome)
}

fn write_outcome(outcome: &OpOutcome) -> CliResult<()> {
    write_response(serde_json::to_value(outcome)?)
}

fn delete(slot: DurableSlot, id: i64, yes: bool) -> CliResult<()> {
    let mut store = PostStore::load(slot);

    if !yes {
        // Deleting an id that is not there is a silent no-op, so only
        // an existing post earns a prompt
        if let Some(post) = store.find(id) {
            let question = format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                post.title
            );
            if !prompt_confirm(&question)? {
                return write_response(json!({"cancelled": true}));
            }
        }
    }

    let outcome = dispatch(&mut store, BlogOp::Delete { id })?;
    write_outcome(&outcome)
}

fn export(slot: DurableSlot, out: Option<PathBuf>) -> CliResult<()> {
    let store = PostStore::load(slot);
    let now = Utc::now();
    let path = out.unwrap_or_else(|| PathBuf::from(default_export_filename(now)));
    let count = write_export(store.posts(), &path, now)?;

    write_response(json!({
        "exported": count,
        "path": path.display().to_string(),
    }))
}

fn import(slot: DurableSlot, file: &Path, yes: bool) -> CliResult<()> {
    let posts = read_import(file)?;

    if !yes {
        let question = format!(
            "This will replace all existing posts with {} imported posts. Continue?",
            posts.len()
        );
        if !prompt_confirm(&question)? {
            return write_response(json!({"cancelled": true}));
        }
    }

    let mut store = PostStore::load(slot);
    let outcome = dispatch(&mut store, BlogOp::ReplaceAll(ReplaceAllOp { posts }))?;
    write_outcome(&outcome)
}

fn theme(slot: &DurableSlot, value: Option<String>) -> CliResult<()> {
    let theme = match value.as_deref() {
        None => Theme::load(slot),
        Some("toggle") => {
            let next = Theme::load(slot).toggled();
            next.save(slot)?;
            next
        }
        Some("light") => {
            Theme::Light.save(slot)?;
            Theme::Light
        }
        Some("dark") => {
            Theme::Dark.save(slot)?;
            Theme::Dark
        }
        Some(other) => {
            return Err(CliError::invalid_argument(format!(
                "Unknown theme '{}': expected light, dark, or toggle",
                other
            )))
        }
    };

    write_response(json!({"theme": theme.as_str()}))
}

fn weather(config: &Config, city: Option<String>) -> CliResult<()> {
    let city = city.unwrap_or_else(|| config.weather.default_city.clone());
    let client = WeatherClient::new(
        config.weather.endpoint.clone(),
        config.weather.api_key.clone(),
    );
    let summary = client.fetch(&city)?;

    write_response(serde_json::to_value(&summary)?)
}

fn calc(expr: &str) -> CliResult<()> {
    let value = evaluate_expression(expr)?;

    write_response(json!({
        "expression": expr,
        "value": value,
        "display": format_value(value),
    }))
}

fn age(born: &str, on: Option<String>) -> CliResult<()> {
    let born = age::parse_date(born)?;
    let on = match on {
        Some(value) => age::parse_date(&value)?,
        None => Local::now().date_naive(),
    };
    let years = age::age_in_years(born, on)?;
    let report = age::AgeReport { born, on, years };

    write_response(serde_json::to_value(&report)?)
}

fn rps(one_shot: Option<String>) -> CliResult<()> {
    let mut rng = rand::thread_rng();
    let mut score = Scoreboard::default();

    if let Some(value) = one_shot {
        let user = Move::parse(&value)?;
        let round = rps::play_round(user, rps::random_move(&mut rng), &mut score);
        return write_response(serde_json::to_value(&round)?);
    }

    // Interactive session: one envelope per line of input, EOF ends it
    for line in read_lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "reset" => {
                score.reset();
                write_response(json!({"message": "Play your move", "score": score}))?;
            }
            _ => match Move::parse(input) {
                Ok(user) => {
                    let round = rps::play_round(user, rps::random_move(&mut rng), &mut score);
                    write_response(serde_json::to_value(&round)?)?;
                }
                Err(error) => write_error(error.code(), &error.to_string())?,
            },
        }
    }

    Ok(())
}
