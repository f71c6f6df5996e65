use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::ArgAction;
use nekoage::{Age, CatProfile, Locale, ParseMode, Theme, calculate_age_with, generate_svg};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// `--today` is always read as `YYYY-MM-DD`.
fn parse_today(s: &str) -> Result<NaiveDate, String> {
    nekoage::parse_birthdate(s, ParseMode::Strict)
        .map_err(|_| format!("expected YYYY-MM-DD, got '{s}'"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        Self::setup_logging(self.verbose);

        match self.command {
            Command::Age(cmd) => cmd.run(),
            Command::Card(cmd) => cmd.run(),
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print a cat's age
    Age(AgeCmd),
    /// Render a cat's profile card to dark and light SVGs
    Card(CardCmd),
}

/// Options shared by every subcommand that computes an age.
#[derive(Debug, clap::Args)]
pub struct AgeOptions {
    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long, env = "NEKOAGE_TODAY", value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Display language
    #[arg(long, env = "NEKOAGE_LOCALE", value_enum, default_value_t = Locale::Ja)]
    locale: Locale,

    /// Accept ISO 8601 birthdates (YYYY-MM-DD) only
    #[arg(long)]
    strict: bool,
}

impl AgeOptions {
    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct AgeCmd {
    /// Birthdate, e.g. 2020-01-31, 2020/01/31 or 01/31/2020
    birthdate: String,

    #[command(flatten)]
    options: AgeOptions,

    /// Print a JSON object instead of the display string
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct AgeReport<'a> {
    birthdate: &'a str,
    today: NaiveDate,
    years: i32,
    months: i32,
    display: String,
}

impl AgeCmd {
    #[instrument(skip(self), fields(birthdate = %self.birthdate))]
    fn run(self) -> Result<()> {
        let today = self.options.today();
        let age = calculate_age_with(&self.birthdate, today, self.options.mode())?;
        warn_if_unborn(&age, &self.birthdate, today);

        let display = age.render(self.options.locale);
        if self.json {
            let report = AgeReport {
                birthdate: self.birthdate.trim(),
                today,
                years: age.years,
                months: age.months,
                display,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{display}");
        }
        Ok(())
    }
}

#[derive(Debug, clap::Args)]
pub struct CardCmd {
    /// Profile JSON file
    profile: PathBuf,

    #[command(flatten)]
    options: AgeOptions,

    /// Directory the SVGs are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

impl CardCmd {
    #[instrument(skip(self), fields(profile = %self.profile.display()))]
    fn run(self) -> Result<()> {
        let profile = CatProfile::load(&self.profile)?;
        let today = self.options.today();
        let age = profile.age_on(today, self.options.mode())?;
        warn_if_unborn(&age, &profile.birthdate, today);
        let display = age.render(self.options.locale);

        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("Failed to create {}", self.out_dir.display()))?;

        for theme in Theme::ALL {
            let path = self.out_dir.join(theme.file_name());
            fs::write(&path, generate_svg(&profile, &display, theme))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), ?theme, "wrote card");
        }

        println!(
            "Generated {} and {} for {}.",
            Theme::Dark.file_name(),
            Theme::Light.file_name(),
            profile.name
        );
        Ok(())
    }
}

fn warn_if_unborn(age: &Age, birthdate: &str, today: NaiveDate) {
    if age.is_unborn() {
        warn!(birthdate, %today, "birthdate is in the future");
    }
}
