use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Dataset, LoaderConfig};
use query_engine::config::{DEFAULT_FIRST_YEAR, DEFAULT_LAST_YEAR};
use query_engine::{QueryConfig, QueryEngine, YearRange};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Instant;

mod render;
mod shell;

use render::OutputFormat;
use shell::Shell;

/// movies - query a movie list by year, rating and language
#[derive(Parser, Debug)]
#[command(name = "movies", version)]
#[command(about = "Load a movie file and query it by year, rating and language", long_about = None)]
struct Cli {
    /// Movie file: a header line, then `title,year,[lang1;lang2],rating` rows
    file: PathBuf,

    /// Lenient legacy parsing: bad numbers become 0, at most 5
    /// languages per movie, lines limited to 1024 bytes
    #[arg(long)]
    compat: bool,

    /// Keep at most this many languages per movie
    #[arg(long, value_name = "N")]
    max_languages: Option<usize>,

    /// Reject lines longer than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_line_length: Option<usize>,

    /// First year considered by the highest-rated query
    #[arg(long, default_value_t = DEFAULT_FIRST_YEAR, allow_negative_numbers = true)]
    year_min: i32,

    /// Last year considered by the highest-rated query
    #[arg(long, default_value_t = DEFAULT_LAST_YEAR, allow_negative_numbers = true)]
    year_max: i32,

    /// Consider every year in the highest-rated query
    #[arg(long, conflicts_with_all = ["year_min", "year_max"])]
    all_years: bool,

    /// Output format for subcommands
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable colored menu output
    #[arg(long)]
    no_color: bool,

    /// Run one query and exit instead of starting the interactive menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show movies released in the given year
    ByYear {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Show the highest rated movie for each year
    BestPerYear,

    /// Show year and title of all movies in the given language
    ByLanguage {
        /// Exact, case-sensitive language name
        language: String,
    },
}

impl Cli {
    fn loader_config(&self) -> LoaderConfig {
        let base = if self.compat {
            LoaderConfig::compat()
        } else {
            LoaderConfig::default()
        };
        let max_languages = self.max_languages.or(base.max_languages);
        let max_line_len = self.max_line_length.or(base.max_line_len);
        base.with_max_languages(max_languages)
            .with_max_line_len(max_line_len)
    }

    fn query_config(&self) -> QueryConfig {
        let year_range = if self.all_years {
            YearRange::unbounded()
        } else {
            YearRange::new(self.year_min, self.year_max)
        };
        QueryConfig::default().with_year_range(year_range)
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            std::process::exit(usage_exit_code(&err));
        }
    };

    // Initialize tracing on stderr so it never mixes with query output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let color = !cli.no_color && io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    // A load failure returns Err from main, which exits with 1
    let dataset = load_dataset(&cli)?;

    if cli.format == OutputFormat::Text || cli.command.is_none() {
        println!("{}", load_summary(&cli, dataset.len(), color));
    }

    let engine = QueryEngine::with_config(&dataset, cli.query_config());

    match &cli.command {
        None => handle_interactive(engine, color)?,
        Some(command) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            handle_command(&engine, command, cli.format, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn load_dataset(cli: &Cli) -> Result<Dataset> {
    let loader_config = cli.loader_config();
    tracing::debug!("Loader config: {:?}", loader_config);

    let start = Instant::now();
    let dataset = Dataset::load_from_file(&cli.file, &loader_config)
        .with_context(|| format!("Failed to load movie file {}", cli.file.display()))?;
    tracing::info!("Loaded {} movies in {:?}", dataset.len(), start.elapsed());
    Ok(dataset)
}

/// `Processed file ...` line, with a check mark only on a color terminal
fn load_summary(cli: &Cli, count: usize, color: bool) -> String {
    let summary = format!(
        "Processed file {} and parsed data for {} movies",
        cli.file.display(),
        count
    );
    if color {
        format!("{} {}", "✓".green(), summary)
    } else {
        summary
    }
}

/// Usage errors exit with 1; --help and --version with 0
fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

/// Run the menu on stdin/stdout
fn handle_interactive(engine: QueryEngine<'_>, color: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(engine, stdin.lock(), stdout.lock())
        .with_color(color)
        .run()
}

/// Run a single query subcommand
fn handle_command<W: Write>(
    engine: &QueryEngine<'_>,
    command: &Commands,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match (command, format) {
        (Commands::ByYear { year }, OutputFormat::Text) => {
            let titles = engine.movies_by_year(*year);
            render::write_movies_by_year(out, *year, &titles)?;
        }
        (Commands::ByYear { year }, OutputFormat::Json) => {
            render::write_json(out, &engine.movies_by_year(*year))?;
        }
        (Commands::BestPerYear, OutputFormat::Text) => {
            render::write_highest_rated(out, &engine.highest_rated_per_year())?;
        }
        (Commands::BestPerYear, OutputFormat::Json) => {
            render::write_json(out, &engine.highest_rated_per_year())?;
        }
        (Commands::ByLanguage { language }, OutputFormat::Text) => {
            let matches = engine.movies_by_language(language);
            render::write_movies_by_language(out, language, &matches)?;
        }
        (Commands::ByLanguage { language }, OutputFormat::Json) => {
            render::write_json(out, &engine.movies_by_language(language))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::ParseMode;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("movies").chain(args.iter().copied())).unwrap()
    }

    fn run(dataset: &Dataset, command: Commands, format: OutputFormat) -> String {
        let engine = QueryEngine::new(dataset);
        let mut out = Vec::new();
        handle_command(&engine, &command, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_dataset() -> Dataset {
        let contents = "title,year,languages,rating\n\
            Inception,2010,[English;Japanese],8.8\n\
            Parasite,2019,[Korean],8.6\n";
        Dataset::parse_str(contents, &LoaderConfig::default()).unwrap()
    }

    #[test]
    fn test_usage_exit_codes() {
        let missing_file = Cli::try_parse_from(["movies"]).unwrap_err();
        assert_eq!(usage_exit_code(&missing_file), 1);

        let bad_flag =
            Cli::try_parse_from(["movies", "movies.csv", "--year-min", "soon"]).unwrap_err();
        assert_eq!(usage_exit_code(&bad_flag), 1);

        let help = Cli::try_parse_from(["movies", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&help), 0);

        let version = Cli::try_parse_from(["movies", "--version"]).unwrap_err();
        assert_eq!(usage_exit_code(&version), 0);
    }

    #[test]
    fn test_load_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");
        let cli = parse(&[missing.to_str().unwrap()]);

        let err = load_dataset(&cli).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load movie file"));
    }

    #[test]
    fn test_load_summary_plain_without_color() {
        let cli = parse(&["movies.csv"]);
        assert_eq!(
            load_summary(&cli, 3, false),
            "Processed file movies.csv and parsed data for 3 movies"
        );
        assert!(load_summary(&cli, 3, true)
            .ends_with("Processed file movies.csv and parsed data for 3 movies"));
    }

    #[test]
    fn test_default_configs() {
        let cli = parse(&["movies.csv"]);
        assert_eq!(cli.loader_config(), LoaderConfig::default());
        assert_eq!(cli.query_config().year_range, YearRange::new(1900, 2021));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_compat_flags_and_overrides() {
        let cli = parse(&["movies.csv", "--compat", "--max-languages", "8"]);
        let config = cli.loader_config();
        assert_eq!(config.mode, ParseMode::Faithful);
        assert_eq!(config.max_languages, Some(8));
        assert_eq!(config.max_line_len, Some(1024));
    }

    #[test]
    fn test_year_window_flags() {
        let cli = parse(&["movies.csv", "--year-min", "1950", "--year-max", "2030"]);
        assert_eq!(cli.query_config().year_range, YearRange::new(1950, 2030));

        let cli = parse(&["movies.csv", "--all-years"]);
        assert_eq!(cli.query_config().year_range, YearRange::unbounded());
    }

    #[test]
    fn test_subcommand_parsing() {
        let cli = parse(&["movies.csv", "by-language", "French", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Some(Commands::ByLanguage { ref language }) if language == "French"
        ));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_handle_command_text() {
        let dataset = sample_dataset();
        assert_eq!(
            run(&dataset, Commands::ByYear { year: 2010 }, OutputFormat::Text),
            "Inception\n"
        );
        assert_eq!(
            run(&dataset, Commands::BestPerYear, OutputFormat::Text),
            "2010 8.8 Inception\n2019 8.6 Parasite\n"
        );
        assert_eq!(
            run(
                &dataset,
                Commands::ByLanguage {
                    language: "Korean".into()
                },
                OutputFormat::Text
            ),
            "2019 Parasite\n"
        );
    }

    #[test]
    fn test_handle_command_json() {
        let dataset = sample_dataset();
        let text = run(&dataset, Commands::ByYear { year: 1995 }, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::json!([]));

        let text = run(&dataset, Commands::BestPerYear, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[1]["title"], "Parasite");
    }

    #[test]
    fn test_load_through_cli_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "title,year,languages,rating").unwrap();
        writeln!(file, "Foo,abc,[English],x").unwrap();

        let strict = parse(&[file.path().to_str().unwrap()]);
        assert!(Dataset::load_from_file(&strict.file, &strict.loader_config()).is_err());

        let compat = parse(&[file.path().to_str().unwrap(), "--compat"]);
        let dataset = Dataset::load_from_file(&compat.file, &compat.loader_config()).unwrap();
        assert_eq!(dataset.len(), 1);
    }
}
