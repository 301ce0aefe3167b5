use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use relnotes::{
    Branch, ChangelogConfig, GitRef, OutputFormat as ChangelogFormat, Project, RelnotesConfig,
    ReleaseRange, Version,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(version, about = "release notes generator for GitHub projects", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// path to the project checkout (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// configuration file (defaults to relnotes.toml in the project root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// output format for reports (json or human)
    #[arg(short, long, default_value = "human", global = true)]
    format: OutputFormat,

    /// log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// generate release notes between two releases
    ReleaseNotes {
        /// use markdown instead of RST
        #[arg(long)]
        markdown: bool,

        /// add headed sections
        #[arg(long)]
        with_sections: bool,

        /// produce a flat list (default)
        #[arg(long)]
        without_sections: bool,

        /// leave out author mentions
        #[arg(long = "dont-include-author")]
        dont_include_author: bool,

        /// base version (defaults to the latest GitHub release)
        #[arg(long)]
        base_ref: Option<String>,

        /// head ref: dev, beta, stable/release or a version tag
        #[arg(long, default_value = "dev")]
        head_ref: String,

        /// head version (derived from the base version and head ref when omitted)
        #[arg(long)]
        head_version: Option<String>,

        /// write the changelog to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// show the versions that follow a release
    NextVersions {
        /// version to start from
        version: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::ReleaseNotes {
            markdown,
            with_sections,
            without_sections,
            dont_include_author,
            base_ref,
            head_ref,
            head_version,
            output,
        } => {
            let config = load_config(&cli.path, cli.config.as_ref())?;
            let options = ReleaseNotesOptions {
                markdown,
                with_sections: with_sections && !without_sections,
                include_author: !dont_include_author,
                base_ref,
                head_ref,
                head_version,
                output,
            };
            handle_release_notes(&cli.path, &config, options)?;
        }
        Commands::NextVersions { version } => {
            handle_next_versions(&cli.format, &version)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the changelog
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: &PathBuf, config_path: Option<&PathBuf>) -> Result<RelnotesConfig> {
    match config_path {
        Some(config_path) => RelnotesConfig::load_from_file(config_path)
            .with_context(|| format!("failed to load {}", config_path.display())),
        None => RelnotesConfig::load_or_default(path).context("failed to load relnotes.toml"),
    }
}

struct ReleaseNotesOptions {
    markdown: bool,
    with_sections: bool,
    include_author: bool,
    base_ref: Option<String>,
    head_ref: String,
    head_version: Option<String>,
    output: Option<PathBuf>,
}

fn handle_release_notes(
    path: &PathBuf,
    config: &RelnotesConfig,
    options: ReleaseNotesOptions,
) -> Result<()> {
    let project = Project::new(path, config).context("failed to open project")?;

    let base_str = match options.base_ref {
        Some(base) => base,
        None => project
            .latest_release(true)
            .context("failed to look up the latest release")?
            .map(|v| v.to_string())
            .context("no release found, pass --base-ref")?,
    };
    let base_version = Version::parse(&base_str)
        .with_context(|| format!("base ref '{}' is not a version", base_str))?;
    let base_ref = GitRef::from_string(&base_str);

    let (head_ref, default_head_version) = match options.head_ref.parse::<Branch>() {
        Ok(branch) => (
            project.branch_ref(branch)?,
            Some(branch.default_head_version(&base_version)),
        ),
        Err(_) => (
            GitRef::from_string(&options.head_ref),
            Version::parse(&options.head_ref).ok(),
        ),
    };

    let head_version = match options.head_version {
        Some(head) => Version::parse(&head)
            .with_context(|| format!("head version '{}' is not a version", head))?,
        None => default_head_version.with_context(|| {
            format!(
                "cannot derive a version from '{}', pass --head-version",
                options.head_ref
            )
        })?,
    };

    let changelog_config = ChangelogConfig::new(project.shortname())
        .format(if options.markdown {
            ChangelogFormat::Markdown
        } else {
            ChangelogFormat::Rst
        })
        .with_sections(options.with_sections)
        .include_author(options.include_author)
        .prerelease(head_version.is_beta())
        .workers(config.workers);

    let range = ReleaseRange::new(base_ref, base_version, head_ref, head_version);
    let text = relnotes::generate(&project, &range, &changelog_config)
        .context("failed to generate changelog")?;

    match options.output {
        Some(output) => {
            std::fs::write(&output, &text)
                .with_context(|| format!("failed to write {}", output.display()))?;
            tracing::info!("changelog written to {}", output.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}

fn handle_next_versions(format: &OutputFormat, version_str: &str) -> Result<()> {
    let version = Version::parse(version_str)
        .with_context(|| format!("'{}' is not a version", version_str))?;

    let dev = version.next_dev_version();
    let beta = version.next_beta_version();
    let patch = version.next_patch_version();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "version": version,
                "dev": dev,
                "beta": beta,
                "patch": patch,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("next versions after {}:", version);
            println!("  dev:   {}", dev);
            println!("  beta:  {}", beta);
            println!("  patch: {}", patch);
        }
    }

    Ok(())
}
