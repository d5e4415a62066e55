use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use editorconfig_hook::{
    find_config_file, generate_init_file, load_config, merge_hook_config, run, should_use_colors,
    CliHookOptions, Config, HookToml, IndentStyle, OutputContext, OutputMode, Stream,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "editorconfig-hook")]
#[command(version, about = "Re-indent config files according to .editorconfig rules")]
struct Cli {
    /// Config files or directories to format
    #[arg(required_unless_present = "init")]
    paths: Vec<PathBuf>,

    /// Directory holding the .editorconfig (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    target: Option<PathBuf>,

    /// Check only (no modifications), exit 1 if files would change
    #[arg(short, long)]
    check: bool,

    /// Show changes in diff format
    #[arg(short, long)]
    diff: bool,

    /// Output only modified file names
    #[arg(short, long)]
    quiet: bool,

    /// Show skipped files
    #[arg(short, long)]
    verbose: bool,

    /// Indent style for sections that don't set indent_style
    #[arg(long, value_name = "STYLE")]
    indent_style: Option<IndentStyle>,

    /// Indent size for sections that don't set indent_size
    #[arg(long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    indent_size: Option<usize>,

    /// Force colored output
    #[arg(long)]
    color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    no_color: bool,

    /// Generate a template editorconfig-hook.toml configuration file
    #[arg(long)]
    init: bool,

    /// Specify config file path (overrides auto-discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("EDITORCONFIG_HOOK_LOG"))
        .init();

    let cli = Cli::parse();

    // Handle --init command
    if cli.init {
        return handle_init();
    }

    // Load configuration
    let toml_config = load_configuration(&cli.config, cli.quiet);

    // Merge configurations: CLI > TOML > defaults
    let cli_options = CliHookOptions {
        indent_style: cli.indent_style,
        indent_size: cli.indent_size,
    };
    let hook = merge_hook_config(&cli_options, toml_config.as_ref().map(|c| &c.hook));

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.diff {
        OutputMode::Diff
    } else {
        OutputMode::Normal
    };

    let target_path = match cli.target.clone().map_or_else(std::env::current_dir, Ok) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let config = Config {
        check_only: cli.check,
        output_mode,
        target_path,
        hook,
    };

    let use_colors = should_use_colors(cli.color, cli.no_color, Stream::Stdout);
    let show_progress = !cli.quiet && should_use_colors(false, false, Stream::Stderr);
    let ctx = OutputContext::new(output_mode, use_colors, cli.verbose, show_progress);

    match run(&cli.paths, &config, &ctx).await {
        Ok(result) => {
            if config.check_only && result.has_problems() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn handle_init() -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_configuration(explicit_path: &Option<PathBuf>, quiet: bool) -> Option<HookToml> {
    let config_path = explicit_path.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|d| find_config_file(&d))
    });

    config_path.and_then(|p| match load_config(&p) {
        Ok(config) => {
            if !quiet {
                eprintln!("Using config: {}", p.display());
            }
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: Failed to load {}: {}", p.display(), e);
            None
        }
    })
}
