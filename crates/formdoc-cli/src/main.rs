//! formdoc CLI entry point.
//!
//! Provides command-line tools for working with form templates:
//! - `formdoc render` - Render a document from a JSON input file
//! - `formdoc check` - Report rendering warnings for an input file
//! - `formdoc fields` - List the fields a form reads
//! - `formdoc list` - List the shipped form templates

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_fields, run_list, run_render, CheckArgs, FieldsArgs, ListArgs, RenderArgs,
};

/// Form template tools.
#[derive(Debug, Parser)]
#[command(name = "formdoc")]
#[command(about = "Form template rendering tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a document from a JSON input file
    Render(RenderArgs),
    /// Report rendering warnings for an input file
    Check(CheckArgs),
    /// List the fields a form reads
    Fields(FieldsArgs),
    /// List the shipped form templates
    List(ListArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Render(args) => run_render(args, cli.verbose),
        Commands::Check(args) => run_check(args),
        Commands::Fields(args) => run_fields(args),
        Commands::List(args) => run_list(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
