use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;

use resistor_cli::resistor_codec::BandLayout;
use resistor_cli::{OutputFormat, RoleArg, commands, utils};

#[derive(Parser)]
#[command(name = "resistor")]
#[command(about = "Resistor color code calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the resistance printed by a set of color bands
    #[command(alias = "e")]
    Encode {
        /// Band layout (3, 4, 5 or 6); inferred from the number of bands if omitted
        #[arg(short = 'b', long = "bands")]
        layout: Option<BandLayout>,

        /// Band colors from left to right; "-" leaves a band blank
        #[arg(required = true, num_args = 1..=6, allow_hyphen_values = true)]
        bands: Vec<String>,
    },

    /// Find the color bands for a resistance such as 4k7, 470R or 2.2MΩ
    #[command(alias = "d")]
    Decode {
        /// Resistance to encode
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Band layout (3, 4, 5 or 6)
        #[arg(short = 'b', long = "bands", default_value = "4")]
        layout: BandLayout,

        /// Tolerance, e.g. 5% or 0.05
        #[arg(short, long)]
        tolerance: Option<String>,

        /// Temperature coefficient in ppm/°C (6-band only)
        #[arg(short = 'c', long = "temp-co")]
        temp_co: Option<String>,
    },

    /// Show the color code table
    Table {
        /// Only show one band role
        role: Option<RoleArg>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize color handling (respects NO_COLOR)
    utils::color::init_color();

    // Initialize logger with default level depending on --debug (overridden by RUST_LOG)
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Encode { layout, bands } => commands::encode::execute(&bands, layout, cli.format),
        Commands::Decode {
            value,
            layout,
            tolerance,
            temp_co,
        } => commands::decode::execute(
            &value,
            layout,
            tolerance.as_deref(),
            temp_co.as_deref(),
            cli.format,
        ),
        Commands::Table { role } => commands::table::execute(role.map(Into::into), cli.format),
    }
}
