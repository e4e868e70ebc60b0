/*!
# Float/HEX Converter

Command-line front end for the `floatcodec` library: converts decimal values
to IEEE 754 hex and back in half, single or double precision, big or little
endian.

## Usage

### Interactive Mode (default)
```bash
floathex
```

### One-shot Conversion
```bash
floathex to-hex 1.0 --mode single --endian big      # 3F800000
floathex to-float 0000803F --endian little         # 1.0
floathex to-float "3C 00" --mode half --json
```
*/

use anyhow::Result;
use clap::{Parser, Subcommand};
use floatcodec::{hex_text, Endianness, Precision, Session};
use std::path::PathBuf;
use tracing::debug;

mod config;
mod interactive;

use config::AppConfig;
use interactive::Console;

#[derive(Parser)]
#[command(name = "floathex")]
#[command(about = "Convert between decimal floats and IEEE 754 hex (half/single/double)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, default_value = "floathex.toml", global = true)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Precision/byte order flags shared by the conversion commands
#[derive(clap::Args)]
struct Selection {
    /// Precision: half, single or double (defaults to the config file)
    #[arg(short, long)]
    mode: Option<Precision>,

    /// Byte order: big or little (defaults to the config file)
    #[arg(short, long)]
    endian: Option<Endianness>,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a decimal value to hex
    ToHex {
        /// Decimal value (empty means 0)
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[command(flatten)]
        selection: Selection,

        /// Separate output bytes with spaces
        #[arg(long)]
        grouped: bool,
    },

    /// Convert hex digits to a decimal value
    ToFloat {
        /// Hex digits, optionally prefixed with 0x
        hex: String,

        #[command(flatten)]
        selection: Selection,
    },

    /// Read commands from stdin (default)
    Interactive {
        /// Initial precision
        #[arg(short, long)]
        mode: Option<Precision>,

        /// Initial byte order
        #[arg(short, long)]
        endian: Option<Endianness>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        config.log_level()?
    };

    // Log to stderr to keep stdout clean for results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    debug!(config = ?config, core_version = floatcodec::VERSION, "configuration loaded");

    match cli.command {
        Some(Commands::ToHex { value, selection, grouped }) => {
            let mut session = open_session(&config, selection.mode, selection.endian);
            println!("{}", render_to_hex(&mut session, &value, selection.json, grouped)?);
            Ok(())
        }

        Some(Commands::ToFloat { hex, selection }) => {
            let mut session = open_session(&config, selection.mode, selection.endian);
            println!("{}", render_to_float(&mut session, &hex, selection.json)?);
            Ok(())
        }

        Some(Commands::Interactive { mode, endian }) => run_interactive(&config, mode, endian),

        None => run_interactive(&config, None, None),
    }
}

/// Build a session from CLI overrides, falling back to the configured defaults
fn open_session(config: &AppConfig, mode: Option<Precision>, endian: Option<Endianness>) -> Session {
    Session::new(
        mode.unwrap_or(config.defaults.mode),
        endian.unwrap_or(config.defaults.endian),
    )
}

/// Encode `value` and format the output line
fn render_to_hex(session: &mut Session, value: &str, json: bool, grouped: bool) -> Result<String> {
    let hex = session.float_to_hex(value)?;
    if json {
        Ok(serde_json::to_string_pretty(&session.report())?)
    } else if grouped {
        Ok(hex_text::group_bytes(&hex))
    } else {
        Ok(hex)
    }
}

/// Decode `hex` and format the output line
fn render_to_float(session: &mut Session, hex: &str, json: bool) -> Result<String> {
    let float = session.hex_to_float(hex)?;
    if json {
        Ok(serde_json::to_string_pretty(&session.report())?)
    } else {
        Ok(float)
    }
}

/// Run the interactive console on stdin/stdout
fn run_interactive(config: &AppConfig, mode: Option<Precision>, endian: Option<Endianness>) -> Result<()> {
    let mut console = Console::new(open_session(config, mode, endian));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console.run(stdin.lock(), stdout.lock())
}
