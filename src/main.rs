// SPDX-License-Identifier: MIT
//
// glint — command-line front end for the glint crates.
//
//   glint magnitude 74449000 --base 1024      → 71M
//   glint round 123 2 --policy ceil           → 130
//   glint paint --fg error --underline oops
//   glint color c00                            → ESC[38;5;160m (index 160)
//   glint status-demo --steps 50
//
// Settings come from an optional TOML file (`--config`), then flags. Logs go
// to stderr through env_logger; `-v` raises the level, `-q` drops it to
// errors only.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use glint::{Console, Content, Formatter, Options, Rounding};
use glint_term::color::{self, Layer, TermColor};
use glint_units::magnitude::DEFAULT_BASE;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "glint")]
#[command(version)]
#[command(about = "Styled terminal text, status lines and human-readable magnitudes", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress verbose output and the status line
    #[arg(short, long, global = true)]
    quiet: bool,

    /// TOML file with console options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Status line width (defaults to the terminal width)
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Force colored output on
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Force colored output off
    #[arg(long, global = true)]
    no_color: bool,

    /// Builtin style sheet (default, basic)
    #[arg(long, global = true)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format a number with a unit suffix (K, M, G, ...)
    #[command(allow_negative_numbers = true)]
    Magnitude {
        number: f64,
        /// Unit base, usually 1000 or 1024
        #[arg(long, default_value_t = DEFAULT_BASE)]
        base: f64,
    },

    /// Round a number to significant digits
    #[command(allow_negative_numbers = true)]
    Round {
        number: f64,
        digits: u32,
        #[arg(long, value_enum, default_value_t = Policy::Round)]
        policy: Policy,
    },

    /// Print text with styling applied
    Paint {
        /// Foreground color or style alias
        #[arg(long)]
        fg: Option<String>,
        /// Background color or style alias
        #[arg(long)]
        bg: Option<String>,
        #[arg(long)]
        underline: bool,
        #[arg(long)]
        pad_left: Option<usize>,
        #[arg(long)]
        pad_right: Option<usize>,
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Show how a color token or style alias resolves
    Color { token: String },

    /// Drive the status line with a counter
    StatusDemo {
        #[arg(long, default_value_t = 40)]
        steps: u32,
        #[arg(long, default_value_t = 25)]
        delay_ms: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    Round,
    Floor,
    Ceil,
}

impl From<Policy> for Rounding {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Round => Self::Round,
            Policy::Floor => Self::Floor,
            Policy::Ceil => Self::Ceil,
        }
    }
}

impl Cli {
    /// Options from the config file (if any) overlaid with flags.
    fn options(&self) -> Result<Options> {
        let file = match &self.config {
            Some(path) => {
                let src = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Options::from_toml(&src)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => Options::default(),
        };

        let use_color = if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            None
        };

        Ok(file.merge(Options {
            width: self.width,
            use_color,
            quiet: self.quiet.then_some(true),
            theme: self.theme.clone(),
            ..Options::default()
        }))
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    let options = cli.options()?;
    let mut console = Console::stdio(&options).context("invalid style configuration")?;

    match cli.command {
        Command::Magnitude { number, base } => {
            console.display(console.to_magnitude(number, base))?;
        }
        Command::Round {
            number,
            digits,
            policy,
        } => {
            console.display(glint::round_to_precision(number, digits, policy.into()))?;
        }
        Command::Paint {
            fg,
            bg,
            underline,
            pad_left,
            pad_right,
            text,
        } => {
            let formatter = Formatter {
                color: fg,
                background: bg,
                underline,
                pad_left,
                pad_right,
            };
            let span = console.format(&[formatter], vec![Content::from(text.join(" "))]);
            console.display(span)?;
        }
        Command::Color { token } => describe_color(&mut console, &token)?,
        Command::StatusDemo { steps, delay_ms } => {
            status_demo(&mut console, steps, Duration::from_millis(delay_ms))?;
        }
    }

    Ok(())
}

// ─── Subcommands ────────────────────────────────────────────────────────────

fn describe_color<O, E>(console: &mut Console<O, E>, name: &str) -> Result<()>
where
    O: std::io::Write,
    E: std::io::Write,
{
    let token = console.styles().resolve(name).to_owned();
    if token != name {
        console.display(vec![
            Content::from(console.color("dim", "alias")),
            format!(" {name} → {token}").into(),
        ])?;
    }

    let Some(parsed) = TermColor::parse(&token) else {
        console.display_warning(format!("{token:?} is not a color; text renders unstyled"))?;
        return Ok(());
    };

    for layer in [Layer::Foreground, Layer::Background] {
        let start = color::resolve(&token, layer).unwrap_or_default();
        let label = match layer {
            Layer::Foreground => "fg",
            Layer::Background => "bg",
        };
        console.display(vec![
            Content::from(console.pad_right(4, label)),
            format!("{:<16}", start.escape_debug().to_string()).into(),
            match layer {
                Layer::Foreground => console.color(&token, "sample"),
                Layer::Background => console.background_color(&token, "sample"),
            }
            .into(),
        ])?;
    }

    if let TermColor::Indexed(idx) = parsed {
        if let Some((r, g, b)) = color::cube_to_rgb(idx) {
            console.display(format!("index {idx}  rgb({r}, {g}, {b})"))?;
        }
    }
    Ok(())
}

fn status_demo<O, E>(console: &mut Console<O, E>, steps: u32, delay: Duration) -> Result<()>
where
    O: std::io::Write,
    E: std::io::Write,
{
    if !console.is_interactive() {
        console.display_warning("stdout is not a terminal; the status line stays hidden")?;
    }

    let mut bytes = 0f64;
    for step in 1..=steps {
        bytes = bytes.mul_add(1.37, 4096.0);
        let line = vec![
            Content::from(console.color("timestamp", format!("[{step:>4}/{steps}]"))),
            " transferred ".into(),
            console.color("green", console.to_magnitude(bytes, 1024.0)).into(),
            "B".into(),
        ];
        console.status(Some(line.into()))?;
        thread::sleep(delay);
    }
    console.status(None)?;

    console.display_verbose(vec![
        Content::from("done: "),
        console.color("green", console.to_magnitude(bytes, 1024.0)).into(),
        "B".into(),
    ])?;
    Ok(())
}
