use clap::Parser;
use colored::*;
use console::Style;
use marquee::{frame, BorderStyle, FrameOptions};
use std::io::{self, Write};
use vitae::data;
use vitae::error::Result;
use vitae::render;

/// No commands, no flags: running the binary prints the card. Clap still
/// answers `--help`/`--version` and rejects anything else.
#[derive(Parser, Debug)]
#[command(name = "vitae", version)]
#[command(about = "A personal resume card for the terminal", long_about = None)]
struct Cli {}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error displaying resume:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    let resume = data::resume();
    let card = render::render_resume(&resume);
    let boxed = frame(
        &card,
        &FrameOptions {
            padding: 1,
            margin: 1,
            border: BorderStyle::Double,
            border_style: Some(Style::new().cyan()),
        },
    );

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", boxed)?;
    writeln!(
        stdout,
        "{}",
        "🚀 Want to connect? Reach out via LinkedIn or email!"
            .magenta()
            .bold()
    )?;
    writeln!(
        stdout,
        "{}",
        "💡 Tip: Check out my GitHub for more projects and contributions.".dimmed()
    )?;
    writeln!(
        stdout,
        "{}",
        "🎯 Open to exciting opportunities in full-stack development!".cyan()
    )?;
    Ok(())
}
