//! Trellis CLI - build validated CSS selectors from the command line
//!
//! Usage:
//!   trellis build <STEP>...                       Build one compound selector
//!   trellis combine <COMPOUND> <COMB> <COMPOUND>  Join compound selectors
//!   trellis kinds                                 Show the canonical component order
//!
//! Examples:
//!   trellis build element=a 'attr=href$=".png"' pseudo-class=focus
//!   trellis combine 'element=table id=data' '~' 'element=tr pseudo-class=nth-of-type(even)'

mod describe;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use trellis_common::warning::set_color;
use trellis_selector::{ComponentKind, Fragment};

use describe::Step;

/// Trellis: fluent, order-checked CSS selector builder
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Element, attribute and pseudo-class
    trellis build element=a 'attr=href$=".png"' pseudo-class=focus

    # Steps out of canonical order are rejected
    trellis build class=a element=div

    # Combine compound selectors (' ', '>', '+', '~' or their names)
    trellis combine 'element=ul' child 'element=li pseudo-class=last-child'

    # Machine-readable output
    trellis --json build id=main class=container
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the resulting fragment as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build one compound selector from kind=value steps
    Build {
        /// Steps such as element=div, id=main, class=x, attr=href,
        /// pseudo-class=hover, pseudo-element=before
        #[arg(value_name = "STEP", required = true)]
        steps: Vec<Step>,
    },

    /// Join compound selectors with combinators
    Combine {
        /// Alternating compound descriptions and combinators
        #[arg(value_name = "COMPOUND|COMBINATOR", num_args = 3.., required = true)]
        parts: Vec<String>,
    },

    /// List component kinds in canonical order
    Kinds,
}

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;
    set_color(color);

    if let Err(err) = run(&cli) {
        if color {
            eprintln!("{} {err:#}", "error:".red().bold());
        } else {
            eprintln!("error: {err:#}");
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Build { steps } => print_fragment(&describe::build(steps)?, cli.json),
        Command::Combine { parts } => print_fragment(&describe::build_complex(parts)?, cli.json),
        Command::Kinds => {
            print_kinds(!cli.no_color);
            Ok(())
        }
    }
}

/// Print a fragment as plain text or JSON
fn print_fragment(fragment: &Fragment, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(fragment)?);
    } else {
        println!("{fragment}");
    }
    Ok(())
}

/// Print the canonical order table
fn print_kinds(color: bool) {
    for kind in ComponentKind::ALL {
        let name = kind.to_string();
        let example = kind.format("x");
        let note = if kind.is_singleton() { "at most once" } else { "repeatable" };
        if color {
            println!(
                "{}  {:<15} {:<6} {}",
                kind.order().cyan(),
                name.bold(),
                example,
                note.dimmed()
            );
        } else {
            println!("{}  {name:<15} {example:<6} {note}", kind.order());
        }
    }
}
