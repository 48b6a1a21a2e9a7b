use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use libodia::{layout, Composer, EditOutcome, KeyAction, OdiaConfig, OdiaRules, Section, Surface};

/// Interactive Odia on-screen keyboard test.
#[derive(Parser)]
#[command(name = "libodia")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delete one scalar per backspace instead of one grapheme cluster.
    #[arg(long)]
    scalar_backspace: bool,
}

fn print_sections(sections: &[Section]) {
    for (si, section) in sections.iter().enumerate() {
        let keys: Vec<String> = section
            .keys
            .iter()
            .enumerate()
            .map(|(ki, key)| format!("{}:{}", ki, key.label))
            .collect();
        println!("  [{}] {:<13} {}", si, section.title, keys.join("  "));
    }
}

fn print_surface(surface: &Surface) {
    let (start, end) = surface.selection();
    let text = surface.text();
    if surface.has_selection() {
        println!("  → {}[{}]{}", &text[..start], &text[start..end], &text[end..]);
    } else {
        println!("  → {}❚{}", &text[..start], &text[start..]);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => OdiaConfig::load_toml(path)?,
        None => OdiaConfig::default(),
    };
    if cli.scalar_backspace {
        config.base.cluster_backspace = false;
    }

    let sections = layout::sections(&config);
    let composer = Composer::with_config(OdiaRules, config.into_base());
    let mut surface = Surface::new();

    println!("═══════════════════════════════════════════════════");
    println!("  libodia - Interactive Odia Keyboard Test");
    println!("═══════════════════════════════════════════════════");
    println!();
    println!("Commands:");
    println!("  keys                 list sections and key indices");
    println!("  press <sec> <key>    press a key, e.g. press 1 0");
    println!("  bs | clear | show    backspace, clear, print surface");
    println!("  quit                 exit");
    println!();
    print_sections(&sections);
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["keys"] => print_sections(&sections),
            ["show"] => print_surface(&surface),
            ["bs"] => {
                if composer.apply(&mut surface, &KeyAction::DeleteBackward)
                    == EditOutcome::Unchanged
                {
                    println!("  (nothing to delete)");
                }
                print_surface(&surface);
            }
            ["clear"] => {
                composer.apply(&mut surface, &KeyAction::Clear);
                print_surface(&surface);
            }
            ["press", sec, key] => {
                let pressed = sec
                    .parse::<usize>()
                    .ok()
                    .and_then(|si| sections.get(si))
                    .and_then(|section| key.parse::<usize>().ok().and_then(|ki| section.keys.get(ki)));
                match pressed {
                    Some(k) => {
                        let outcome = composer.apply(&mut surface, &k.action);
                        if outcome == EditOutcome::Unchanged {
                            println!("  ({} declined)", k.label);
                        }
                        print_surface(&surface);
                    }
                    None => println!("  unknown key; try `keys`"),
                }
            }
            _ => println!("  unknown command; try `keys`, `press <sec> <key>`, `bs`, `clear`"),
        }
    }

    Ok(())
}
