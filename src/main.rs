//! Flow text demo
//!
//! Wraps the words of a text into a fixed number of columns with the
//! wrapping stack core and prints the result. Blank lines in the input force
//! line breaks.
//!
//! Usage: `flowtext [width] [constant|dynamic|borders] [gap] [leading|center|trailing] < text`

mod terminal;

use std::io::{IsTerminal, Read};

use terminal::{Canvas, PlanLog};
use wrapping_hstack::{HorizontalAlign, Item, Spacing, WrappingHStack};

const DEFAULT_WIDTH: usize = 48;
const DEFAULT_GAP: f64 = 1.0;
const LINE_HEIGHT: f64 = 1.0;

const SAMPLE_TEXT: &str = "WrappingHStack is a layout that works in a very similar way to HStack, \
but automatically positions overflowing elements on next lines.

It can be customized by using alignment, spacing and line spacing.";

/// Command line options, positional and all optional
#[derive(Debug, Clone, Copy)]
struct Options {
    width: usize,
    spacing: Spacing,
    alignment: HorizontalAlign,
}

impl Options {
    fn from_args(args: &[String]) -> Self {
        let width = args
            .first()
            .map(|arg| parse_or(arg, DEFAULT_WIDTH, "width"))
            .unwrap_or(DEFAULT_WIDTH);
        let gap = args
            .get(2)
            .map(|arg| parse_or(arg, DEFAULT_GAP, "gap"))
            .unwrap_or(DEFAULT_GAP);

        let spacing = match args.get(1).map(String::as_str) {
            None | Some("constant") => Spacing::constant(gap),
            Some("dynamic") => Spacing::dynamic(gap),
            Some("borders") => Spacing::dynamic_including_borders(gap),
            Some(other) => {
                log::warn!("unknown spacing '{other}', using constant");
                Spacing::constant(gap)
            }
        };

        let alignment = match args.get(3).map(String::as_str) {
            None | Some("leading") => HorizontalAlign::Leading,
            Some("center") => HorizontalAlign::Center,
            Some("trailing") => HorizontalAlign::Trailing,
            Some(other) => {
                log::warn!("unknown alignment '{other}', using leading");
                HorizontalAlign::Leading
            }
        };

        Self {
            width,
            spacing,
            alignment,
        }
    }
}

fn parse_or<V>(arg: &str, default: V, name: &str) -> V
where
    V: std::str::FromStr + std::fmt::Display + Copy,
{
    arg.parse().unwrap_or_else(|_| {
        log::warn!("invalid {name} '{arg}', using {default}");
        default
    })
}

/// Split text into word items, turning paragraph breaks into line breaks
fn words(text: &str) -> Vec<Item<String>> {
    let mut items = Vec::new();
    for (i, paragraph) in text.split("\n\n").enumerate() {
        if i > 0 {
            items.push(Item::LineBreak);
        }
        items.extend(
            paragraph
                .split_whitespace()
                .map(|word| Item::Renderable(word.to_string())),
        );
    }
    items
}

fn read_input() -> String {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return SAMPLE_TEXT.to_string();
    }

    let mut text = String::new();
    match stdin.read_to_string(&mut text) {
        Ok(_) if !text.trim().is_empty() => text,
        Ok(_) => SAMPLE_TEXT.to_string(),
        Err(err) => {
            log::warn!("failed to read stdin ({err}), using sample text");
            SAMPLE_TEXT.to_string()
        }
    }
}

fn main() {
    // Initialize logger (RUST_LOG=debug for per-line spacer output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = Options::from_args(&args);
    log::info!("Flowing text with {options:?}");

    let mut stack = WrappingHStack::new(words(&read_input()))
        .with_spacing(options.spacing)
        .with_alignment(options.alignment);

    let pass = stack.layout(options.width as f64, |word: &String| word.chars().count() as f64);
    log::info!(
        "✓ {} words on {} lines ({} measurements)",
        pass.plan.lines.iter().map(|line| line.items.len()).sum::<usize>(),
        pass.line_count(),
        pass.measurements
    );

    let mut plan_log = PlanLog::default();
    stack.render(&mut plan_log);
    log::debug!("rendered {} words on {} lines", plan_log.words, plan_log.lines);

    let Some(arrangement) = stack.arrange(|_| LINE_HEIGHT) else {
        return;
    };

    let mut canvas = Canvas::new(options.width);
    canvas.draw(stack.items(), &arrangement);
    for line in canvas.lines() {
        println!("{line}");
    }
}
