//! Terminal rendering for weekcal types.
//!
//! Cards are drawn as blocks on their category's background color, grouped
//! under their weekday.

use owo_colors::OwoColorize;
use weekcal_core::board::WeekBoard;
use weekcal_core::card::Card;
use weekcal_core::event::Weekday;
use weekcal_core::form::FormErrors;
use weekcal_core::palette::{NEUTRAL_COLOR, hex_to_rgb};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Cards never get narrower than this
const MIN_CARD_WIDTH: usize = 30;

fn rgb(hex: &str) -> (u8, u8, u8) {
    hex_to_rgb(hex)
        .or_else(|| hex_to_rgb(NEUTRAL_COLOR))
        .unwrap_or((0xf0, 0xf0, 0xf0))
}

/// A two-space block of `hex`, for showing a color next to its value.
pub fn swatch(hex: &str) -> String {
    let (r, g, b) = rgb(hex);
    "  ".on_truecolor(r, g, b).to_string()
}

impl Render for Card {
    fn render(&self) -> String {
        let (r, g, b) = rgb(&self.background);
        let details = self.detail_lines();

        let width = details
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0)
            .max(MIN_CARD_WIDTH);

        let mut lines = Vec::with_capacity(details.len() + 1);
        let title = format!(" {:<width$} ", self.title, width = width);
        lines.push(title.black().bold().on_truecolor(r, g, b).to_string());
        for detail in &details {
            let line = format!(" {:<width$} ", detail, width = width);
            lines.push(line.black().on_truecolor(r, g, b).to_string());
        }

        let tag = format!("#{}", self.id.index());
        lines[0] = format!("{} {}", lines[0], tag.dimmed());
        lines.join("\n")
    }
}

impl Render for WeekBoard {
    fn render(&self) -> String {
        if self.is_empty() {
            return "No events yet".dimmed().to_string();
        }

        let mut sections = Vec::new();
        for weekday in Weekday::ALL {
            let cards = self.column(weekday);
            let heading = capitalize(weekday.as_str());

            if cards.is_empty() {
                sections.push(format!("{}\n  {}", heading.bold(), "(none)".dimmed()));
                continue;
            }

            let mut lines = vec![heading.bold().to_string()];
            for card in cards {
                for line in card.render().lines() {
                    lines.push(format!("  {}", line));
                }
                lines.push(String::new());
            }
            lines.pop();
            sections.push(lines.join("\n"));
        }

        sections.join("\n\n")
    }
}

impl Render for FormErrors {
    fn render(&self) -> String {
        self.iter()
            .map(|e| format!("  {}", e.to_string().red()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
