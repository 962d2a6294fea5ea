use catalog_models::Content;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "✓".green(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "success", "message": msg.as_ref() }));
            }
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Errors are shown even in quiet mode
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", "✗".red(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "error", "message": msg.as_ref() }));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{}", msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "info", "message": msg.as_ref() }));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{} {}", "⚠".yellow(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "warning", "message": msg.as_ref() }));
            }
        }
    }

    pub fn heading(&self, msg: impl AsRef<str>) {
        if self.quiet || !self.is_human() {
            return;
        }
        println!("\n{}", msg.as_ref().bold());
    }

    /// Emit a view model: serialized in JSON modes, rendered by the closure in
    /// human mode
    pub fn view<T: Serialize>(&self, view: &T, render: impl FnOnce()) {
        match self.format {
            OutputFormat::Human => {
                if !self.quiet {
                    render();
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                match serde_json::to_value(view) {
                    Ok(value) => self.print_json(&value),
                    Err(e) => self.error(format!("failed to serialize view: {}", e)),
                }
            }
        }
    }

    /// Spinner shown while a simulated fetch is in flight (human mode only)
    pub fn spinner(&self, msg: impl Into<String>) -> Option<ProgressBar> {
        if self.quiet || !self.is_human() {
            return None;
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(msg.into());
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(bar)
    }

    fn print_json(&self, value: &serde_json::Value) {
        let rendered = match self.format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(value),
            _ => serde_json::to_string(value),
        };
        match rendered {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("failed to render JSON output: {}", e),
        }
    }
}

/// Standard table for content listings
pub fn content_table(items: &[Content]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["ID", "Title", "Type", "Year", "Rated", "Genres", "★"]);
    for item in items {
        let genres: Vec<&str> = item.genres.iter().map(|g| g.slug.as_str()).collect();
        table.add_row([
            Cell::new(&item.id),
            Cell::new(&item.title),
            Cell::new(item.content_type),
            Cell::new(item.release_year),
            Cell::new(item.rating),
            Cell::new(genres.join(", ")),
            Cell::new(format!("{:.1}", item.average_rating)),
        ]);
    }
    table
}

/// One-line page summary under a results table
pub fn page_summary(page: u32, total_pages: u32, total_count: usize) -> String {
    format!("page {} of {} ({} titles)", page, total_pages.max(1), total_count)
}
