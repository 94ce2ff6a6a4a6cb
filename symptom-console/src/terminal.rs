//! Terminal implementation of the view surface. Markup handed to it by the
//! controller is flattened to plain text before printing.

use std::io::Write;

use symptom_view::Surface;

pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn set_welcome_visible(&self, visible: bool) {
        if visible {
            println!("Describe your symptoms to get started.");
        }
    }

    fn set_loading_visible(&self, visible: bool) {
        if visible {
            println!("Analyzing...");
        }
    }

    fn show_results(&self, markup: &str) {
        println!("{}", plain_text(markup));
    }

    fn hide_results(&self) {}

    fn set_analyze_enabled(&self, _enabled: bool) {}

    fn set_query_text(&self, query: &str) {
        println!("query field: {query}");
    }

    fn set_temperature_label(&self, value: f64) {
        println!("temperature = {value}");
    }

    fn set_top_k_label(&self, value: u32) {
        println!("top-k = {value}");
    }

    fn set_upload_label(&self, label: &str) {
        println!("upload area: {label}");
    }

    fn set_upload_hover(&self, _active: bool) {}

    fn reset_file_picker(&self) {}

    fn set_index_enabled(&self, _enabled: bool) {}

    fn set_index_label(&self, label: &str) {
        println!("index control: {label}");
    }

    fn set_history(&self, markup: &str) {
        println!("--- History ---");
        println!("{}", plain_text(markup));
    }

    fn set_sidebar_open(&self, open: bool) {
        println!("history sidebar {}", if open { "opened" } else { "closed" });
    }

    fn confirm(&self, prompt: &str) -> bool {
        // Blocking stdin read; keep it off the async workers.
        tokio::task::block_in_place(|| {
            print!("{prompt} [y/N] ");
            let _ = std::io::stdout().flush();

            let mut reply = String::new();
            if std::io::stdin().read_line(&mut reply).is_err() {
                return false;
            }
            matches!(reply.trim().to_ascii_lowercase().as_str(), "y" | "yes")
        })
    }

    fn mount_toast(&self, _id: &str, markup: &str) {
        println!("{}", plain_text(markup));
    }

    // Printed lines cannot be retracted, so toast teardown is a no-op here.
    fn begin_toast_exit(&self, _id: &str) {}

    fn remove_toast(&self, _id: &str) {}
}

/// Strips tags and decodes the entities the render module emits, leaving
/// readable terminal text.
fn plain_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut chars = markup.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                for inner in chars.by_ref() {
                    if inner == '>' {
                        break;
                    }
                }
            }
            '&' => {
                let mut entity = String::new();
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == ';' {
                        break;
                    }
                    entity.push(next);
                }
                text.push_str(&decode_entity(&entity));
            }
            _ => text.push(ch),
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entity(entity: &str) -> String {
    match entity {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "quot" => "\"".to_string(),
        _ => entity
            .strip_prefix('#')
            .and_then(|digits| digits.parse::<u32>().ok())
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| format!("&{entity};")),
    }
}
