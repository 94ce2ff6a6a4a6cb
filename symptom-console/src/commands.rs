//! Line parser for the interactive console.

use std::path::{Path, PathBuf};

use symptom_view::SelectedFile;

pub const HELP: &str = "\
Commands:
  analyze <symptoms>   run an analysis of the given symptom text
  temp <value>         set the sampling temperature (default 0.7)
  topk <n>             set the retrieval top-k (default 5)
  select <path>        pick a file for indexing (any type)
  drop <path>          drag-drop a file onto the upload area (PDF only)
  index                index the selected file
  history              toggle the history sidebar
  open <index>         open a history entry by its data-index
  clear                clear the whole history (asks for confirmation)
  close                close the history sidebar
  help                 show this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Analyze(String),
    Temperature(f64),
    TopK(u32),
    Select(PathBuf),
    Drop(PathBuf),
    Index,
    History,
    Open(usize),
    Clear,
    Close,
    Help,
    Quit,
    Nothing,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Nothing);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "analyze" => Ok(Command::Analyze(rest.to_string())),
        "temp" => rest
            .parse::<f64>()
            .map(Command::Temperature)
            .map_err(|_| format!("not a number: {rest}")),
        "topk" => rest
            .parse::<u32>()
            .map(Command::TopK)
            .map_err(|_| format!("not a count: {rest}")),
        "select" => require_path(rest, "select").map(Command::Select),
        "drop" => require_path(rest, "drop").map(Command::Drop),
        "index" => Ok(Command::Index),
        "history" => Ok(Command::History),
        "open" => rest
            .parse::<usize>()
            .map(|index| Command::Open(index))
            .map_err(|_| format!("not an index: {rest}")),
        "clear" => Ok(Command::Clear),
        "close" => Ok(Command::Close),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other} (try 'help')")),
    }
}

fn require_path(rest: &str, verb: &str) -> Result<PathBuf, String> {
    if rest.is_empty() {
        Err(format!("usage: {verb} <path>"))
    } else {
        Ok(PathBuf::from(rest))
    }
}

/// Reads a file from disk into the selection slot format, deriving the
/// content type from the extension the way a browser reports it.
pub fn load_file(path: &Path) -> anyhow::Result<SelectedFile> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    let content_type = if is_pdf {
        "application/pdf"
    } else {
        "application/octet-stream"
    };

    Ok(SelectedFile {
        name,
        content_type: content_type.to_string(),
        bytes,
    })
}
