//! Line commands read from stdin, translated into core messages.
//!
//! These stand in for the pointer gestures of a graphical shell: `file`
//! is the picker, `drop` the drag-and-drop target, `url` the text field.

use std::fs;
use std::path::Path;

use gigarelay_core::{CopyTarget, FileSelection, Msg, Page, RetentionDays};

/// Everything the shell loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    Msg(Msg),
    Help,
    /// Input that could not be turned into a message, with the reason.
    Rejected(String),
    Quit,
    /// Stdin reached end of file.
    InputClosed,
}

pub const HELP: &str = "\
Commands:
  page upload|proxy      switch page
  lang <code>            change language
  file <path>            choose a file
  drop <path>...         drop files (first one is used)
  drag | leave           drag feedback on / off
  url <text>             set the URL field
  remove                 remove the chosen file
  duration <days>        3, 5, 7, 14, 30, 60 or 100
  upload                 start the transfer
  retry                  start again after a failure
  another                upload another (reset)
  copy page|raw|proxy    copy a result link
  proxy <url>            set the proxy download field
  download               open the proxy download
  help | quit";

/// Parses one input line into the events it produces, in order.
pub fn parse_line(line: &str) -> Vec<ShellEvent> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let msg = match command.to_ascii_lowercase().as_str() {
        "" => return Vec::new(),
        "help" | "?" => return vec![ShellEvent::Help],
        "quit" | "exit" => return vec![ShellEvent::Quit],
        "page" => match rest {
            "upload" => Msg::PageSelected(Page::Upload),
            "proxy" => Msg::PageSelected(Page::Proxy),
            other => return rejected(format!("unknown page {other:?}")),
        },
        "lang" => Msg::LocaleSelected(rest.to_string()),
        "file" => match file_selection(Path::new(rest)) {
            Ok(file) => Msg::FilePicked(file),
            Err(reason) => return rejected(reason),
        },
        "drop" => return drop_events(rest),
        "drag" => Msg::DragEntered,
        "leave" => Msg::DragLeft,
        "url" => Msg::UrlInputChanged(rest.to_string()),
        "remove" => Msg::FileRemoved,
        "duration" => match rest.parse().ok().and_then(RetentionDays::from_days) {
            Some(retention) => Msg::RetentionSelected(retention),
            None => return rejected(format!("unsupported duration {rest:?}")),
        },
        "upload" => Msg::UploadClicked,
        "retry" => Msg::RetryClicked,
        "another" | "reset" => Msg::UploadAnotherClicked,
        "copy" => match CopyTarget::from_label(rest) {
            Some(target) => Msg::CopyClicked(target),
            None => return rejected(format!("unknown link {rest:?}")),
        },
        "proxy" => Msg::ProxyInputChanged(rest.to_string()),
        "download" => Msg::ProxyDownloadClicked,
        other => return rejected(format!("unknown command {other:?}; try help")),
    };
    vec![ShellEvent::Msg(msg)]
}

fn rejected(reason: String) -> Vec<ShellEvent> {
    vec![ShellEvent::Rejected(reason)]
}

/// A drop raises the drag flag first, like a pointer entering the target.
/// Paths that cannot be read are skipped.
fn drop_events(rest: &str) -> Vec<ShellEvent> {
    let mut events = vec![ShellEvent::Msg(Msg::DragEntered)];
    let mut files = Vec::new();
    for raw in rest.split_whitespace() {
        match file_selection(Path::new(raw)) {
            Ok(file) => files.push(file),
            Err(reason) => events.push(ShellEvent::Rejected(reason)),
        }
    }
    events.push(ShellEvent::Msg(Msg::FilesDropped(files)));
    events
}

fn file_selection(path: &Path) -> Result<FileSelection, String> {
    if path.as_os_str().is_empty() {
        return Err("missing path".to_string());
    }
    let meta = fs::metadata(path).map_err(|err| format!("{}: {err}", path.display()))?;
    if !meta.is_file() {
        return Err(format!("{} is not a regular file", path.display()));
    }
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(FileSelection {
        path: path.to_path_buf(),
        name,
        size: meta.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn url_keeps_the_rest_of_the_line() {
        assert_eq!(
            parse_line("url   https://example.com/a b.zip "),
            vec![ShellEvent::Msg(Msg::UrlInputChanged(
                "https://example.com/a b.zip".to_string()
            ))]
        );
    }

    #[test]
    fn duration_must_be_a_supported_value() {
        assert_eq!(
            parse_line("duration 7"),
            vec![ShellEvent::Msg(Msg::RetentionSelected(RetentionDays::D7))]
        );
        assert!(matches!(
            parse_line("duration 8").as_slice(),
            [ShellEvent::Rejected(_)]
        ));
    }

    #[test]
    fn file_command_stats_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 2048]).unwrap();
        file.flush().unwrap();

        let events = parse_line(&format!("file {}", file.path().display()));
        match events.as_slice() {
            [ShellEvent::Msg(Msg::FilePicked(selection))] => {
                assert_eq!(selection.size, 2048);
                assert_eq!(selection.path, file.path());
            }
            other => panic!("unexpected events {other:?}"),
        }
    }

    #[test]
    fn directories_are_not_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let events = parse_line(&format!("file {}", dir.path().display()));
        assert!(matches!(events.as_slice(), [ShellEvent::Rejected(_)]));
    }

    #[test]
    fn drop_enters_then_drops_readable_paths() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let events = parse_line(&format!("drop {} /missing/file", file.path().display()));
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], ShellEvent::Msg(Msg::DragEntered));
        assert!(matches!(events[1], ShellEvent::Rejected(_)));
        match &events[2] {
            ShellEvent::Msg(Msg::FilesDropped(files)) => assert_eq!(files.len(), 1),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn blank_lines_produce_nothing() {
        assert!(parse_line("   ").is_empty());
        assert_eq!(parse_line("QUIT"), vec![ShellEvent::Quit]);
        assert_eq!(
            parse_line("copy raw"),
            vec![ShellEvent::Msg(Msg::CopyClicked(CopyTarget::Direct))]
        );
    }
}
