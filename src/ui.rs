use anstyle::{AnsiColor, Style};
use is_terminal::IsTerminal;
use std::fmt::Display;
use std::io::{self, Write};

const STATUS_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Pending,
    Success,
    Info,
    Warn,
    Error,
}

impl StatusKind {
    fn to_stderr(self) -> bool {
        matches!(self, StatusKind::Warn | StatusKind::Error)
    }
}

fn supports_color(stderr: bool) -> bool {
    let is_tty = if stderr {
        io::stderr().is_terminal()
    } else {
        io::stdout().is_terminal()
    };
    is_tty && std::env::var_os("NO_COLOR").is_none()
}

fn style_for(kind: StatusKind) -> Style {
    let style = Style::new().bold();
    match kind {
        StatusKind::Pending => style.fg_color(Some(AnsiColor::Cyan.into())),
        StatusKind::Success => style.fg_color(Some(AnsiColor::Green.into())),
        StatusKind::Info => style.fg_color(Some(AnsiColor::Blue.into())),
        StatusKind::Warn => style.fg_color(Some(AnsiColor::Yellow.into())),
        StatusKind::Error => style.fg_color(Some(AnsiColor::Red.into())),
    }
}

fn format_status(kind: StatusKind, label: &str, message: &str, use_color: bool) -> String {
    let padded_label = if label.is_empty() {
        " ".repeat(STATUS_WIDTH)
    } else {
        format!("{:>width$}", label, width = STATUS_WIDTH)
    };

    let (prefix, suffix) = if use_color {
        let style = style_for(kind);
        (style.render().to_string(), style.render_reset().to_string())
    } else {
        (String::new(), String::new())
    };

    let mut out = String::new();
    for (idx, line) in message.split('\n').enumerate() {
        if idx == 0 {
            out.push_str(&format!("{prefix}{padded_label}{suffix} {line}\n"));
        } else {
            out.push_str(&format!("{:>width$} {line}\n", "", width = STATUS_WIDTH));
        }
    }
    out
}

fn write_status(kind: StatusKind, label: &str, message: &str) {
    let stderr = kind.to_stderr();
    let rendered = format_status(kind, label, message, supports_color(stderr));

    // Output errors (e.g. a closed pipe) are not worth failing the run over.
    if stderr {
        let mut handle = io::stderr().lock();
        let _ = handle.write_all(rendered.as_bytes());
        let _ = handle.flush();
    } else {
        let mut handle = io::stdout().lock();
        let _ = handle.write_all(rendered.as_bytes());
        let _ = handle.flush();
    }
}

pub fn status(label: &str, message: impl Display) {
    write_status(StatusKind::Pending, label, &message.to_string());
}

pub fn info(message: impl Display) {
    write_status(StatusKind::Info, "Info", &message.to_string());
}

pub fn warn(message: impl Display) {
    write_status(StatusKind::Warn, "Warning", &message.to_string());
}

pub fn error(message: impl Display) {
    write_status(StatusKind::Error, "Error", &message.to_string());
}

pub fn success(label: &str, message: impl Display) {
    write_status(StatusKind::Success, label, &message.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status_pads_label() {
        let out = format_status(StatusKind::Success, "Installed", "dw_prs", false);
        assert_eq!(out, "   Installed dw_prs\n");
    }

    #[test]
    fn test_format_status_indents_continuation_lines() {
        let out = format_status(StatusKind::Error, "Error", "first\nsecond", false);
        assert_eq!(out, "       Error first\n             second\n");
    }

    #[test]
    fn test_format_status_with_color_wraps_label() {
        let out = format_status(StatusKind::Info, "Info", "hello", true);
        assert!(out.starts_with("\u{1b}["));
        assert!(out.contains("Info"));
        assert!(out.ends_with(" hello\n"));
    }
}
