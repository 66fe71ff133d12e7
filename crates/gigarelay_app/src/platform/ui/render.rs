use chrono::{DateTime, Local, Utc};
use gigarelay_core::{AppViewModel, Page, Phase, ResultView, UploadView, PRODUCT_LINE, TELEGRAM_BOT_URL};

const BAR_WIDTH: usize = 30;
const RULE: &str = "----------------------------------------";

/// Lays the whole view out as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let strings = view.strings;
    let mut lines = Vec::new();

    lines.push(nav_line(view));
    lines.push(RULE.to_string());
    match view.page {
        Page::Upload => render_upload(&mut lines, view),
        Page::Proxy => {
            lines.push(strings.proxy_title.to_string());
            lines.push(strings.proxy_sub.to_string());
            lines.push(format!("  URL: {}", view.proxy.input));
            lines.push(button(strings.download, view.proxy.download_enabled));
        }
    }
    lines.push(RULE.to_string());
    lines.push(format!("{PRODUCT_LINE} | {}: {TELEGRAM_BOT_URL}", strings.tg_bot));
    lines
}

fn nav_line(view: &AppViewModel) -> String {
    let strings = view.strings;
    let page = |page: Page, label: &str| {
        if view.page == page {
            format!("[{label}]")
        } else {
            format!(" {label} ")
        }
    };
    let flags: Vec<String> = view
        .languages
        .iter()
        .map(|lang| {
            if lang.active {
                format!("*{}", lang.flag)
            } else {
                lang.flag.to_string()
            }
        })
        .collect();
    format!(
        "{} {}   {}",
        page(Page::Upload, strings.upload),
        page(Page::Proxy, strings.proxy),
        flags.join(" ")
    )
}

fn render_upload(lines: &mut Vec<String>, view: &AppViewModel) {
    let strings = view.strings;
    let upload = &view.upload;
    lines.push(strings.title.to_string());
    lines.push(strings.subtitle.to_string());

    if let Some(result) = &upload.result {
        render_result(lines, view, result);
        return;
    }

    let drop_zone = match &upload.file {
        Some(file) if file.size_label.is_empty() => format!("  {}", file.name),
        Some(file) => format!("  {} ({})", file.name, file.size_label),
        None => format!("  {}", strings.drop_text),
    };
    lines.push(if upload.drag_active {
        format!(">>{}", drop_zone.trim_start())
    } else {
        drop_zone
    });
    if upload.url_field_visible {
        lines.push(format!("  {}: {}", strings.or_paste_url, upload.url_text));
    }
    lines.push(format!("  {}: {}", strings.duration, retention_line(upload)));
    if !upload.reset_available {
        lines.push(button(&upload.submit_label, upload.submit_enabled));
    }
    if let Some(percent) = upload.progress {
        lines.push(format!("  {}", progress_bar(percent)));
    }
    if let Some(error) = &upload.error {
        lines.push(format!("  ! {error}"));
    }
    if upload.retry_available {
        lines.push(action(strings.retry, "retry"));
    }
    if upload.reset_available {
        lines.push(action(strings.upload_another, "another"));
    }

    lines.push(String::new());
    lines.push("API:".to_string());
    for example in &upload.api_examples {
        lines.push(format!("  {example}"));
    }
}

fn render_result(lines: &mut Vec<String>, view: &AppViewModel, result: &ResultView) {
    let strings = view.strings;
    lines.push(format!("  {}", strings.upload_complete));
    for link in &result.links {
        let hint = link.hint.map(|hint| format!(" {hint}")).unwrap_or_default();
        lines.push(format!("  {}{}:", link.label, hint));
        lines.push(format!(
            "    {}  [{} `copy {}`]",
            link.url,
            link.copy_label,
            link.target.label()
        ));
    }
    if let Some(name) = &result.filename {
        lines.push(format!("  {}: {}", strings.file, name));
    }
    if let Some(expires) = result.expires {
        lines.push(format!("  {}: {}", strings.expires, format_expiry(expires)));
    }
    if view.upload.reset_available {
        lines.push(action(strings.upload_another, "another"));
    }
}

fn retention_line(upload: &UploadView) -> String {
    upload
        .retention
        .iter()
        .map(|option| {
            let days = option.value.days();
            if option.selected {
                format!("[{days}]")
            } else {
                days.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("  < {label} >")
    } else {
        format!("  ( {label} )")
    }
}

/// An enabled button with the command that triggers it.
fn action(label: &str, command: &str) -> String {
    format!("{}  `{command}`", button(label, true))
}

/// `[#######.......] 42%`
pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled)
    )
}

/// Calendar date in the local time zone.
pub fn format_expiry(expires: DateTime<Utc>) -> String {
    expires.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

pub fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::Transferring => "transferring",
        Phase::Completed => "completed",
        Phase::Failed => "failed",
    }
}
