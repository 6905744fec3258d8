use binz::api::{CmdMessage, MessageLevel};
use binz::config::BinzConfig;
use binz::label::Label;
use binz::model::Storage;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const ID_WIDTH: usize = 6;
const TIME_WIDTH: usize = 14;
const COUNT_WIDTH: usize = 10;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_storage_list(storages: &[Storage]) {
    if storages.is_empty() {
        println!("No storages yet. Create one with `binz add <name>`.");
        return;
    }

    for storage in storages {
        let id = format!("{:>width$}. ", storage.id, width = ID_WIDTH);
        let count = format!("{:>width$}", item_count(storage.items.len()), width = COUNT_WIDTH);
        let time_ago = format_time_ago(storage.created_at);

        let title = match storage.location() {
            Some(location) => format!("{}  @ {}", storage.name, location),
            None => storage.name.clone(),
        };

        let fixed = id.width() + COUNT_WIDTH + TIME_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&title, available);
        let padding = available.saturating_sub(title.width());

        println!(
            "{}{}{}  {}{}",
            id.yellow(),
            title,
            " ".repeat(padding),
            count,
            time_ago.dimmed()
        );
    }
}

pub(super) fn print_detail(storage: &Storage) {
    println!("{} {}", storage.id.yellow(), storage.name.bold());
    if let Some(location) = storage.location() {
        println!("@ {}", location);
    }
    println!(
        "{}",
        format!(
            "{}, created {}",
            item_count(storage.items.len()),
            format_time_ago(storage.created_at).trim()
        )
        .dimmed()
    );
    println!("--------------------------------");

    if storage.items.is_empty() {
        println!("Empty. Add something with `binz put <name>`.");
        return;
    }

    for item in &storage.items {
        println!(
            "{} {} x {}",
            format!("{:>width$}.", item.id, width = ID_WIDTH).yellow(),
            item.quantity,
            item.name
        );
        if let Some(description) = item.description() {
            println!("{}  {}", " ".repeat(ID_WIDTH), description.dimmed());
        }
    }
}

pub(super) fn print_label(label: &Label) {
    for line in &label.lines {
        println!("{}", line);
    }
}

pub(super) fn print_config(config: &BinzConfig) {
    println!("id-strategy = {}", config.id_strategy);
    println!("strict-persistence = {}", config.strict_persistence);
    println!("collection-key = {}", config.collection_key);
}

fn item_count(n: usize) -> String {
    match n {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
