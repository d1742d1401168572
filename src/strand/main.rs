use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::path::PathBuf;
use strand::api::StrandApi;
use strand::config::{OutputFormat, StrandConfig};
use strand::error::Result;
use strand::filter::RawFilter;
use strand::model::StringRecord;
use strand::store::fs::FileStore;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod args;
use args::{Cli, Commands};

const VALUE_COL: usize = 34;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(if e.is_client_error() { 1 } else { 2 });
    }
}

struct AppContext {
    api: StrandApi<FileStore>,
    config: StrandConfig,
    data_dir: PathBuf,
    json: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Submit { value } => handle_submit(&ctx, value),
        Commands::Get { value } => handle_get(&ctx, value),
        Commands::List {
            palindrome,
            min_length,
            max_length,
            word_count,
            contains,
        } => handle_list(
            &ctx,
            RawFilter {
                is_palindrome: palindrome,
                min_length,
                max_length,
                word_count,
                contains_character: contains,
            },
        ),
        Commands::Query { text } => handle_query(&ctx, text.join(" ")),
        Commands::Delete { value } => handle_delete(&ctx, value),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "strand", "strand")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".strand")),
    };

    let config = StrandConfig::load(&data_dir).unwrap_or_default();
    let json = cli.json || config.output == OutputFormat::Json;
    let store = FileStore::new(data_dir.clone())?;

    Ok(AppContext {
        api: StrandApi::new(store),
        config,
        data_dir,
        json,
    })
}

fn handle_submit(ctx: &AppContext, value: String) -> Result<()> {
    let record = ctx.api.submit(&value)?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{} {}", "Record created:".green(), short_id(&record.id));
        render_record(&record);
    }
    Ok(())
}

fn handle_get(ctx: &AppContext, value: String) -> Result<()> {
    let record = ctx.api.fetch(&value)?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        render_record(&record);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, raw: RawFilter) -> Result<()> {
    let outcome = ctx.api.list(&raw)?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }
    if !outcome.filter.is_empty() {
        println!(
            "{} {}",
            "Filter:".dimmed(),
            serde_json::to_string(&outcome.filter)?.dimmed()
        );
    }
    render_records(&outcome.records);
    println!("{}", format!("{} record(s)", outcome.count).dimmed());
    Ok(())
}

fn handle_query(ctx: &AppContext, text: String) -> Result<()> {
    let outcome = ctx.api.list_by_text(&text)?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }
    println!(
        "{} {}",
        "Interpreted as:".dimmed(),
        serde_json::to_string(&outcome.filter)?.dimmed()
    );
    render_records(&outcome.records);
    println!("{}", format!("{} record(s)", outcome.count).dimmed());
    Ok(())
}

fn handle_delete(ctx: &AppContext, value: String) -> Result<()> {
    ctx.api.remove(&value)?;
    if ctx.json {
        println!("{}", serde_json::json!({ "deleted": true }));
    } else {
        println!("{}", "Record deleted.".green());
    }
    Ok(())
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key, value) {
        (None, _) => {
            println!("output = {}", ctx.config.get("output")?);
        }
        (Some(key), None) => {
            println!("{}", ctx.config.get(&key)?);
        }
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            println!("{} {key} = {value}", "Updated:".green());
        }
    }
    Ok(())
}

// --- Rendering ---

fn short_id(id: &str) -> &str {
    &id[..10.min(id.len())]
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn one_line(value: &str) -> String {
    value.replace(['\n', '\r', '\t'], " ")
}

fn age_of(record: &StringRecord) -> String {
    let age = (Utc::now() - record.created_at).to_std().unwrap_or_default();
    timeago::Formatter::new().convert(age)
}

fn format_frequency(map: &BTreeMap<char, u64>) -> String {
    map.iter()
        .map(|(ch, n)| {
            if ch.is_whitespace() {
                format!("{ch:?}:{n}")
            } else {
                format!("{ch}:{n}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_record(record: &StringRecord) {
    println!("{}", one_line(&record.value).bold());
    println!("  {:<18} {}", "id", record.id);
    println!("  {:<18} {}", "length", record.properties.length);
    println!(
        "  {:<18} {}",
        "palindrome",
        yes_no(record.properties.is_palindrome)
    );
    println!(
        "  {:<18} {}",
        "unique characters", record.properties.unique_characters
    );
    println!("  {:<18} {}", "word count", record.properties.word_count);
    println!(
        "  {:<18} {}",
        "frequency",
        format_frequency(&record.properties.character_frequency_map)
    );
    println!("  {:<18} {}", "created", age_of(record));
}

fn render_records(records: &[StringRecord]) {
    if records.is_empty() {
        println!("{}", "No records match.".dimmed());
        return;
    }

    println!(
        "{}  {:>5}  {:>5}  {:<5}  {:<10}  {}",
        pad_display("VALUE", VALUE_COL),
        "LEN",
        "WORDS",
        "PALIN",
        "ID",
        "CREATED"
    );
    for record in records {
        let value = clip_display(&one_line(&record.value), VALUE_COL);
        println!(
            "{}  {:>5}  {:>5}  {:<5}  {:<10}  {}",
            pad_display(&value, VALUE_COL),
            record.properties.length,
            record.properties.word_count,
            yes_no(record.properties.is_palindrome),
            short_id(&record.id),
            age_of(record),
        );
    }
}

// Terminal columns, not chars: wide glyphs count double
fn clip_display(value: &str, max: usize) -> String {
    if UnicodeWidthStr::width(value) <= max {
        return value.to_string();
    }
    let mut out = String::new();
    let mut width = 0usize;
    for ch in value.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

fn pad_display(value: &str, width: usize) -> String {
    let mut out = value.to_string();
    for _ in UnicodeWidthStr::width(value)..width {
        out.push(' ');
    }
    out
}
