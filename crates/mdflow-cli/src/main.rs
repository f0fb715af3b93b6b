//! mdflow CLI - Render Markdown to HTML fragments and print flows
//!
//! Usage:
//!   mdflow [OPTIONS] [COMMAND] <FILE>
//!
//! Commands:
//!   html      Render an HTML fragment (default)
//!   flow      Render the print flow as JSON
//!   blocks    Show the classified block structure
//!   stats     Show document statistics

use std::env;
use std::fs;
use std::process;

use mdflow_core::{classify, render_document, render_html, Block, Document, ThemeConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    let theme = load_theme(config.theme.as_deref())?;
    let doc = classify(&input);

    match config.command {
        Command::Html => cmd_html(&doc),
        Command::Flow => cmd_flow(&doc, &theme),
        Command::Blocks => cmd_blocks(&doc, &config),
        Command::Stats => cmd_stats(&doc, &input),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    theme: Option<String>,
    format: OutputFormat,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Html,
    Flow,
    Blocks,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Html;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut theme = None;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("mdflow {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "-t" | "--theme" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| format!("{} requires a file argument", arg))?;
                theme = Some(path.clone());
            }
            "html" => command = Command::Html,
            "flow" => command = Command::Flow,
            "blocks" => command = Command::Blocks,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        theme,
        format,
        verbose,
    })
}

fn print_help() {
    eprintln!(
        r#"mdflow - Markdown renderer for web fragments and print flows

USAGE:
    mdflow [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    html        Render an HTML fragment to stdout (default)
    flow        Render the print flow as JSON
    blocks      Show the classified block structure
    stats       Show document statistics

OPTIONS:
    -t, --theme <FILE>    Load print theme overrides from a YAML file
    -v, --verbose         Show detailed block structure
    -j, --json            Output blocks in JSON format
    -h, --help            Print help information
    -V, --version         Print version information

EXAMPLES:
    mdflow notes.md                 Render notes.md as an HTML fragment
    mdflow flow notes.md            Emit the print flow as JSON
    mdflow flow -t dark.yaml notes.md   Print flow under a custom theme
    mdflow blocks -j notes.md       Dump classified blocks as JSON
    mdflow stats notes.md           Show document statistics
"#
    );
}

/// Missing theme file is an error; a missing `--theme` flag means defaults.
fn load_theme(path: Option<&str>) -> Result<ThemeConfig, String> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("failed to read theme '{}': {}", path, e))?;
            serde_yaml::from_str(&text).map_err(|e| format!("invalid theme '{}': {}", path, e))
        }
        None => Ok(ThemeConfig::default()),
    }
}

// =============================================================================
// Html Command
// =============================================================================

fn cmd_html(doc: &Document) -> Result<(), String> {
    println!("{}", render_html(doc));
    Ok(())
}

// =============================================================================
// Flow Command
// =============================================================================

fn cmd_flow(doc: &Document, theme: &ThemeConfig) -> Result<(), String> {
    let items = render_document(doc, theme);
    let json = serde_json::to_string_pretty(&items)
        .map_err(|e| format!("failed to serialize flow: {}", e))?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Blocks Command
// =============================================================================

fn cmd_blocks(doc: &Document, config: &Config) -> Result<(), String> {
    match config.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(doc)
                .map_err(|e| format!("failed to serialize document: {}", e))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Blocks: {}", doc.blocks.len());
            for (i, block) in doc.blocks.iter().enumerate() {
                println!("  [{}] {}", i + 1, describe_block(block));
                if config.verbose {
                    print_block_verbose(block);
                }
            }
        }
    }
    Ok(())
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Title(_) => "Title".to_string(),
        Block::Heading(_) => "Heading".to_string(),
        Block::Subheading(_) => "Subheading".to_string(),
        Block::Subsubheading(_) => "Subsubheading".to_string(),
        Block::Paragraph(_) => "Paragraph".to_string(),
        Block::Quote(_) => "Quote".to_string(),
        Block::CodeBlock(c) => format!(
            "CodeBlock (lang: {})",
            c.lang.as_deref().unwrap_or("none")
        ),
        Block::List(l) => format!("List ({:?}, {} items)", l.kind, l.items.len()),
        Block::Table(t) => format!("Table ({} rows)", t.rows.len()),
        Block::Divider(_) => "Divider".to_string(),
        Block::RawHtml(_) => "RawHtml".to_string(),
    }
}

fn print_block_verbose(block: &Block) {
    const PREFIX: &str = "      ";
    match block {
        Block::Title(b)
        | Block::Heading(b)
        | Block::Subheading(b)
        | Block::Subsubheading(b)
        | Block::Paragraph(b)
        | Block::Quote(b) => {
            println!("{}Text: {}", PREFIX, preview(&b.text));
        }
        Block::CodeBlock(c) => {
            println!("{}Content: {}", PREFIX, preview(&c.content));
        }
        Block::List(l) => {
            for (i, item) in l.items.iter().enumerate() {
                println!("{}Item {}: {}", PREFIX, i + 1, preview(item));
            }
        }
        Block::Table(t) => {
            for (i, row) in t.rows.iter().enumerate() {
                let header_marker = if i == 0 { " (header)" } else { "" };
                let cells: Vec<&str> = row.iter().map(|c| c.as_ref()).collect();
                println!(
                    "{}Row {}{}: {}",
                    PREFIX,
                    i + 1,
                    header_marker,
                    cells.join(" | ")
                );
            }
        }
        Block::RawHtml(raw) => {
            println!("{}Content: {}", PREFIX, preview(&raw.content));
        }
        Block::Divider(_) => {}
    }
}

fn preview(text: &str) -> String {
    let shortened: String = text.chars().take(60).collect();
    let ellipsis = if text.chars().count() > 60 { "..." } else { "" };
    format!("{}{}", shortened.replace('\n', "\\n"), ellipsis)
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(doc: &Document, input: &str) -> Result<(), String> {
    let stats = DocumentStats::from_document(doc, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Content:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Quotes:         {}", stats.quotes);
    println!("  Code blocks:    {}", stats.code_blocks);
    println!("  Diagrams:       {}", stats.diagrams);
    println!("  Lists:          {}", stats.lists);
    println!("  Tables:         {}", stats.tables);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);

    Ok(())
}

struct DocumentStats {
    total_blocks: usize,
    headings: usize,
    paragraphs: usize,
    quotes: usize,
    code_blocks: usize,
    diagrams: usize,
    lists: usize,
    tables: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_document(doc: &Document, input: &str) -> Self {
        let mut stats = Self {
            total_blocks: doc.blocks.len(),
            headings: 0,
            paragraphs: 0,
            quotes: 0,
            code_blocks: 0,
            diagrams: 0,
            lists: 0,
            tables: 0,
            chars: input.len(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
        };

        for block in &doc.blocks {
            match block {
                Block::Title(_)
                | Block::Heading(_)
                | Block::Subheading(_)
                | Block::Subsubheading(_) => stats.headings += 1,
                Block::Paragraph(_) => stats.paragraphs += 1,
                Block::Quote(_) => stats.quotes += 1,
                Block::CodeBlock(c) => {
                    if c.is_diagram() {
                        stats.diagrams += 1;
                    } else {
                        stats.code_blocks += 1;
                    }
                }
                Block::List(_) => stats.lists += 1,
                Block::Table(_) => stats.tables += 1,
                Block::Divider(_) | Block::RawHtml(_) => {}
            }
        }

        stats
    }
}
