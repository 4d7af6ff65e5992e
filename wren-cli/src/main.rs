//! Wren CLI
//!
//! Runs one HTML document through the engine and prints the stages.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use wren_browser::Page;
use wren_common::warning::warning_count;
use wren_css::{
    CssToken, CssTokenizer, DisplayItem, LayoutId, LayoutView, Selector, StyleSheet,
};
use wren_dom::{DomTree, NodeId, get_style_content};
use wren_html::{HtmlTokenizer, print_tree};

/// Wren: print the token stream, DOM, stylesheet, layout tree and display
/// list of an HTML document
#[derive(Parser, Debug)]
#[command(name = "wren")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the DOM tree of a file
    wren ./index.html

    # Parse inline HTML and show its layout
    wren --html '<h1>Test</h1>' --layout

    # Emit the display list as JSON
    wren ./index.html --json
"#)]
struct Cli {
    /// Path to an HTML file
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse an HTML string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Print the HTML token stream
    #[arg(long)]
    tokens: bool,

    /// Print the DOM tree (the default when no other stage is selected)
    #[arg(long)]
    dom: bool,

    /// Print the CSS tokens and parsed rules
    #[arg(long)]
    css: bool,

    /// Print the layout tree with positions and sizes
    #[arg(long)]
    layout: bool,

    /// Print the display list as JSON
    #[arg(long)]
    json: bool,

    /// Also print the display list and a warning summary
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn nothing_selected(&self) -> bool {
        !(self.tokens || self.dom || self.css || self.layout || self.json)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let html = load_source(&cli)?;

    if cli.tokens {
        print_tokens(&html);
    }

    let mut page = Page::new();
    let outcome = page.receive_response(&html).map(|_| ());

    if let Some(window) = page.window() {
        let tree = window.document();
        if cli.dom || cli.nothing_selected() {
            heading("DOM Tree");
            print_tree(tree, tree.root(), 0);
        }
        if cli.css {
            print_css(&get_style_content(tree), page.style());
        }
        if cli.layout
            && let Some(view) = page.layout_view()
        {
            print_layout(view, tree);
        }
    }

    outcome.context("failed to render page")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(page.display_items())?);
    } else if cli.verbose {
        print_display_list(page.display_items());
    }

    if cli.verbose {
        eprintln!("{}", format!("{} distinct warnings", warning_count()).dimmed());
    }
    Ok(())
}

/// Read the document from `--html` or the file argument.
fn load_source(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        Ok(html.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    } else {
        bail!("an HTML file or --html is required")
    }
}

fn heading(title: &str) {
    println!("{}", format!("=== {title} ===").bold());
}

fn print_tokens(html: &str) {
    heading("HTML Tokens");
    for token in HtmlTokenizer::new(html) {
        println!("{token}");
    }
    println!();
}

fn print_css(source: &str, sheet: Option<&StyleSheet>) {
    heading("CSS Tokens");
    let mut tokenizer = CssTokenizer::new(source);
    if let Err(error) = tokenizer.run() {
        println!("{}", error.red());
    }
    let tokens: Vec<String> = tokenizer.tokens().iter().map(CssToken::to_string).collect();
    println!("{}", tokens.join(" "));

    println!();
    heading("Stylesheet");
    let Some(sheet) = sheet else {
        println!("No stylesheet available");
        return;
    };
    println!("{} rules", sheet.rules.len());
    for rule in &sheet.rules {
        let selector = match &rule.selector {
            Selector::TypeSelector(name) => name.clone(),
            Selector::ClassSelector(name) => format!(".{name}"),
            Selector::IdSelector(name) => format!("#{name}"),
            Selector::UnknownSelector => "<unknown>".to_string(),
        };
        println!("{selector} {{");
        for declaration in &rule.declarations {
            println!("  {}: {};", declaration.property, declaration.value);
        }
        println!("}}");
    }
    println!();
}

fn print_layout(view: &LayoutView, tree: &DomTree) {
    heading("Layout Tree");
    match view.root() {
        Some(root) => print_layout_object(view, tree, root, 0),
        None => println!("No layout tree available"),
    }
    println!();
}

/// Recursively print a layout box with its geometry
fn print_layout_object(view: &LayoutView, tree: &DomTree, id: LayoutId, depth: usize) {
    let Some(object) = view.object(id) else {
        return;
    };
    let indent = "  ".repeat(depth);

    let name = describe_node(tree, object.node(), object.text());
    let style = object.style();
    println!(
        "{indent}[{name}] {} color={} background={} font-size={}",
        object.kind(),
        style.color().code(),
        style.background_color().code(),
        style.font_size(),
    );
    let (point, size) = (object.point(), object.size());
    println!(
        "{indent}  x={} y={} w={} h={}",
        point.x, point.y, size.width, size.height
    );

    for child in view.children(id) {
        print_layout_object(view, tree, child, depth + 1);
    }
}

fn describe_node(tree: &DomTree, node: NodeId, text: Option<&str>) -> String {
    if let Some(element) = tree.as_element(node) {
        return format!("<{}>", element.kind);
    }
    let text = text.unwrap_or_default();
    let preview: String = text.chars().take(30).collect();
    let suffix = if text.chars().count() > 30 { "..." } else { "" };
    format!("Text(\"{preview}{suffix}\")")
}

fn print_display_list(items: &[DisplayItem]) {
    heading("Display List");
    for item in items {
        match item {
            DisplayItem::Rect {
                style,
                layout_point,
                layout_size,
            } => println!(
                "Rect x={} y={} w={} h={} {}",
                layout_point.x,
                layout_point.y,
                layout_size.width,
                layout_size.height,
                style.background_color().code(),
            ),
            DisplayItem::Text {
                text,
                style,
                layout_point,
            } => println!(
                "Text x={} y={} {} {:?}",
                layout_point.x,
                layout_point.y,
                style.color().code(),
                text,
            ),
        }
    }
}
