//! Cardex catalog commands
//!
//! Search the loaded catalog by name and show a single card.

use anyhow::{Context, Result};
use clap::Subcommand;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use cardex_core::catalog::{Card, CardId, CatalogIndex};

/// Longest type line shown in the search table
const MAX_TYPE_WIDTH: usize = 40;

#[derive(Subcommand, Debug)]
pub enum CatalogSubcommand {
    /// Search cards by name (case-insensitive substring)
    Search {
        /// Search query; lists every card when omitted
        query: Option<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show detailed information about a card
    Show {
        /// Card id
        id: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
}

impl CatalogSubcommand {
    pub fn execute(self, index: &CatalogIndex) -> Result<()> {
        match self {
            CatalogSubcommand::Search { query, json } => {
                execute_search(index, query.as_deref().unwrap_or(""), json)
            }
            CatalogSubcommand::Show { id, json } => execute_show(index, &id, json),
        }
    }
}

/// Table row for search results
#[derive(Tabled)]
struct SearchResultRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    type_line: String,
}

impl From<&Card> for SearchResultRow {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.to_string(),
            name: card.name.clone(),
            type_line: truncate(&card.type_line, MAX_TYPE_WIDTH),
        }
    }
}

fn execute_search(index: &CatalogIndex, query: &str, json_output: bool) -> Result<()> {
    let results = index.filter(query);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No cards found.");
        return Ok(());
    }

    println!("Found {} card(s):\n", results.len());

    let table_rows: Vec<SearchResultRow> = results.iter().map(SearchResultRow::from).collect();
    let table = Table::new(&table_rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("{table}");
    Ok(())
}

fn execute_show(index: &CatalogIndex, id: &str, json_output: bool) -> Result<()> {
    let card = index
        .get(&CardId::from(id))
        .with_context(|| format!("Card '{id}' not found in catalog"))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&card)?);
        return Ok(());
    }

    print!("{}", render_detail(&card));
    Ok(())
}

/// Detail view of a single card
fn render_detail(card: &Card) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{}\n", card.name));
    out.push_str(&format!("Id:    {}\n", card.id));
    out.push_str(&format!("Type:  {}\n", card.type_line));
    out.push_str(&format!(
        "Image: {}\n",
        card.image_url().unwrap_or("(no image)")
    ));
    out.push('\n');
    out.push_str("Oracle Text:\n");
    for line in card.oracle_text.lines() {
        out.push_str(&format!("  {line}\n"));
    }
    out
}

/// Shorten `text` to at most `max` characters, marking the cut with "..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
