use crate::cli::OutputFormat;
use colored::Colorize;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;
use noscope::{Error, MatchResult, Result};
use std::fs;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

pub const NONE_IN_SCOPE: &str = "None of the provided items are in scope.";

const LOGO: &str = "
┏━┓╋┏┳━━━┳━━━┳━━━┳━━━┳━━━┳━━━┓
┃┃┗┓┃┃┏━┓┃┏━┓┃┏━┓┃┏━┓┃┏━┓┃┏━━┛
┃┏┓┗┛┃┃╋┃┃┗━━┫┃╋┗┫┃╋┃┃┗━┛┃┗━━┓
┃┃┗┓┃┃┃╋┃┣━━┓┃┃╋┏┫┃╋┃┃┏━━┫┏━━┛
┃┃╋┃┃┃┗━┛┃┗━┛┃┗━┛┃┗━┛┃┃╋╋┃┗━━┓
┗┛╋┗━┻━━━┻━━━┻━━━┻━━━┻┛╋╋┗━━━┛";

/*--------------------------------------------------------------------------------------
  Banner
--------------------------------------------------------------------------------------*/

pub fn banner() -> String {
    format!(
        "{}\n\n{}\n{}\n",
        LOGO.green(),
        "💾 https://github.com/arnydo/noscope".yellow(),
        "🐦 https://twitter.com/kyle_parrish_".blue(),
    )
}

/*--------------------------------------------------------------------------------------
  Console Results
--------------------------------------------------------------------------------------*/

pub fn results(results: &[MatchResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table if results.is_empty() => println!("{NONE_IN_SCOPE}"),
        OutputFormat::Table => println!("{}", match_table(results)),
        OutputFormat::Plain if results.is_empty() => println!("{NONE_IN_SCOPE}"),
        OutputFormat::Plain => print!("{}", lines(results)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
    };
    Ok(())
}

/*--------------------------------------------------------------------------------------
  Match Table
--------------------------------------------------------------------------------------*/

pub fn match_table(results: &[MatchResult]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Domain")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("IP").add_attribute(Attribute::Bold).fg(Color::Green),
    ]);

    for result in results {
        table.add_row(vec![
            Cell::new(&result.name).add_attribute(Attribute::Bold),
            Cell::new(result.address_text()),
        ]);
    }

    table
}

/*--------------------------------------------------------------------------------------
  Output File
--------------------------------------------------------------------------------------*/

/// Render the results as `name:ip` lines, one per result.
pub fn lines(results: &[MatchResult]) -> String {
    results
        .iter()
        .map(|result| format!("{result}\n"))
        .collect()
}

/// Save the results to a file as `name:ip` lines.
pub fn save(results: &[MatchResult], path: &Path) -> Result<()> {
    fs::write(path, lines(results))
        .map_err(|error| Error::from(format!("Unable to write {:?}: {}", path, error)))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
