use clap::{ArgGroup, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use noscope::{read_lines, Result};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "NOSCOPE: scope IP addresses and domains based on defined CIDR ranges.",
    long_about = None
)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(true)
        .args(["domains", "domain_list", "ips", "ip_list"])
))]
pub struct Args {
    /// Domain(s) to look up
    #[arg(short = 'd', long = "domain", num_args = 1.., conflicts_with = "domain_list")]
    pub domains: Option<Vec<String>>,

    /// File containing a list of domains to look up, one per line
    #[arg(short = 'D', long = "domain-list")]
    pub domain_list: Option<PathBuf>,

    /// IP address(es) to check
    #[arg(short = 'i', long = "ip", num_args = 1.., conflicts_with = "ip_list")]
    pub ips: Option<Vec<String>>,

    /// File containing a list of IP addresses to check, one per line
    #[arg(short = 'I', long = "ip-list", alias = "i-list")]
    pub ip_list: Option<PathBuf>,

    /// File containing the list of in-scope CIDR ranges, one per line
    #[arg(short = 's', long = "scope-file")]
    pub scope_file: PathBuf,

    /// Save the in-scope items to a file as `name:ip` lines
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Save the in-scope items to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Console output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

impl Args {
    /// The selected domain input, if any.
    pub fn domain_source(&self) -> Option<InputSource> {
        InputSource::select(&self.domains, &self.domain_list)
    }

    /// The selected IP address input, if any.
    pub fn ip_source(&self) -> Option<InputSource> {
        InputSource::select(&self.ips, &self.ip_list)
    }
}

/*--------------------------------------------------------------------------------------
  Output Format
--------------------------------------------------------------------------------------*/

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Table with Domain and IP columns
    Table,
    /// One `name:ip` line per in-scope item
    Plain,
    /// JSON array of in-scope items
    Json,
}

/*--------------------------------------------------------------------------------------
  Input Source
--------------------------------------------------------------------------------------*/

/// Where a category of candidates comes from: a list given on the command line or a file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputSource {
    List(Vec<String>),
    File(PathBuf),
}

impl InputSource {
    fn select(list: &Option<Vec<String>>, file: &Option<PathBuf>) -> Option<Self> {
        match (list, file) {
            (Some(list), _) => Some(InputSource::List(list.clone())),
            (None, Some(file)) => Some(InputSource::File(file.clone())),
            (None, None) => None,
        }
    }

    /// Read the entries from the source.
    pub fn entries(&self) -> Result<Vec<String>> {
        match self {
            InputSource::List(list) => Ok(list.clone()),
            InputSource::File(path) => read_lines(path),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
