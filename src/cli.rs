// Command-line interface definition.
// Maps flags onto search criteria and the optional output field selector.

use clap::Parser;

use crate::database::Criteria;

/// Search the UMU database.
#[derive(Debug, Parser)]
#[command(
    name = "umu-search",
    version,
    about = "Search the UMU database",
    after_help = "Examples:
  umu-search -t \"Age of Wonders\"
  umu-search -s \"egs\" -c \"blobfish\" --print=\"umu_id\"
  umu-search -u \"umu-397540\" --print=\"title\""
)]
pub struct Cli {
    /// Search by TITLE (e.g., "Age of Wonders")
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Search by STORE (e.g., "gog")
    #[arg(short = 's', long)]
    pub store: Option<String>,

    /// Search by CODENAME (e.g., "blobfish")
    #[arg(short = 'c', long)]
    pub codename: Option<String>,

    /// Search by UMU_ID (e.g., "umu-397540")
    #[arg(short = 'u', long = "umu_id")]
    pub umu_id: Option<String>,

    /// Field to print if exactly one match is found (case-insensitive, e.g., umu_id)
    #[arg(long = "print", value_name = "FIELD")]
    pub print: Option<String>,
}

impl Cli {
    /// True when no search flag or print selector was given.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.store.is_none()
            && self.codename.is_none()
            && self.umu_id.is_none()
            && self.print.is_none()
    }

    pub fn criteria(&self) -> Criteria {
        Criteria {
            title: self.title.clone(),
            store: self.store.clone(),
            codename: self.codename.clone(),
            umu_id: self.umu_id.clone(),
        }
    }
}
