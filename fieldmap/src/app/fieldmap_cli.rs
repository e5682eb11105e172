use super::FieldMapAppError;
use clap::{Parser, Subcommand};
use fieldmap_core::recommend::PlayerGrouping;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// command line tool for filtering a player roster and field inventory and
/// recommending the field closest to the selected players
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FieldMapCliArguments {
    /// select the fieldmap operation to run
    #[command(subcommand)]
    pub op: FieldMapOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum FieldMapOperation {
    /// filters players and fields, then prints the field with the smallest
    /// mean distance to the remaining players
    Recommend {
        /// cleaned player roster CSV
        #[arg(short, long = "players")]
        players_file: String,
        /// cleaned field inventory CSV
        #[arg(short, long = "fields")]
        fields_file: String,
        /// TOML or JSON file with player and field criteria. when omitted,
        /// no criteria are selected and nothing is recommended.
        #[arg(short, long = "criteria")]
        criteria_file: Option<String>,
        /// also list the N closest fields
        #[arg(short, long)]
        top: Option<usize>,
    },
    /// filters players and fields, writing the subsets as CSV files
    Filter {
        /// cleaned player roster CSV
        #[arg(short, long = "players")]
        players_file: String,
        /// cleaned field inventory CSV
        #[arg(short, long = "fields")]
        fields_file: String,
        /// TOML or JSON file with player and field criteria
        #[arg(short, long = "criteria")]
        criteria_file: Option<String>,
        /// output directory path, receives players.csv and fields.csv
        #[arg(short, long, default_value_t = String::from("."))]
        output_directory: String,
    },
    /// prints the selectable values for each criterion
    Options {
        /// cleaned player roster CSV
        #[arg(short, long = "players")]
        players_file: String,
        /// cleaned field inventory CSV
        #[arg(short, long = "fields")]
        fields_file: String,
    },
    /// filters players and fields, then recommends a field for each group of
    /// players sharing an attribute value
    Groups {
        /// cleaned player roster CSV
        #[arg(short, long = "players")]
        players_file: String,
        /// cleaned field inventory CSV
        #[arg(short, long = "fields")]
        fields_file: String,
        /// TOML or JSON file with player and field criteria
        #[arg(short, long = "criteria")]
        criteria_file: Option<String>,
        /// player attribute to group by
        #[arg(short, long, value_enum)]
        by: PlayerGrouping,
    },
}

impl FieldMapOperation {
    /// runs the operation, returning the text to print
    pub fn run(&self) -> Result<String, FieldMapAppError> {
        match self {
            FieldMapOperation::Recommend {
                players_file,
                fields_file,
                criteria_file,
                top,
            } => super::recommend::run(
                Path::new(players_file),
                Path::new(fields_file),
                criteria_file.as_ref(),
                *top,
            ),
            FieldMapOperation::Filter {
                players_file,
                fields_file,
                criteria_file,
                output_directory,
            } => super::filter::run(
                Path::new(players_file),
                Path::new(fields_file),
                criteria_file.as_ref(),
                Path::new(output_directory),
            ),
            FieldMapOperation::Options {
                players_file,
                fields_file,
            } => super::options::run(Path::new(players_file), Path::new(fields_file)),
            FieldMapOperation::Groups {
                players_file,
                fields_file,
                criteria_file,
                by,
            } => super::groups::run(
                Path::new(players_file),
                Path::new(fields_file),
                criteria_file.as_ref(),
                *by,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        FieldMapCliArguments::command().debug_assert();
    }

    #[test]
    fn test_parse_groups() {
        let args = FieldMapCliArguments::try_parse_from([
            "fieldmap",
            "groups",
            "--players",
            "p.csv",
            "--fields",
            "f.csv",
            "--by",
            "school",
        ])
        .unwrap_or_else(|e| panic!("{e}"));
        match args.op {
            FieldMapOperation::Groups {
                by, criteria_file, ..
            } => {
                assert_eq!(by, PlayerGrouping::School);
                assert!(criteria_file.is_none());
            }
            _ => panic!("expected groups operation"),
        }
    }
}
