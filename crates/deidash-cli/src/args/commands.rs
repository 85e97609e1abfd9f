use super::common::FilterArgs;
use crate::types::SortColumn;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a config.toml with default settings")]
    Init {
        #[arg(long, help = "Overwrite an existing config.toml")]
        force: bool,
    },

    #[command(about = "List the filter values available in the dataset")]
    Options,

    #[command(about = "Summary metrics, theme counts, top agencies and monthly timeline")]
    Summary {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, help = "Number of agencies in the top-agency chart")]
        top: Option<usize>,
    },

    #[command(about = "Detailed contract table, sorted and paginated")]
    Table {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, default_value = "date")]
        sort: SortColumn,

        #[arg(long, conflicts_with = "desc", help = "Sort ascending")]
        asc: bool,

        #[arg(long, help = "Sort descending (default)")]
        desc: bool,

        #[arg(long, default_value = "1", help = "1-based page number")]
        page: usize,

        #[arg(long, help = "Rows per page")]
        page_size: Option<usize>,
    },

    #[command(about = "Randomly sampled award narratives")]
    Feed {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, help = "Number of awards to sample")]
        count: Option<usize>,

        #[arg(long, help = "Seed for a repeatable sample")]
        seed: Option<u64>,
    },

    #[command(about = "Write the filtered contracts to a CSV file")]
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short, help = "Destination CSV path")]
        output: PathBuf,
    },

    #[command(about = "Interactive terminal dashboard")]
    Tui {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, help = "Seed for repeatable feed samples")]
        seed: Option<u64>,
    },
}
