use chrono::NaiveDate;
use clap::Args;

/// Dashboard filters shared by every data command
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long, value_name = "YYYY-MM-DD", help = "Earliest action date (default: first in data)")]
    pub from: Option<NaiveDate>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Latest action date (default: last in data)")]
    pub to: Option<NaiveDate>,

    #[arg(long, help = "Awarding agency, canonical name or synonym ('All' for every agency)")]
    pub agency: Option<String>,

    #[arg(
        long,
        help = "Award size bucket: micro, small, medium, large, major or its label ('All' for every size)"
    )]
    pub size: Option<String>,

    #[arg(
        long = "theme",
        value_name = "THEME",
        help = "Theme label or column; repeat to match any of several themes"
    )]
    pub themes: Vec<String>,
}
