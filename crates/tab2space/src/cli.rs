use std::path::PathBuf;

use clap::Parser;
use tab2space::{ConvertConfig, Result, TabWidth};

#[derive(Debug, Parser)]
#[command(name = "tab2space", bin_name = "tab2space")]
#[command(version, about = "Replace tabs with spaces, writing each result to a NAME.fixed.EXT copy")]
pub struct Cli {
    /// Flags are only read before the first FILE; later arguments are all file names.
    #[arg(value_name = "FILE", num_args = 1.., trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    #[arg(long, help = "Delete the original file after the converted copy is written")]
    pub delete_old: bool,

    #[arg(
        long,
        value_name = "N",
        default_value_t = 4,
        allow_negative_numbers = true,
        help = "Number of spaces written in place of each tab"
    )]
    pub tab_size: i64,

    #[arg(long, help = "Log each processing step to stderr")]
    pub verbose: bool,
}

impl Cli {
    /// Validate the flags into the configuration used for the whole run.
    pub fn config(&self) -> Result<ConvertConfig> {
        Ok(ConvertConfig {
            tab_width: TabWidth::new(self.tab_size)?,
            delete_old: self.delete_old,
        })
    }
}
