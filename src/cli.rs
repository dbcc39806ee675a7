use crate::config::{self, Config, ExtensionPreset, Job, WriteMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for resources
    #[arg(short, long, default_value = config::DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Path of the JSON manifest to write
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Allowed file extensions, overriding the preset
    #[arg(short, long = "ext", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Named extension set used when no --ext is given
    #[arg(short, long, value_enum, default_value_t = ExtensionPreset::Assets)]
    pub preset: ExtensionPreset,

    /// YAML file listing one or more jobs; replaces the single-job flags
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write through a temp file and rename it over the output
    #[arg(long, default_value_t = false)]
    pub atomic: bool,

    /// Follow symbolic links while walking
    #[arg(long, default_value_t = false)]
    pub follow_links: bool,

    /// Skip hidden files and honour .gitignore/.ignore files
    #[arg(long, default_value_t = false)]
    pub respect_ignore: bool,

    /// Output results in JSON format
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    /// Builds the single job described by the command-line flags.
    pub fn job(&self) -> Job {
        // `--ext ""` or `--ext .` normalize to nothing; use the preset then.
        let explicit = config::normalize_extensions(&self.extensions);
        let allowed_extensions = if explicit.is_empty() {
            self.preset.to_vec()
        } else {
            explicit
        };

        Job {
            root: self.root.clone(),
            output_file: self.output.clone(),
            allowed_extensions,
            write_mode: if self.atomic {
                WriteMode::Atomic
            } else {
                WriteMode::Direct
            },
            follow_links: self.follow_links,
            respect_ignore: self.respect_ignore,
        }
    }

    pub fn into_config(self) -> crate::error::Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Ok(Config::single(self.job())),
        }
    }
}
