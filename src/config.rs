use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOT: &str = ".";
pub const DEFAULT_OUTPUT_FILE: &str = "resources.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub jobs: Vec<Job>,
}

/// One configured run of the lister.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub root: PathBuf,
    pub output_file: PathBuf,
    pub allowed_extensions: Vec<String>,
    pub write_mode: WriteMode,
    pub follow_links: bool,
    pub respect_ignore: bool,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionPreset {
    Images,
    #[default]
    Assets,
}

impl ExtensionPreset {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ExtensionPreset::Images => &["jpg", "png", "gif"],
            ExtensionPreset::Assets => &["jpg", "png", "gif", "mp3", "wav", "ogg"],
        }
    }

    pub fn to_vec(self) -> Vec<String> {
        self.extensions().iter().map(|e| e.to_string()).collect()
    }
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate the target and write in place.
    #[default]
    Direct,
    /// Write a sibling temp file and rename it over the target.
    Atomic,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Direct => write!(f, "direct"),
            WriteMode::Atomic => write!(f, "atomic"),
        }
    }
}

impl Default for Job {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            allowed_extensions: ExtensionPreset::default().to_vec(),
            write_mode: WriteMode::default(),
            follow_links: false,
            respect_ignore: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    jobs: Vec<JobEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JobEntry {
    root: Option<PathBuf>,
    output_file: Option<PathBuf>,
    allowed_extensions: Option<Vec<String>>,
    preset: Option<ExtensionPreset>,
    #[serde(default)]
    write_mode: WriteMode,
    #[serde(default)]
    follow_links: bool,
    #[serde(default)]
    respect_ignore: bool,
}

impl From<JobEntry> for Job {
    fn from(entry: JobEntry) -> Self {
        let explicit = entry
            .allowed_extensions
            .map(normalize_extensions)
            .unwrap_or_default();
        let allowed_extensions = if explicit.is_empty() {
            entry.preset.unwrap_or_default().to_vec()
        } else {
            explicit
        };

        Job {
            root: entry.root.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
            output_file: entry
                .output_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            allowed_extensions,
            write_mode: entry.write_mode,
            follow_links: entry.follow_links,
            respect_ignore: entry.respect_ignore,
        }
    }
}

/// Strips a leading `.` from each extension and drops empty ones.
pub fn normalize_extensions<I, S>(exts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    exts.into_iter()
        .map(|e| e.as_ref().trim().trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

impl Config {
    pub fn single(job: Job) -> Self {
        Self { jobs: vec![job] }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::from_reader(file, path)
    }

    fn from_reader<R: std::io::Read>(reader: R, path: &Path) -> Result<Self> {
        let raw: ConfigFile = serde_yaml::from_reader(reader).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if raw.jobs.is_empty() {
            return Err(Error::EmptyConfig(path.to_path_buf()));
        }

        Ok(Config {
            jobs: raw.jobs.into_iter().map(Job::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<Config> {
        Config::from_reader(yaml.as_bytes(), Path::new("test.yaml"))
    }

    #[test]
    fn test_default_job_uses_assets_preset() {
        let job = Job::default();
        assert_eq!(job.root, PathBuf::from("."));
        assert_eq!(job.output_file, PathBuf::from("resources.json"));
        assert_eq!(
            job.allowed_extensions,
            vec!["jpg", "png", "gif", "mp3", "wav", "ogg"]
        );
        assert_eq!(job.write_mode, WriteMode::Direct);
    }

    #[test]
    fn test_two_jobs_with_preset_and_explicit_list() {
        let config = parse(
            r#"
jobs:
  - output_file: images.json
    preset: images
  - root: assets
    allowed_extensions: [".mp3", "ogg"]
    write_mode: atomic
"#,
        )
        .unwrap();

        assert_eq!(config.jobs.len(), 2);
        assert_eq!(config.jobs[0].root, PathBuf::from("."));
        assert_eq!(config.jobs[0].output_file, PathBuf::from("images.json"));
        assert_eq!(config.jobs[0].allowed_extensions, vec!["jpg", "png", "gif"]);

        assert_eq!(config.jobs[1].root, PathBuf::from("assets"));
        assert_eq!(config.jobs[1].output_file, PathBuf::from("resources.json"));
        assert_eq!(config.jobs[1].allowed_extensions, vec!["mp3", "ogg"]);
        assert_eq!(config.jobs[1].write_mode, WriteMode::Atomic);
    }

    #[test]
    fn test_explicit_list_wins_over_preset() {
        let config = parse(
            r#"
jobs:
  - preset: assets
    allowed_extensions: [png]
"#,
        )
        .unwrap();
        assert_eq!(config.jobs[0].allowed_extensions, vec!["png"]);
    }

    #[test]
    fn test_blank_extension_list_uses_preset() {
        let config = parse(
            r#"
jobs:
  - preset: images
    allowed_extensions: ["", "."]
  - allowed_extensions: []
"#,
        )
        .unwrap();
        assert_eq!(config.jobs[0].allowed_extensions, vec!["jpg", "png", "gif"]);
        assert_eq!(
            config.jobs[1].allowed_extensions,
            vec!["jpg", "png", "gif", "mp3", "wav", "ogg"]
        );
    }

    #[test]
    fn test_empty_jobs_is_an_error() {
        assert!(matches!(parse("jobs: []"), Err(Error::EmptyConfig(_))));
        assert!(matches!(parse("{}"), Err(Error::EmptyConfig(_))));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = parse(
            r#"
jobs:
  - outputfile: typo.json
"#,
        );
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_normalize_extensions() {
        assert_eq!(
            normalize_extensions([".png", "jpg", " gif ", "", "."]),
            vec!["png", "jpg", "gif"]
        );
    }
}
