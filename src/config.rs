use std::error;
use std::io::Read;
use std::path::PathBuf;

use derive_more::Display;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Notification,
    Page,
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub kind: PayloadKind,
    pub source: Source,
    pub raw: bool,
}

#[derive(Debug, Display)]
pub enum ConfigError {
    #[display(fmt = "--file is required")]
    MissingFile,
    #[display(fmt = "Unknown payload kind: {}", _0)]
    UnknownKind(String),
    #[display(fmt = "Failed to read payload: {}", _0)]
    Io(std::io::Error),
    #[display(fmt = "Payload is not valid JSON: {}", _0)]
    Json(serde_json::Error),
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::MissingFile | Self::UnknownKind(_) => None,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, ConfigError> {

        fn read_after<'a>(args: &'a [String], key: &str) -> Option<&'a String> {
            args.iter().enumerate().find_map(|(index, label)| {
                if label.eq(key) {
                    args.get(index + 1)
                } else {
                    None
                }
            })
        }

        let kind = match read_after(&args, "--kind").map(String::as_str) {
            None | Some("notification") => PayloadKind::Notification,
            Some("page") => PayloadKind::Page,
            Some("live") => PayloadKind::Live,
            Some(other) => return Err(ConfigError::UnknownKind(other.to_string())),
        };
        // "-" reads the payload from stdin so it can be piped from curl
        let source = match read_after(&args, "--file").ok_or(ConfigError::MissingFile)?.as_str() {
            "-" => Source::Stdin,
            path => Source::File(PathBuf::from(path)),
        };
        let raw = args.iter().any(|arg| arg == "--raw");
        Ok(Config { kind, source, raw })
    }

    pub fn load_payload(&self) -> Result<Value, ConfigError> {
        let text = match &self.source {
            Source::Stdin => {
                let mut text = String::new();
                std::io::stdin().lock().read_to_string(&mut text).map_err(ConfigError::Io)?;
                text
            }
            Source::File(path) => std::fs::read_to_string(path).map_err(ConfigError::Io)?,
        };
        log::debug!(target: "config", "Read {} bytes of payload", text.len());
        serde_json::from_str(&text).map_err(ConfigError::Json)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("weverse-inspect")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn parses_kind_and_file() {
        let config = Config::from_args(args(&["--kind", "live", "--file", "live.json"])).unwrap();
        assert_eq!(config.kind, PayloadKind::Live);
        assert_eq!(config.source, Source::File(PathBuf::from("live.json")));
        assert!(!config.raw);
    }

    #[test]
    fn defaults_to_notification_and_stdin_dash() {
        let config = Config::from_args(args(&["--file", "-", "--raw"])).unwrap();
        assert_eq!(config.kind, PayloadKind::Notification);
        assert_eq!(config.source, Source::Stdin);
        assert!(config.raw);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(Config::from_args(args(&[])), Err(ConfigError::MissingFile)));
        assert!(matches!(
            Config::from_args(args(&["--kind", "moment", "--file", "x"])),
            Err(ConfigError::UnknownKind(kind)) if kind == "moment"
        ));
    }

    #[test]
    fn loads_payload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"activityId": 1}}"#).unwrap();
        let config = Config::from_args(args(&["--file", file.path().to_str().unwrap()])).unwrap();
        let payload = config.load_payload().unwrap();
        assert_eq!(payload["activityId"], 1);
    }

    #[test]
    fn invalid_json_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let config = Config::from_args(args(&["--file", file.path().to_str().unwrap()])).unwrap();
        assert!(matches!(config.load_payload(), Err(ConfigError::Json(_))));
    }
}
