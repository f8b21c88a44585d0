//! TOML 설정 파일 한 개를 `ConfigDocument`로 변환한다.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::application::config::ConfigDocument;
use crate::domain::instance::InstanceSection;

const DEFAULT_INSTANCE_KEY: &str = "default_instance";

/// 설정 파일을 읽거나 해석하지 못했을 때의 오류. 항상 문제 파일 경로를 포함한다.
#[derive(Debug, Error)]
pub enum DocumentLoadError {
    #[error("failed to read config at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse TOML in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config in {}: `{key}` must be {expected}", .path.display())]
    Schema {
        path: PathBuf,
        key: String,
        expected: &'static str,
    },

    #[error("invalid instance `{name}` in {}", .path.display())]
    Section {
        path: PathBuf,
        name: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("settings file not found at {}", .path.display())]
    SettingsNotFound { path: PathBuf },
}

impl DocumentLoadError {
    pub fn path(&self) -> &Path {
        match self {
            DocumentLoadError::Read { path, .. }
            | DocumentLoadError::Parse { path, .. }
            | DocumentLoadError::Schema { path, .. }
            | DocumentLoadError::Section { path, .. }
            | DocumentLoadError::SettingsNotFound { path } => path,
        }
    }
}

/// TOML 원문을 파싱한다.
///
/// - `default_instance`: 문자열이어야 한다.
/// - 테이블 값: 인스턴스 섹션으로 해석한다(`pipeline`/`api`/`token`은 문자열).
/// - 그 외 최상위 키: 해석하지 않고 `extra`에 보존한다.
pub fn parse_document(raw: &str, path: &Path) -> Result<ConfigDocument, DocumentLoadError> {
    let table: toml::Table = raw.parse().map_err(|source| DocumentLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut document = ConfigDocument::default();
    for (key, value) in table {
        match value {
            toml::Value::String(name) if key == DEFAULT_INSTANCE_KEY => {
                document.default_instance = Some(name);
            }
            _ if key == DEFAULT_INSTANCE_KEY => {
                return Err(schema_error(path, key, "a string"));
            }
            toml::Value::Table(section) => {
                let section = parse_section(&key, section, path)?;
                document.instances.insert(key, section);
            }
            other => {
                document.extra.insert(key, other);
            }
        }
    }

    Ok(document)
}

fn parse_section(
    name: &str,
    table: toml::Table,
    path: &Path,
) -> Result<InstanceSection, DocumentLoadError> {
    toml::Value::Table(table)
        .try_into::<InstanceSection>()
        .map_err(|source| DocumentLoadError::Section {
            path: path.to_path_buf(),
            name: name.to_string(),
            source,
        })
}

fn schema_error(path: &Path, key: impl Into<String>, expected: &'static str) -> DocumentLoadError {
    DocumentLoadError::Schema {
        path: path.to_path_buf(),
        key: key.into(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<ConfigDocument, DocumentLoadError> {
        parse_document(raw, Path::new("/etc/kci-dev.toml"))
    }

    #[test]
    fn parses_default_and_instances() {
        let doc = parse(
            r#"
default_instance = "local"

[local]
pipeline = "https://127.0.0.1"
api = "https://127.0.0.1:8001/"
token = "example"

[staging]
token = "only-token"
"#,
        )
        .unwrap();

        assert_eq!(doc.default_instance.as_deref(), Some("local"));
        let local = doc.instance("local").unwrap();
        assert_eq!(local.pipeline.as_deref(), Some("https://127.0.0.1"));
        assert_eq!(local.api.as_deref(), Some("https://127.0.0.1:8001/"));
        assert_eq!(local.token.as_deref(), Some("example"));

        let staging = doc.instance("staging").unwrap();
        assert_eq!(staging.pipeline, None);
        assert_eq!(staging.token.as_deref(), Some("only-token"));
    }

    #[test]
    fn empty_file_is_empty_document() {
        assert_eq!(parse("").unwrap(), ConfigDocument::default());
    }

    #[test]
    fn explicit_empty_string_is_kept_as_present() {
        let doc = parse("[local]\ntoken = \"\"\n").unwrap();
        assert_eq!(doc.instance("local").unwrap().token.as_deref(), Some(""));
    }

    #[test]
    fn unrecognized_scalars_are_preserved() {
        let doc = parse("retries = 3\nverbose = true\n").unwrap();
        assert_eq!(doc.extra.get("retries"), Some(&toml::Value::Integer(3)));
        assert_eq!(doc.extra.get("verbose"), Some(&toml::Value::Boolean(true)));
        assert!(doc.instances.is_empty());
    }

    #[test]
    fn malformed_toml_is_parse_error_with_path() {
        let err = parse("[local\npipeline = ").unwrap_err();
        assert!(matches!(err, DocumentLoadError::Parse { .. }));
        assert_eq!(err.path(), Path::new("/etc/kci-dev.toml"));
    }

    #[test]
    fn non_string_default_instance_is_rejected() {
        let err = parse("default_instance = 3\n").unwrap_err();
        match err {
            DocumentLoadError::Schema { key, .. } => assert_eq!(key, "default_instance"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_string_instance_field_is_rejected() {
        let err = parse("[local]\ntoken = 42\n").unwrap_err();
        match &err {
            DocumentLoadError::Section { name, .. } => assert_eq!(name, "local"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "invalid instance `local` in /etc/kci-dev.toml"
        );
    }

    #[test]
    fn unknown_instance_keys_are_ignored() {
        let doc = parse("[local]\ntoken = \"t\"\nlab = \"lab-x\"\n").unwrap();
        assert_eq!(
            doc.instance("local"),
            Some(&InstanceSection {
                pipeline: None,
                api: None,
                token: Some("t".into()),
            })
        );
    }
}
