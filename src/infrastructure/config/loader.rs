//! 설정 파일 탐색/병합 로더.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::document::{DocumentLoadError, parse_document};
use crate::application::config::{ConfigDocument, UnifiedDocument, merge_layers};

const GLOBAL_CONFIG_PATH: &str = "/etc/kci-dev.toml";
const SITE_CONFIG_PATH: &str = ".kci-dev.toml";

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub document: UnifiedDocument,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 전역 + 사용자 + 사이트(또는 `--settings`) 순으로 레이어 경로를 구성한다.
pub fn config_paths(settings: Option<&Path>) -> Vec<PathBuf> {
    let user = dirs::config_dir().map(|base| base.join("kci-dev").join("kci-dev.toml"));
    layer_paths(PathBuf::from(GLOBAL_CONFIG_PATH), user, settings)
}

/// 레이어 경로를 우선순위 순서로 나열한다.
/// `settings`가 전역/사용자 경로와 같아도 항상 마지막(최고 우선순위) 레이어가 된다.
pub fn layer_paths(
    global: PathBuf,
    user: Option<PathBuf>,
    settings: Option<&Path>,
) -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![global];
    paths.extend(user);

    match settings {
        Some(path) => paths.push(path.to_path_buf()),
        None => paths.push(PathBuf::from(SITE_CONFIG_PATH)),
    }

    dedup_paths(paths)
}

/// 우선순위 경로를 순회해 TOML 설정을 병합한다.
/// 명시적으로 지정한 `settings` 경로가 없으면 오류로 본다.
pub fn load_merged_config(settings: Option<&Path>) -> Result<LoadedConfig, DocumentLoadError> {
    if let Some(path) = settings
        && !path.exists()
    {
        return Err(DocumentLoadError::SettingsNotFound {
            path: path.to_path_buf(),
        });
    }

    load_from_paths(config_paths(settings))
}

/// 주어진 경로 목록(낮은 우선순위부터)을 모두 읽은 뒤 병합한다.
/// 파일 읽기/파싱이 전부 끝난 다음에만 병합을 시작한다.
pub fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig, DocumentLoadError> {
    let mut layers = Vec::with_capacity(paths.len());
    let mut loaded_paths = Vec::new();

    for path in &paths {
        let layer = load_layer(path)?;
        if layer.is_some() {
            debug!(path = %path.display(), "loaded config layer");
            loaded_paths.push(path.clone());
        } else {
            debug!(path = %path.display(), "config layer not found, skipping");
        }
        layers.push(layer);
    }

    if loaded_paths.is_empty() {
        warn!(
            searched = ?paths,
            "no kci-dev config file found; create one with a `default_instance` and an instance table"
        );
    }

    Ok(LoadedConfig {
        document: merge_layers(layers),
        searched_paths: paths,
        loaded_paths,
    })
}

/// 설정 파일 한 개를 읽는다. 파일이 없으면 `Ok(None)`.
pub fn load_layer(path: &Path) -> Result<Option<ConfigDocument>, DocumentLoadError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(DocumentLoadError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    parse_document(&raw, path).map(Some)
}

/// 중복 경로는 마지막(가장 높은 우선순위) 위치만 남긴다.
fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::new();
    for p in paths.into_iter().rev() {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out.reverse();
    out
}
