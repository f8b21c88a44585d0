//! 사용자 설정(TOML) 로딩/병합 모듈.
//! 전역/사용자/사이트 경로의 설정을 우선순위대로 병합하고, 실행 진단용 정보를 함께 제공한다.

mod document;
mod inspection;
mod loader;

use std::path::Path;

use anyhow::Result;

pub use document::{DocumentLoadError, parse_document};
pub use inspection::{ConfigInspection, InstanceInspection};
pub use loader::{
    LoadedConfig, config_paths, layer_paths, load_from_paths, load_layer, load_merged_config,
};

use crate::application::config::ConfigDocument;

impl ConfigDocument {
    /// 병합된 최종 설정을 로딩한다.
    pub fn load(settings: Option<&Path>) -> Result<Self> {
        Ok(loader::load_merged_config(settings)?.document)
    }

    /// 디버깅/진단용 설정 정보를 구성한다.
    pub fn inspect(settings: Option<&Path>, requested: Option<&str>) -> Result<ConfigInspection> {
        let loaded = loader::load_merged_config(settings)?;
        Ok(ConfigInspection::from_loaded(loaded, requested))
    }

    /// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
    pub fn inspect_pretty_json(settings: Option<&Path>, requested: Option<&str>) -> Result<String> {
        let inspection = Self::inspect(settings, requested)?;
        Ok(serde_json::to_string_pretty(&inspection)?)
    }
}
