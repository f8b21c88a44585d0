//! 적용 설정 진단(inspection) 뷰 모델.

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use super::loader::LoadedConfig;
use crate::application::config::{effective_instance_name, resolve};
use crate::domain::instance::{InstanceField, InstanceSection, mask_secret};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub default_instance: Option<String>,
    pub requested_instance: Option<String>,
    pub effective_instance: Option<String>,
    /// 현재 요청으로 resolve했을 때의 오류(성공이면 None)
    pub resolution_error: Option<String>,
    pub instances: BTreeMap<String, InstanceInspection>,
    pub ignored_keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstanceInspection {
    pub pipeline: Option<String>,
    pub api: Option<String>,
    /// 마스킹된 토큰
    pub token: Option<String>,
    pub complete: bool,
    pub missing: Vec<InstanceField>,
    /// URL 형식 경고(정보성, resolve 결과에는 영향 없음)
    pub warnings: Vec<String>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig, requested: Option<&str>) -> Self {
        let document = &loaded.document;

        let instances = document
            .instances
            .iter()
            .map(|(name, section)| (name.clone(), InstanceInspection::from_section(section)))
            .collect();

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            default_instance: document.default_instance.clone(),
            requested_instance: requested.map(str::to_string),
            effective_instance: effective_instance_name(document, requested).map(str::to_string),
            resolution_error: resolve(document, requested).err().map(|e| e.to_string()),
            instances,
            ignored_keys: document.extra.keys().cloned().collect(),
        }
    }
}

impl InstanceInspection {
    fn from_section(section: &InstanceSection) -> Self {
        let missing = section.missing_fields();
        let warnings = [InstanceField::Pipeline, InstanceField::Api]
            .into_iter()
            .filter_map(|field| url_warning(field, section.field(field)?))
            .collect();

        Self {
            pipeline: section.pipeline.clone(),
            api: section.api.clone(),
            token: section.token.as_deref().map(mask_secret),
            complete: missing.is_empty(),
            missing,
            warnings,
        }
    }
}

fn url_warning(field: InstanceField, value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => None,
        Ok(url) => Some(format!("{field}: unexpected URL scheme `{}`", url.scheme())),
        Err(err) => Some(format!("{field}: not a valid URL ({err})")),
    }
}
