//! 설정 저장소 포트 구현 어댑터.

use std::path::Path;

use anyhow::Result;

use crate::application::config::UnifiedDocument;
use crate::application::ports::ConfigRepository;
use crate::domain::instance::InstanceRequest;

/// TOML 파일 기반 설정 저장소 어댑터.
pub struct TomlConfigRepository;

impl ConfigRepository for TomlConfigRepository {
    fn load(&self, settings: Option<&Path>) -> Result<UnifiedDocument> {
        UnifiedDocument::load(settings)
    }

    fn inspect_pretty_json(&self, request: &InstanceRequest) -> Result<String> {
        UnifiedDocument::inspect_pretty_json(
            request.settings.as_deref(),
            request.instance.as_deref(),
        )
    }
}
