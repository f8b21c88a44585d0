//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;

use crate::application::config::UnifiedDocument;
use crate::domain::instance::InstanceRequest;

/// 설정 레이어 로딩/병합/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    /// 전역/사용자/사이트 레이어를 읽어 병합한 결과를 반환한다.
    /// `settings`가 주어지면 사이트 레이어 경로를 대체한다.
    fn load(&self, settings: Option<&Path>) -> Result<UnifiedDocument>;
    fn inspect_pretty_json(&self, request: &InstanceRequest) -> Result<String>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn raw(&self, line: &str);
}
