//! kci-dev library root.
//! 설정 레이어 병합/인스턴스 해석 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::instance::{InstanceRequest, ResolvedInstance};
use interface::composition::AppComposition;

/// 라이브러리 직접 호출용 인스턴스 해석 함수.
pub fn resolve_instance(request: &InstanceRequest) -> Result<ResolvedInstance> {
    let composition = AppComposition::default();
    composition.resolve_instance_usecase().execute(request)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json(request: &InstanceRequest) -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute(request)
}
