//! 애플리케이션이 사용하는 설정 스키마(순수 데이터)와 레이어 병합 규칙.
//!
//! 주의: 파일 탐색/파싱은 `infrastructure`에서만 수행한다. 이 모듈은 I/O와 로깅을 하지 않는다.

mod resolve;

use std::collections::BTreeMap;

pub use resolve::{effective_instance_name, resolve};

use crate::domain::instance::InstanceSection;

/// 설정 레이어 한 개(전역/사용자/사이트) 또는 병합 결과.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    /// 인스턴스 지정이 없을 때 사용할 기본 인스턴스 이름
    pub default_instance: Option<String>,
    /// 인스턴스 이름별 연결 설정
    pub instances: BTreeMap<String, InstanceSection>,
    /// 해석하지 않는 최상위 스칼라 키(하위 호환을 위해 보존만 한다)
    pub extra: BTreeMap<String, toml::Value>,
}

/// 병합 결과 문서. 레이어와 같은 모양이다.
pub type UnifiedDocument = ConfigDocument;

impl ConfigDocument {
    pub fn instance(&self, name: &str) -> Option<&InstanceSection> {
        self.instances.get(name)
    }

    /// 병합된 인스턴스 이름을 정렬된 순서로 반환한다.
    pub fn instance_names(&self) -> Vec<String> {
        self.instances.keys().cloned().collect()
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    ///
    /// - `default_instance`: 존재하면 통째로 덮어쓴다.
    /// - 인스턴스 섹션: 필드 단위로 덮어쓰고, 없는 필드는 이전 값을 유지한다.
    pub fn merge_from(&mut self, other: ConfigDocument) {
        if other.default_instance.is_some() {
            self.default_instance = other.default_instance;
        }

        for (name, incoming) in other.instances {
            if let Some(existing) = self.instances.get_mut(&name) {
                existing.merge_from(incoming);
            } else {
                self.instances.insert(name, incoming);
            }
        }

        self.extra.extend(other.extra);
    }
}

/// 낮은 우선순위 -> 높은 우선순위 순서의 레이어를 하나로 병합한다.
/// 존재하지 않는 레이어(`None`)는 건너뛰며 이전까지의 병합 상태를 건드리지 않는다.
pub fn merge_layers<I>(layers: I) -> UnifiedDocument
where
    I: IntoIterator<Item = Option<ConfigDocument>>,
{
    let mut merged = ConfigDocument::default();
    for layer in layers.into_iter().flatten() {
        merged.merge_from(layer);
    }
    merged
}
