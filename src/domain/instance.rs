//! 백엔드 인스턴스(local/staging/production 등) 값 객체.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 인스턴스 섹션이 반드시 갖춰야 하는 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceField {
    Pipeline,
    Api,
    Token,
}

impl InstanceField {
    /// 오류 보고 순서와 동일한 고정 순서.
    pub const ALL: [InstanceField; 3] = [
        InstanceField::Pipeline,
        InstanceField::Api,
        InstanceField::Token,
    ];

    pub fn key(self) -> &'static str {
        match self {
            InstanceField::Pipeline => "pipeline",
            InstanceField::Api => "api",
            InstanceField::Token => "token",
        }
    }
}

impl fmt::Display for InstanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 설정 파일 한 레이어의 인스턴스 섹션.
///
/// 모든 필드는 "이 레이어에서 지정하지 않음"과 "빈 값으로 지정함"을 구분하기 위해
/// `Option`으로 유지한다. 완전성 검사는 병합 이후 resolve 시점에만 수행한다.
/// 알 수 없는 키는 역직렬화 시 무시된다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstanceSection {
    /// pipeline 서버 URL
    pub pipeline: Option<String>,
    /// dashboard/API 서버 URL
    pub api: Option<String>,
    /// 인증 토큰(민감정보)
    pub token: Option<String>,
}

impl InstanceSection {
    pub fn field(&self, field: InstanceField) -> Option<&str> {
        match field {
            InstanceField::Pipeline => self.pipeline.as_deref(),
            InstanceField::Api => self.api.as_deref(),
            InstanceField::Token => self.token.as_deref(),
        }
    }

    /// 후순위(나중 레이어)에 존재하는 필드만 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: InstanceSection) {
        if other.pipeline.is_some() {
            self.pipeline = other.pipeline;
        }
        if other.api.is_some() {
            self.api = other.api;
        }
        if other.token.is_some() {
            self.token = other.token;
        }
    }

    /// 비어 있거나 누락된 필수 필드를 고정 순서로 모두 반환한다.
    pub fn missing_fields(&self) -> Vec<InstanceField> {
        InstanceField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_none_or(str::is_empty))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// 검증을 통과한 최종 인스턴스 연결 정보. 모든 필드는 비어 있지 않다.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedInstance {
    pub name: String,
    pub pipeline: String,
    pub api: String,
    pub token: String,
}

impl ResolvedInstance {
    pub fn masked_token(&self) -> String {
        mask_secret(&self.token)
    }
}

// 로그/패닉 메시지로 토큰이 새지 않도록 Debug를 직접 구현한다.
impl fmt::Debug for ResolvedInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedInstance")
            .field("name", &self.name)
            .field("pipeline", &self.pipeline)
            .field("api", &self.api)
            .field("token", &self.masked_token())
            .finish()
    }
}

/// 인스턴스 해석 요청(CLI 옵션에서 구성).
#[derive(Debug, Clone, Default)]
pub struct InstanceRequest {
    /// site 레이어 경로 override(`--settings`)
    pub settings: Option<PathBuf>,
    /// 기본 인스턴스 대신 사용할 이름(`--instance`)
    pub instance: Option<String>,
}

/// 토큰 표시용 마스킹. 12자 이상이면 마지막 4자만 노출한다.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() < 12 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}
