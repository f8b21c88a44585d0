//! 인스턴스 해석 실패 유형.

use thiserror::Error;

use super::instance::InstanceField;

/// 병합된 설정에서 인스턴스를 고를 수 없을 때의 오류. 모두 사용자 설정 수정이 필요하다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("no instance specified: pass --instance <NAME> or set `default_instance` in a config file")]
    NoInstanceSpecified,

    #[error("unknown instance `{name}` (known instances: {})", join_or_none(.known))]
    UnknownInstance { name: String, known: Vec<String> },

    #[error("instance `{name}` is incomplete: missing {}", join_fields(.missing))]
    IncompleteInstance {
        name: String,
        missing: Vec<InstanceField>,
    },
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn join_fields(fields: &[InstanceField]) -> String {
    fields
        .iter()
        .map(|f| format!("`{f}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_every_detail() {
        let unknown = ResolutionError::UnknownInstance {
            name: "prod".into(),
            known: vec!["local".into(), "staging".into()],
        };
        assert_eq!(
            unknown.to_string(),
            "unknown instance `prod` (known instances: local, staging)"
        );

        let incomplete = ResolutionError::IncompleteInstance {
            name: "production".into(),
            missing: vec![InstanceField::Api, InstanceField::Token],
        };
        assert_eq!(
            incomplete.to_string(),
            "instance `production` is incomplete: missing `api`, `token`"
        );
    }

    #[test]
    fn unknown_without_known_names() {
        let err = ResolutionError::UnknownInstance {
            name: "local".into(),
            known: Vec::new(),
        };
        assert!(err.to_string().ends_with("(known instances: none)"));
    }
}
