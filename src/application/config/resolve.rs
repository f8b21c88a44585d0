//! 병합된 설정에서 실제로 사용할 인스턴스를 선택/검증한다.

use crate::domain::error::ResolutionError;
use crate::domain::instance::{InstanceField, ResolvedInstance};

use super::UnifiedDocument;

/// 실제로 사용할 인스턴스 이름을 결정한다.
/// 비어 있지 않은 `requested`가 파일의 `default_instance`보다 우선한다.
/// 빈 이름은 어느 쪽이든 지정하지 않은 것으로 본다.
pub fn effective_instance_name<'a>(
    unified: &'a UnifiedDocument,
    requested: Option<&'a str>,
) -> Option<&'a str> {
    // CLI 기본값이 빈 문자열로 들어오는 경우도 "지정 안 함"으로 본다.
    requested
        .filter(|name| !name.is_empty())
        .or_else(|| {
            unified
                .default_instance
                .as_deref()
                .filter(|name| !name.is_empty())
        })
}

/// 인스턴스를 선택하고 필수 필드(pipeline/api/token)를 검증한다.
pub fn resolve(
    unified: &UnifiedDocument,
    requested: Option<&str>,
) -> Result<ResolvedInstance, ResolutionError> {
    let name = effective_instance_name(unified, requested)
        .ok_or(ResolutionError::NoInstanceSpecified)?;

    let section = unified
        .instance(name)
        .ok_or_else(|| ResolutionError::UnknownInstance {
            name: name.to_string(),
            known: unified.instance_names(),
        })?;

    let present = |field: InstanceField| {
        section
            .field(field)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    match (
        present(InstanceField::Pipeline),
        present(InstanceField::Api),
        present(InstanceField::Token),
    ) {
        (Some(pipeline), Some(api), Some(token)) => Ok(ResolvedInstance {
            name: name.to_string(),
            pipeline,
            api,
            token,
        }),
        _ => Err(ResolutionError::IncompleteInstance {
            name: name.to_string(),
            missing: section.missing_fields(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{document, section};
    use super::super::merge_layers;
    use super::*;

    #[test]
    fn requested_overrides_default() {
        let unified = document(
            Some("local"),
            &[
                ("local", section(Some("lp"), Some("la"), Some("lt"))),
                ("staging", section(Some("sp"), Some("sa"), Some("st"))),
            ],
        );

        let resolved = resolve(&unified, Some("staging")).unwrap();
        assert_eq!(resolved.name, "staging");
        assert_eq!(resolved.token, "st");
    }

    #[test]
    fn empty_request_falls_back_to_default() {
        let unified = document(
            Some("local"),
            &[("local", section(Some("lp"), Some("la"), Some("lt")))],
        );

        assert_eq!(resolve(&unified, Some("")).unwrap().name, "local");
        assert_eq!(resolve(&unified, None).unwrap().name, "local");
    }

    #[test]
    fn no_name_available() {
        let unified = document(None, &[("local", section(Some("p"), Some("a"), Some("t")))]);

        assert_eq!(
            resolve(&unified, None),
            Err(ResolutionError::NoInstanceSpecified)
        );
        assert_eq!(
            resolve(&unified, Some("")),
            Err(ResolutionError::NoInstanceSpecified)
        );
    }

    #[test]
    fn cleared_default_is_not_an_instance_name() {
        let global = document(
            Some("local"),
            &[("local", section(Some("p"), Some("a"), Some("t")))],
        );
        let site = document(Some(""), &[]);
        let unified = merge_layers([Some(global), Some(site)]);

        assert_eq!(effective_instance_name(&unified, None), None);
        assert_eq!(
            resolve(&unified, None),
            Err(ResolutionError::NoInstanceSpecified)
        );
        assert_eq!(resolve(&unified, Some("local")).unwrap().name, "local");
    }

    #[test]
    fn unknown_instance_lists_known_names() {
        let unified = document(
            Some("prod"),
            &[
                ("staging", section(None, None, None)),
                ("local", section(None, None, None)),
            ],
        );

        assert_eq!(
            resolve(&unified, None),
            Err(ResolutionError::UnknownInstance {
                name: "prod".into(),
                known: vec!["local".into(), "staging".into()],
            })
        );
    }

    #[test]
    fn missing_token_alone_is_reported() {
        let unified = document(None, &[("local", section(Some("p"), Some("a"), None))]);

        assert_eq!(
            resolve(&unified, Some("local")),
            Err(ResolutionError::IncompleteInstance {
                name: "local".into(),
                missing: vec![InstanceField::Token],
            })
        );
    }

    #[test]
    fn explicit_empty_token_counts_as_missing() {
        let user = document(None, &[("local", section(Some("p"), Some("a"), Some("t")))]);
        let site = document(None, &[("local", section(None, None, Some("")))]);
        let unified = merge_layers([Some(user), Some(site)]);

        assert_eq!(
            resolve(&unified, Some("local")),
            Err(ResolutionError::IncompleteInstance {
                name: "local".into(),
                missing: vec![InstanceField::Token],
            })
        );
    }

    #[test]
    fn end_to_end_single_global_layer() {
        let global = document(
            Some("local"),
            &[(
                "local",
                section(
                    Some("https://127.0.0.1"),
                    Some("https://127.0.0.1:8001/"),
                    Some("example"),
                ),
            )],
        );
        let unified = merge_layers([Some(global), None, None]);

        assert_eq!(
            resolve(&unified, None),
            Ok(ResolvedInstance {
                name: "local".into(),
                pipeline: "https://127.0.0.1".into(),
                api: "https://127.0.0.1:8001/".into(),
                token: "example".into(),
            })
        );
    }

    #[test]
    fn end_to_end_incomplete_reports_all_fields() {
        let layer = document(None, &[("production", section(Some("https://x"), None, None))]);
        let unified = merge_layers([Some(layer)]);

        assert_eq!(
            resolve(&unified, Some("production")),
            Err(ResolutionError::IncompleteInstance {
                name: "production".into(),
                missing: vec![InstanceField::Api, InstanceField::Token],
            })
        );
    }
}
