//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::list_instances::ListInstancesUseCase;
use crate::application::usecases::resolve_instance::ResolveInstanceUseCase;
use crate::application::usecases::show_instance::ShowInstanceUseCase;
use crate::infrastructure::adapters::{ConsoleReporter, TomlConfigRepository};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: TomlConfigRepository,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: TomlConfigRepository,
            reporter: ConsoleReporter::new(),
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 인스턴스 해석 유스케이스를 생성한다.
    pub fn resolve_instance_usecase(&self) -> ResolveInstanceUseCase<'_> {
        ResolveInstanceUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 인스턴스 출력 유스케이스를 생성한다.
    pub fn show_instance_usecase(&self) -> ShowInstanceUseCase<'_> {
        ShowInstanceUseCase {
            config_repo: &self.config_repo,
            reporter: &self.reporter,
        }
    }

    /// 인스턴스 목록 유스케이스를 생성한다.
    pub fn list_instances_usecase(&self) -> ListInstancesUseCase<'_> {
        ListInstancesUseCase {
            config_repo: &self.config_repo,
            reporter: &self.reporter,
        }
    }
}
