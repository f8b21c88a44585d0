//! 해석된 인스턴스 정보를 출력하는 유스케이스.

use anyhow::Result;

use crate::application::ports::{ConfigRepository, Reporter};
use crate::application::usecases::resolve_instance::ResolveInstanceUseCase;
use crate::domain::instance::InstanceRequest;

pub struct ShowInstanceUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ShowInstanceUseCase<'a> {
    /// 토큰은 `reveal_token`이 아니면 마스킹해서 출력한다.
    pub fn execute(&self, request: &InstanceRequest, reveal_token: bool) -> Result<()> {
        let resolved = ResolveInstanceUseCase {
            config_repo: self.config_repo,
        }
        .execute(request)?;

        let token = if reveal_token {
            resolved.token.clone()
        } else {
            resolved.masked_token()
        };

        self.reporter.section("Instance");
        self.reporter.kv("name", &resolved.name);
        self.reporter.kv("pipeline", &resolved.pipeline);
        self.reporter.kv("api", &resolved.api);
        self.reporter.kv("token", &token);
        Ok(())
    }
}
