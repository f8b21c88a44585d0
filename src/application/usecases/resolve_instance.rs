//! 요청된(또는 기본) 인스턴스의 연결 정보를 해석하는 유스케이스.

use anyhow::Result;

use crate::application::config::resolve;
use crate::application::ports::ConfigRepository;
use crate::domain::instance::{InstanceRequest, ResolvedInstance};

pub struct ResolveInstanceUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> ResolveInstanceUseCase<'a> {
    /// 레이어를 병합한 뒤 인스턴스를 선택/검증한다.
    pub fn execute(&self, request: &InstanceRequest) -> Result<ResolvedInstance> {
        let unified = self.config_repo.load(request.settings.as_deref())?;
        Ok(resolve(&unified, request.instance.as_deref())?)
    }
}
