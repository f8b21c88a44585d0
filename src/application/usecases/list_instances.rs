//! 병합된 설정에 정의된 인스턴스 목록을 출력하는 유스케이스.

use anyhow::Result;

use crate::application::config::effective_instance_name;
use crate::application::ports::{ConfigRepository, Reporter};
use crate::domain::instance::InstanceRequest;

pub struct ListInstancesUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ListInstancesUseCase<'a> {
    /// 각 인스턴스의 선택 여부와 완전성(누락 필드)을 함께 보여준다.
    pub fn execute(&self, request: &InstanceRequest) -> Result<()> {
        let unified = self.config_repo.load(request.settings.as_deref())?;
        let selected = effective_instance_name(&unified, request.instance.as_deref());

        self.reporter.section("Instances");
        if unified.instances.is_empty() {
            self.reporter.raw("(no instances configured)");
            return Ok(());
        }

        for (name, section) in &unified.instances {
            let marker = if selected == Some(name.as_str()) { "*" } else { " " };
            let missing = section.missing_fields();
            let status = if missing.is_empty() {
                "complete".to_string()
            } else {
                let fields: Vec<&str> = missing.iter().map(|f| f.key()).collect();
                format!("missing {}", fields.join(", "))
            };
            self.reporter.raw(&format!("{marker} {name:<16} {status}"));
        }
        Ok(())
    }
}
