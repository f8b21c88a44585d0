//! CLI 명령 파싱 모듈.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::instance::InstanceRequest;

#[derive(Debug, Parser)]
#[command(name = "kci-dev")]
#[command(about = "Resolve kci-dev instance settings from layered TOML config files")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Site config file (replaces ./.kci-dev.toml)
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Instance to use instead of `default_instance`
    #[arg(long, global = true, value_name = "NAME")]
    instance: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show searched/loaded config files and the merged instances
    Config,
    /// Show the resolved instance (default when no subcommand is given)
    Instance {
        /// Print the token in clear text
        #[arg(long)]
        show_token: bool,
    },
    /// List merged instances and whether each one is complete
    Instances,
}

#[derive(Debug)]
pub enum CliAction {
    InspectConfig(InstanceRequest),
    ShowInstance {
        request: InstanceRequest,
        reveal_token: bool,
    },
    ListInstances(InstanceRequest),
}

impl Cli {
    /// 잘못된 인자는 clap이 사용법과 함께 출력하고 종료 코드 2로 끝낸다.
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    /// 테스트/임베딩용: 주어진 인자 목록으로 파싱한다.
    pub fn parse_action_from<I, T>(args: I) -> Result<CliAction, String>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args)
            .map(Cli::into_action)
            .map_err(|err| err.to_string())
    }

    fn into_action(self) -> CliAction {
        let request = InstanceRequest {
            settings: self.settings,
            instance: self.instance,
        };

        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig(request),
            Some(Commands::Instances) => CliAction::ListInstances(request),
            Some(Commands::Instance { show_token }) => CliAction::ShowInstance {
                request,
                reveal_token: show_token,
            },
            None => CliAction::ShowInstance {
                request,
                reveal_token: false,
            },
        }
    }
}
