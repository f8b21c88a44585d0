//! `kci-dev` 바이너리 진입점.

use kci_dev::interface::cli::{Cli, CliAction};
use kci_dev::interface::composition::AppComposition;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = Cli::parse_action();

    let composition = AppComposition::default();

    let result = match action {
        CliAction::InspectConfig(request) => composition
            .inspect_config_usecase()
            .execute(&request)
            .map(|json| println!("{json}")),
        CliAction::ShowInstance {
            request,
            reveal_token,
        } => composition
            .show_instance_usecase()
            .execute(&request, reveal_token),
        CliAction::ListInstances(request) => {
            composition.list_instances_usecase().execute(&request)
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
