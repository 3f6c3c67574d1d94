use std::{io::Write, process::ExitCode};

use mrm_operator::{
    Error, Result,
    cli::{CliArgs, CliCommands, DeploymentArgs, DeploymentCommands, DeploymentGenerateArgs, parse},
    manifest,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = &parse();

    let result = match &cli.command {
        CliCommands::Deployment(deployment) => match &deployment.command {
            DeploymentCommands::Generate(generate) => deployment_generate(cli, deployment, generate),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "failed to generate deployments");
            ExitCode::FAILURE
        }
    }
}

fn deployment_generate(
    _cli: &CliArgs,
    _deployment: &DeploymentArgs,
    generate: &DeploymentGenerateArgs,
) -> Result<()> {
    let deployments = generate.deployments();

    if let Some(output) = &generate.output {
        std::fs::create_dir_all(output).map_err(Error::Io)?;
        manifest::write_all(&deployments, generate.format, output)?;
    } else {
        let content = manifest::render_all(&deployments, generate.format)?;
        std::io::stdout()
            .write_all(content.as_bytes())
            .map_err(Error::Io)?;
        tracing::info!(count = deployments.len(), "rendered deployments");
    }

    Ok(())
}
