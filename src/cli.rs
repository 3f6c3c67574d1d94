use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use k8s_openapi::api::apps::v1::Deployment;

use crate::{
    components::DeploymentConfig,
    kubernetes::{ImagePullPolicy, NAMESPACE_OPENSHIFT_MACHINE_API},
    manifest::Format,
};

/*
 * ============================================================================
 * Cli
 * ============================================================================
 */
#[allow(clippy::module_name_repetitions)]
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommands,
}

#[must_use]
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[allow(clippy::module_name_repetitions)]
#[derive(Subcommand, Debug)]
pub enum CliCommands {
    /// Deployment
    Deployment(DeploymentArgs),
}

/*
 * ============================================================================
 * Deployment
 * ============================================================================
 */
#[derive(Args, Debug)]
pub struct DeploymentArgs {
    #[command(subcommand)]
    pub command: DeploymentCommands,
}

#[derive(Subcommand, Debug)]
pub enum DeploymentCommands {
    /// Generate
    Generate(DeploymentGenerateArgs),
}

#[derive(Args, Debug)]
pub struct DeploymentGenerateArgs {
    /// Component name, repeat for several components.
    #[arg(long, env = "MRM_OPERATOR_NAME", required = true, value_delimiter = ',')]
    pub name: Vec<String>,

    #[arg(long, env = "MRM_OPERATOR_NAMESPACE", default_value = NAMESPACE_OPENSHIFT_MACHINE_API)]
    pub namespace: String,

    #[arg(long, env = "MRM_OPERATOR_IMAGE_REPOSITORY")]
    pub image_repository: String,

    #[arg(long, env = "MRM_OPERATOR_IMAGE_TAG")]
    pub image_tag: String,

    #[arg(long, env = "MRM_OPERATOR_IMAGE_PULL_POLICY", value_enum, default_value_t = ImagePullPolicy::IfNotPresent)]
    pub image_pull_policy: ImagePullPolicy,

    #[arg(long, env = "MRM_OPERATOR_VERBOSITY", default_value = "2")]
    pub verbosity: String,

    #[arg(long, env = "MRM_OPERATOR_FORMAT", value_enum, default_value_t = Format::Yaml)]
    pub format: Format,

    #[arg(long, env = "MRM_OPERATOR_OUTPUT", value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}

impl DeploymentGenerateArgs {
    #[must_use]
    pub fn configs(&self) -> Vec<DeploymentConfig<'_>> {
        self.name
            .iter()
            .map(|name| DeploymentConfig {
                name: name.as_str(),
                namespace: &self.namespace,
                image_repository: &self.image_repository,
                image_tag: &self.image_tag,
                pull_policy: self.image_pull_policy,
                verbosity: &self.verbosity,
            })
            .collect()
    }

    #[must_use]
    pub fn deployments(&self) -> Vec<Deployment> {
        self.configs()
            .iter()
            .map(DeploymentConfig::to_deployment)
            .collect()
    }
}
