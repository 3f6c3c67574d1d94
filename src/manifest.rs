use std::{
    collections::HashSet,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use k8s_openapi::api::apps::v1::Deployment;

use crate::{Error, Result, kubernetes::Resource};

/*
 * ============================================================================
 * Format
 * ============================================================================
 */
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

/*
 * ============================================================================
 * Render
 * ============================================================================
 */
/// # Errors
///
/// Will return `Err` if the deployment could not be serialized.
pub fn render(deployment: &Deployment, format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(deployment)
            .map(|json| format!("{json}\n"))
            .map_err(Error::Json),
        Format::Yaml => serde_yaml::to_string(deployment).map_err(Error::Yaml),
    }
}

/// Renders deployments as one stream. YAML documents are separated by `---`.
///
/// # Errors
///
/// Will return `Err` if any deployment could not be serialized.
pub fn render_all(deployments: &[Deployment], format: Format) -> Result<String> {
    let documents = deployments
        .iter()
        .map(|deployment| render(deployment, format))
        .collect::<Result<Vec<_>>>()?;

    Ok(match format {
        Format::Json => documents.concat(),
        Format::Yaml => documents.join("---\n"),
    })
}

/*
 * ============================================================================
 * Write
 * ============================================================================
 */
/// Writes each deployment to `<output>/<name>.<extension>`.
///
/// Every file name is checked before anything is written, so a rejected batch
/// leaves `output` untouched.
///
/// # Errors
///
/// Will return `Err` if a deployment has no name, a name is not a plain file
/// name, two deployments share a name, a deployment could not be serialized or
/// a file could not be written.
pub fn write_all(
    deployments: &[Deployment],
    format: Format,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let mut names = HashSet::with_capacity(deployments.len());
    let mut files = Vec::with_capacity(deployments.len());

    for deployment in deployments {
        let name = deployment.try_name()?;
        if !is_file_name(&name) {
            return Err(Error::InvalidFileName(name.to_string()));
        }
        if !names.insert(name.to_string()) {
            return Err(Error::DuplicateFileName(name.to_string()));
        }
        files.push((
            name,
            deployment.try_namespace()?,
            render(deployment, format)?,
        ));
    }

    let mut paths = Vec::with_capacity(files.len());

    for (name, namespace, content) in files {
        let path = output.join(format!("{name}.{}", format.extension()));

        File::create(&path)
            .and_then(|mut file| file.write_all(content.as_bytes()))
            .map_err(Error::Io)?;

        tracing::info!(%name, %namespace, path = %path.display(), "wrote deployment");
        paths.push(path);
    }

    Ok(paths)
}

fn is_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && !name.contains(['/', '\\'])
}
