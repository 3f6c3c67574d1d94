//! Builders for the Deployment that runs one machine remediation component.
//!
//! Each stage is a pure function of its inputs and calls the stage below it
//! once: deployment → pod template → containers → image.

pub mod containers;
pub mod deployment;
pub mod image;
pub mod pod_template;

pub use deployment::{DeploymentConfig, new_deployment};
