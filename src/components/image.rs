/// Image coordinate of a component: `<repository>/<name>:<tag>`.
///
/// No normalization is applied, so empty inputs yield coordinates such as `/:`.
#[must_use]
pub fn resolve(name: &str, image_repository: &str, image_tag: &str) -> String {
    format!("{image_repository}/{name}:{image_tag}")
}
