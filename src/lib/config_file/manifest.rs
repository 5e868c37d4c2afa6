//! The subset of the `Ballerina.toml` project manifest that the tool reads
use serde::Deserialize;
use std::borrow::Cow;

/// [`BallerinaManifest`] - The project descriptor placed at the root of every Ballerina package
///
/// ```rust
/// use jbal_tools::config_file::manifest::{self, BallerinaManifest};
///
/// const MANIFEST_MOCK: &str = r#"
///     [package]
///     org = "heshan"
///     name = "BalProject"
///     version = "0.1.0"
///     distribution = "2201.9.0"
///
///     [build-options]
///     observabilityIncluded = true
/// "#;
///
/// let manifest: BallerinaManifest = manifest::manifest_from_file(MANIFEST_MOCK)
///     .expect("A failure happened parsing the Ballerina.toml file");
///
/// assert_eq!(manifest.package.name, "BalProject");
/// assert_eq!(manifest.package.org.as_deref(), Some("heshan"));
/// assert_eq!(manifest.package.version.as_deref(), Some("0.1.0"));
/// ```
#[derive(Deserialize, Debug, PartialEq)]
pub struct BallerinaManifest<'a> {
    #[serde(borrow)]
    pub package: PackageAttribute<'a>,
}

/// [`PackageAttribute`] - The `[package]` table of the manifest.
///
/// Only the `name` is mandatory for the purposes of this tool
#[derive(Deserialize, Debug, PartialEq)]
pub struct PackageAttribute<'a> {
    #[serde(borrow)]
    pub name: Cow<'a, str>,
    #[serde(borrow)]
    pub org: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub version: Option<Cow<'a, str>>,
}

pub fn manifest_from_file(raw: &'_ str) -> Result<BallerinaManifest<'_>, toml::de::Error> {
    <BallerinaManifest>::deserialize(&mut toml::Deserializer::new(raw))
}
