//! Distribution metadata for the `cmipsearch` package.

use serde::Serialize;

const HOMEPAGE: &str = "https://github.com/r4ecology/cmipsearch";
const DOCUMENTATION: &str = "https://cmipsearch.readthedocs.io/en/latest";
const BUG_TRACKER: &str = "https://github.com/r4ecology/cmipsearch/issues";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub authors: Vec<&'static str>,
    /// SPDX license identifier
    pub license: &'static str,
    pub homepage: &'static str,
    pub repository: &'static str,
    pub documentation: &'static str,
    pub bug_tracker: &'static str,
}

/// Metadata of this build, read from the Cargo manifest where possible.
pub fn package_info() -> PackageInfo {
    PackageInfo {
        name: "cmipsearch",
        version: env!("CARGO_PKG_VERSION"),
        description: "Search and download CMIP data",
        authors: env!("CARGO_PKG_AUTHORS")
            .split(':')
            .filter(|a| !a.is_empty())
            .collect(),
        license: env!("CARGO_PKG_LICENSE"),
        homepage: HOMEPAGE,
        repository: HOMEPAGE,
        documentation: DOCUMENTATION,
        bug_tracker: BUG_TRACKER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_info() {
        let info = package_info();
        assert_eq!(info.name, "cmipsearch");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.license, "GPL-3.0-only");
        assert_eq!(info.authors, ["Robert Wilson <rwi@pml.ac.uk>"]);
        assert!(info.bug_tracker.starts_with(info.repository));
    }

    #[test]
    fn test_package_info_serialization() {
        let json = serde_json::to_value(package_info()).unwrap();
        assert_eq!(json["name"], "cmipsearch");
        assert_eq!(json["license"], "GPL-3.0-only");
        assert!(json["authors"].is_array());
    }
}
