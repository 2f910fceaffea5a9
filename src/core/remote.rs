// ─── Remote Version Catalog ───
// Fetches the list of published Bedrock versions, newest first.

use serde::Deserialize;

use crate::core::error::{LauncherError, LauncherResult};

const VERSIONS_API: &str = "https://mcbedrock.com/api/versions";

#[derive(Debug, Deserialize)]
struct VersionCatalog {
    #[serde(default)]
    versions: Vec<String>,
}

/// Fetch the published version list and sort it newest-first by numeric
/// dotted components.
pub async fn fetch_available(client: &reqwest::Client) -> LauncherResult<Vec<String>> {
    let response = client.get(VERSIONS_API).send().await?;
    if !response.status().is_success() {
        return Err(LauncherError::CatalogUnavailable(response.status().as_u16()));
    }

    let catalog = response.json::<VersionCatalog>().await?;
    Ok(sorted_newest_first(catalog.versions))
}

fn sorted_newest_first(mut versions: Vec<String>) -> Vec<String> {
    versions.sort_by(|a, b| {
        version_sort_key(b)
            .cmp(&version_sort_key(a))
            .then_with(|| b.cmp(a))
    });
    versions.dedup();
    versions
}

fn version_sort_key(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|part| part.parse::<u64>().unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_numerically_not_lexically() {
        let sorted = sorted_newest_first(vec![
            "1.14.1".into(),
            "1.2.13".into(),
            "1.20".into(),
            "1.20.0.1".into(),
            "1.12.1".into(),
        ]);
        assert_eq!(sorted, ["1.20.0.1", "1.20", "1.14.1", "1.12.1", "1.2.13"]);
    }

    #[test]
    fn shorter_versions_compare_as_zero_padded() {
        let key_short = version_sort_key("1.20");
        let key_long = version_sort_key("1.20.0.1");
        assert!(key_long > key_short);
    }

    #[test]
    fn duplicates_collapse() {
        let sorted = sorted_newest_first(vec!["1.20".into(), "1.20".into(), "1.19".into()]);
        assert_eq!(sorted, ["1.20", "1.19"]);
    }

    #[test]
    fn empty_catalog_is_fine() {
        assert!(sorted_newest_first(Vec::new()).is_empty());
    }
}
