//! Command-line configuration and catalog resolution.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use storefront_core::Catalog;

/// Storefront - catalog listing desktop shell
#[derive(Parser, Debug)]
#[command(name = "storefront-desktop")]
#[command(about = "Storefront - browse a product catalog")]
pub struct Args {
    /// Catalog JSON file (defaults to <data dir>/storefront/catalog.json,
    /// then to the bundled sample catalog)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Window title
    #[arg(short, long, default_value = "Storefront")]
    pub title: String,
}

/// Where the catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Sample,
}

/// Default catalog location under the platform data directory
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("storefront").join("catalog.json"))
}

/// Load the catalog.
///
/// An explicit path must exist and parse. Without one, the default location
/// is used if a file is there, and the bundled sample otherwise.
pub fn resolve_catalog(
    explicit: Option<&Path>,
    default_path: Option<PathBuf>,
) -> anyhow::Result<(Catalog, CatalogSource)> {
    if let Some(path) = explicit {
        let catalog = Catalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?;
        return Ok((catalog, CatalogSource::File(path.to_path_buf())));
    }

    match default_path {
        Some(path) if path.exists() => {
            let catalog = Catalog::load(&path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?;
            Ok((catalog, CatalogSource::File(path)))
        }
        _ => Ok((Catalog::sample(), CatalogSource::Sample)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["storefront-desktop"]);
        assert!(args.catalog.is_none());
        assert_eq!(args.title, "Storefront");

        let args = Args::parse_from(["storefront-desktop", "-c", "/tmp/c.json", "--title", "Shop"]);
        assert_eq!(args.catalog, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(args.title, "Shop");
    }

    #[test]
    fn falls_back_to_sample() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("catalog.json");

        let (catalog, source) = resolve_catalog(None, Some(missing)).unwrap();
        assert_eq!(source, CatalogSource::Sample);
        assert_eq!(catalog, Catalog::sample());

        let (_, source) = resolve_catalog(None, None).unwrap();
        assert_eq!(source, CatalogSource::Sample);
    }

    #[test]
    fn default_path_is_used_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"[{"title": "Stool", "price": 20}]"#).unwrap();

        let (catalog, source) = resolve_catalog(None, Some(path.clone())).unwrap();
        assert_eq!(source, CatalogSource::File(path));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = resolve_catalog(Some(&missing), None).unwrap_err();
        assert!(err.to_string().contains("failed to load catalog"));
    }

    #[test]
    fn explicit_path_must_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(resolve_catalog(Some(&path), None).is_err());
    }
}
