use std::sync::{Arc, LazyLock};

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

const CATALOG_FILE: &str = "projects.json";

pub static GLOBAL_CATALOG: LazyLock<Result<Catalog, CatalogError>> = LazyLock::new(|| {
    let catalog = Catalog::load();
    match &catalog {
        Ok(c) => log::debug!(
            "loaded {} project collections ({} projects)",
            c.collections.len(),
            c.project_count()
        ),
        Err(e) => log::error!("couldn't load project catalog: {e}"),
    }
    catalog
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub screenshots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub projects: Vec<Arc<Project>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub collections: Vec<Collection>,
}

#[derive(Deserialize)]
struct RawCatalog {
    collections: Vec<RawCollection>,
}

#[derive(Deserialize)]
struct RawCollection {
    name: String,
    projects: Vec<Project>,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Project catalog {0} is missing")]
    Missing(&'static str),
    #[error("Couldn't parse project catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Project '{title}' has no screenshots")]
    EmptyScreenshots { title: String },
    #[error("Collection '{name}' has no projects")]
    EmptyCollection { name: String },
}

impl Catalog {
    fn load() -> Result<Self, CatalogError> {
        let file = Content::get(CATALOG_FILE).ok_or(CatalogError::Missing(CATALOG_FILE))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_slice(data)?;
        let collections = raw
            .collections
            .into_iter()
            .map(|c| {
                if c.projects.is_empty() {
                    return Err(CatalogError::EmptyCollection { name: c.name });
                }
                if let Some(p) = c.projects.iter().find(|p| p.screenshots.is_empty()) {
                    return Err(CatalogError::EmptyScreenshots {
                        title: p.title.clone(),
                    });
                }
                Ok(Collection {
                    name: c.name,
                    projects: c.projects.into_iter().map(Arc::new).collect(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { collections })
    }

    pub fn project_count(&self) -> usize {
        self.collections.iter().map(|c| c.projects.len()).sum()
    }
}

pub fn catalog() -> Result<&'static Catalog, &'static CatalogError> {
    GLOBAL_CATALOG.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(catalog: &Catalog, title: &str) -> Option<Arc<Project>> {
        catalog
            .collections
            .iter()
            .flat_map(|c| c.projects.iter())
            .find(|p| p.title == title)
            .cloned()
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = catalog().expect("embedded catalog should be valid");
        let names = catalog
            .collections
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Web & Desktop Development", "Web Designing"]);
        assert_eq!(catalog.project_count(), 7);

        let erp = find(catalog, "SMA ERP").expect("SMA ERP should be listed");
        assert_eq!(erp.screenshots.len(), 3);
        assert!(catalog
            .collections
            .iter()
            .flat_map(|c| c.projects.iter())
            .all(|p| !p.screenshots.is_empty()));
    }

    #[test]
    fn test_rejects_project_without_screenshots() {
        let json = br#"{"collections":[{"name":"Dev","projects":[
            {"title":"Empty","description":"nothing to show","screenshots":[]}
        ]}]}"#;
        match Catalog::from_json(json) {
            Err(CatalogError::EmptyScreenshots { title }) => assert_eq!(title, "Empty"),
            other => panic!("expected EmptyScreenshots, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_collection() {
        let json = br#"{"collections":[{"name":"Dev","projects":[]}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::EmptyCollection { name }) if name == "Dev"
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json(b"{\"collections\": 3}"),
            Err(CatalogError::Parse(_))
        ));
    }
}
