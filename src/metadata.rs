use crate::projects;
use crate::route::Route;
use crate::site::SITE_TITLE;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PageMetadata {
    pub fn projects_index() -> Self {
        Self {
            title: Some("Projects".to_string()),
            description: Some("My projects".to_string()),
        }
    }

    /// Empty metadata for unknown slugs.
    pub fn project(slug: &str) -> Self {
        let Ok(project) = projects::find_by_slug(slug) else {
            return Self::default();
        };

        Self {
            title: Some(project.title.to_string()),
            description: Some(project.card().display_description().to_string()),
        }
    }

    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Home | Route::NotFound => Self::default(),
            Route::Projects => Self::projects_index(),
            Route::Project { slug } => Self::project(slug),
        }
    }

    pub fn document_title(&self) -> String {
        match self.title.as_deref() {
            Some(title) => format!("{title} | {SITE_TITLE}"),
            None => SITE_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_index_metadata() {
        let metadata = PageMetadata::for_route(&Route::Projects);
        assert_eq!(metadata.title.as_deref(), Some("Projects"));
        assert_eq!(metadata.description.as_deref(), Some("My projects"));
        assert_eq!(metadata.document_title(), format!("Projects | {SITE_TITLE}"));
    }

    #[test]
    fn project_metadata_uses_display_description() {
        let metadata = PageMetadata::project("infinisoft-world");
        assert_eq!(metadata.title.as_deref(), Some("Infinisoft World"));
        assert!(metadata
            .description
            .as_deref()
            .is_some_and(|text| text.starts_with("Technology company")));
    }

    #[test]
    fn unknown_project_has_empty_metadata() {
        let metadata = PageMetadata::project("nope");
        assert_eq!(metadata, PageMetadata::default());
        assert_eq!(metadata.document_title(), SITE_TITLE);
    }
}
