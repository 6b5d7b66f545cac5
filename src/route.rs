use crate::projects::{self, Project};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    Project { slug: String },
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["projects"] => Self::Projects,
            ["projects", slug] => Self::Project {
                slug: (*slug).to_string(),
            },
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> Option<String> {
        match self {
            Self::Home => Some("/".to_string()),
            Self::Projects => Some("/projects".to_string()),
            Self::Project { slug } => Some(format!("/projects/{slug}")),
            Self::NotFound => None,
        }
    }

    /// Every path that can be prerendered: the fixed pages plus one per project.
    pub fn static_paths() -> Vec<String> {
        let fixed = [Self::Home, Self::Projects];
        let per_project = projects::catalog().iter().map(|project: &Project| Self::Project {
            slug: project.slug.to_string(),
        });

        fixed
            .into_iter()
            .chain(per_project)
            .filter_map(|route| route.path())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/projects"), Route::Projects);
        assert_eq!(Route::parse("/projects/"), Route::Projects);
        assert_eq!(
            Route::parse("/projects/infinisoft-world?ref=nav"),
            Route::Project {
                slug: "infinisoft-world".to_string()
            }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/posts"), Route::NotFound);
        assert_eq!(Route::parse("/projects/a/b"), Route::NotFound);
    }

    #[test]
    fn static_paths_cover_every_project() {
        let paths = Route::static_paths();
        assert_eq!(paths.len(), 2 + projects::catalog().len());
        assert!(paths.contains(&"/projects/ai-sdlc-framework".to_string()));
        assert!(paths.iter().all(|path| Route::parse(path) != Route::NotFound));
    }
}
