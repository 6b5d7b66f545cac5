use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::media::MediaType;

/// What a project card needs to render. Records are trusted as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub media_src: String,
    pub media_type: MediaType,
    pub href: String,
}

impl ProjectCard {
    /// Short description when there is a non-empty one, else the full text.
    pub fn display_description(&self) -> &str {
        self.short_description
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(&self.description)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub short_description: Option<&'static str>,
    pub media_src: &'static str,
    pub media_type: MediaType,
    pub href: &'static str,
    pub status: Option<&'static str>,
    pub year: Option<u16>,
    pub technologies: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub external_url: Option<&'static str>,
}

impl Project {
    pub fn card(&self) -> ProjectCard {
        ProjectCard {
            title: self.title.to_string(),
            description: self.description.to_string(),
            short_description: self.short_description.map(str::to_string),
            media_src: self.media_src.to_string(),
            media_type: self.media_type,
            href: self.href.to_string(),
        }
    }

    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    pub fn external_link(&self) -> Option<(&'static str, ExternalLinkKind)> {
        self.external_url
            .map(|url| (url, ExternalLinkKind::for_url(url)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalLinkKind {
    SourceCode,
    Website,
}

impl ExternalLinkKind {
    pub fn for_url(url: &str) -> Self {
        if url.contains("github") {
            Self::SourceCode
        } else {
            Self::Website
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Self::SourceCode => "View Code",
            Self::Website => "Visit Site",
        }
    }

    pub fn long_label(self) -> &'static str {
        match self {
            Self::SourceCode => "View Source Code",
            Self::Website => "Visit Website",
        }
    }
}

const PROJECTS: &[Project] = &[
    Project {
        slug: "ai-sdlc-framework",
        title: "AI-SDLC Framework",
        description: "Experimental framework that adapts traditional Software Development Life Cycle (SDLC) principles for human-AI team collaboration, based on ISO 12207 standards.",
        short_description: None,
        media_src: "/project-garden.mp4",
        media_type: MediaType::Video,
        href: "https://github.com/mouimet-infinisoft/AISDLC",
        status: None,
        year: None,
        technologies: &[],
        demo_url: None,
        external_url: Some("https://github.com/mouimet-infinisoft/AISDLC"),
    },
    Project {
        slug: "rqrsda2025-platform",
        title: "RQRSDA2025 Platform",
        description: "Enterprise-grade web application for managing social service operations, built using voice-driven AI-SDLC methodology. Features multi-tenant architecture, workflow automation, and comprehensive case management.",
        short_description: None,
        media_src: "/project-notion.png",
        media_type: MediaType::Image,
        href: "https://github.com/mouimet-infinisoft/rqrsda2025",
        status: None,
        year: None,
        technologies: &[],
        demo_url: None,
        external_url: Some("https://github.com/mouimet-infinisoft/rqrsda2025"),
    },
    Project {
        slug: "infinisoft-world",
        title: "Infinisoft World",
        description: "Technology company delivering enterprise-grade software across finance, healthcare, retail, and transportation sectors. 25-person team specializing in AI and cloud solutions.",
        short_description: None,
        media_src: "/project-pejobs.png",
        media_type: MediaType::Image,
        href: "https://infinisoft.world",
        status: None,
        year: None,
        technologies: &[],
        demo_url: None,
        external_url: Some("https://infinisoft.world"),
    },
];

pub fn catalog() -> &'static [Project] {
    PROJECTS
}

pub fn cards() -> Vec<ProjectCard> {
    PROJECTS.iter().map(Project::card).collect()
}

pub fn find_by_slug(slug: &str) -> Result<&'static Project> {
    PROJECTS
        .iter()
        .find(|project| project.slug == slug)
        .ok_or_else(|| SiteError::UnknownProject(slug.to_string()))
}

pub fn home_page_projects(limit: usize) -> &'static [Project] {
    &PROJECTS[..limit.min(PROJECTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn card_with_short(short_description: Option<&str>) -> ProjectCard {
        ProjectCard {
            short_description: short_description.map(str::to_string),
            ..PROJECTS[0].card()
        }
    }

    #[test]
    fn short_description_wins_when_present() {
        let card = card_with_short(Some("Human-AI SDLC"));
        assert_eq!(card.display_description(), "Human-AI SDLC");
    }

    #[test]
    fn missing_or_blank_short_description_falls_back() {
        let card = card_with_short(None);
        assert_eq!(card.display_description(), PROJECTS[0].description);

        let card = card_with_short(Some(""));
        assert_eq!(card.display_description(), PROJECTS[0].description);
    }

    #[test]
    fn slugs_are_unique_and_resolvable() {
        let slugs: HashSet<_> = catalog().iter().map(|project| project.slug).collect();
        assert_eq!(slugs.len(), catalog().len());

        for project in catalog() {
            assert_eq!(find_by_slug(project.slug).map(|found| found.title), Ok(project.title));
        }
    }

    #[test]
    fn unknown_slug_is_an_error() {
        assert_eq!(
            find_by_slug("missing"),
            Err(SiteError::UnknownProject("missing".to_string()))
        );
    }

    #[test]
    fn home_page_projects_is_a_prefix() {
        assert_eq!(home_page_projects(2).len(), 2);
        assert_eq!(home_page_projects(2)[0].slug, "ai-sdlc-framework");
        assert_eq!(home_page_projects(99).len(), catalog().len());
        assert!(home_page_projects(0).is_empty());
    }

    #[test]
    fn cards_keep_catalog_order() {
        let titles: Vec<_> = cards().into_iter().map(|card| card.title).collect();
        assert_eq!(
            titles,
            ["AI-SDLC Framework", "RQRSDA2025 Platform", "Infinisoft World"]
        );
    }

    #[test]
    fn detail_path_is_a_project_route() {
        for project in catalog() {
            assert_eq!(
                crate::route::Route::parse(&project.detail_path()),
                crate::route::Route::Project {
                    slug: project.slug.to_string()
                }
            );
        }
    }

    #[test]
    fn catalog_only_carries_published_fields() {
        assert!(catalog()
            .iter()
            .all(|project| project.status.is_none() && project.year.is_none()));
    }

    #[test]
    fn external_link_label_depends_on_host() {
        let (_, kind) = PROJECTS[0].external_link().expect("github link");
        assert_eq!(kind.short_label(), "View Code");

        let (_, kind) = PROJECTS[2].external_link().expect("site link");
        assert_eq!(kind.long_label(), "Visit Website");
    }

    #[test]
    fn card_deserializes_from_camel_case() {
        let json = r#"{
            "title": "Garden",
            "description": "A garden",
            "mediaSrc": "/project-garden.mp4",
            "mediaType": "video",
            "href": "/projects/garden"
        }"#;

        let card: ProjectCard = serde_json::from_str(json).expect("valid card");
        assert_eq!(card.media_type, MediaType::Video);
        assert_eq!(card.short_description, None);
        assert_eq!(card.display_description(), "A garden");
    }
}
