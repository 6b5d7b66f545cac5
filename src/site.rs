pub const SITE_TITLE: &str = "Martin Ouimet";
pub const AUTHOR_EMAIL: Option<&str> = None;
pub const PROJECTS_ON_HOME_PAGE: usize = 3;
pub const RESUME_PATH: &str = "/martin-ouimet-resume.pdf";
pub const NEWSLETTER_URL: Option<&str> = None;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialProfile {
    pub name: &'static str,
    pub link: &'static str,
}

pub const SOCIAL_PROFILES: &[SocialProfile] = &[
    SocialProfile {
        name: "github",
        link: "https://github.com/mouimet-infinisoft",
    },
    SocialProfile {
        name: "website",
        link: "https://infinisoft.world",
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentLink {
    pub title: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link {
        title: &'static str,
        href: &'static str,
    },
    Group {
        title: &'static str,
        content: Vec<ContentLink>,
    },
}

impl NavItem {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Link { title, .. } | Self::Group { title, .. } => title,
        }
    }
}

fn content_links() -> Vec<ContentLink> {
    let candidates = [
        ("Blog", Some("/posts"), "Articles about AI, software engineering, and technology leadership"),
        (
            "AI-SDLC Framework",
            Some("https://github.com/mouimet-infinisoft/AISDLC"),
            "Experimental framework for human-AI team collaboration in software development",
        ),
        ("Newsletter", NEWSLETTER_URL, "Stay updated on AI solutions and technology insights"),
        ("Resume", Some(RESUME_PATH), "Download Martin's CV and professional background"),
    ];

    candidates
        .into_iter()
        .filter_map(|(title, href, description)| {
            href.map(|href| ContentLink {
                title,
                href,
                description,
            })
        })
        .collect()
}

/// Header navigation. Entries without a configured target are left out.
pub fn navigation_links() -> Vec<NavItem> {
    vec![
        NavItem::Group {
            title: "Content",
            content: content_links(),
        },
        NavItem::Link {
            title: "Projects",
            href: "/projects",
        },
        NavItem::Link {
            title: "Uses",
            href: "/uses",
        },
        NavItem::Link {
            title: "Now",
            href: "/now",
        },
    ]
}
