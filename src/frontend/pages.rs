use yew::prelude::*;

use super::media::ProjectMedia;
use super::sidebar::Sidebar;
use super::spotlight_card::SpotlightCard;
use crate::media::MediaSlot;
use crate::projects::{self, Project};
use crate::theme::Theme;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="home-layout">
            <section class="section-block" aria-labelledby="intro-heading">
                <h1 id="intro-heading">{"Hi there"}</h1>
                <p>
                    {"Building AI-assisted software delivery practices and the enterprise systems that come out of them."}
                </p>
            </section>
            <Sidebar />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsPageProps {
    pub theme: Theme,
}

#[function_component(ProjectsPage)]
pub fn projects_page(props: &ProjectsPageProps) -> Html {
    html! {
        <article class="section-block">
            <h1>{"Projects"}</h1>
            <p class="lead">{"These are the things I have been building lately."}</p>
            <hr />
            <div class="card-grid">
                { for projects::cards().into_iter().map(|card| html! {
                    <SpotlightCard key={card.href.clone()} card={card} theme={props.theme} />
                }) }
            </div>
        </article>
    }
}

fn project_links(project: &Project, long_labels: bool) -> Html {
    let demo = project.demo_url.map(|url| {
        html! {
            <a class="button" href={url} target="_blank" rel="noopener noreferrer">
                {"Live Demo"}
            </a>
        }
    });

    let external = project.external_link().map(|(url, kind)| {
        let label = if long_labels {
            kind.long_label()
        } else {
            kind.short_label()
        };
        html! {
            <a class="button button-outline" href={url} target="_blank" rel="noopener noreferrer">
                {label}
            </a>
        }
    });

    html! {
        <>
            {demo}
            {external}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectPageProps {
    pub slug: AttrValue,
}

#[function_component(ProjectPage)]
pub fn project_page(props: &ProjectPageProps) -> Html {
    let project = match projects::find_by_slug(&props.slug) {
        Ok(project) => project,
        Err(err) => {
            tracing::debug!("{err}");
            return html! { <NotFoundPage /> };
        }
    };

    html! {
        <article class="section-block project-detail">
            <a class="button button-ghost" href="/projects">
                <span aria-hidden="true">{"← "}</span>
                {"Back to Projects"}
            </a>

            <header class="project-header">
                <div>
                    <h1>{project.title}</h1>
                    if let Some(short_description) = project.short_description {
                        <p class="lead muted">{short_description}</p>
                    }
                    <div class="badge-row">
                        if let Some(status) = project.status {
                            <span class="badge">{status}</span>
                        }
                        if let Some(year) = project.year {
                            <span class="badge badge-outline">{year.to_string()}</span>
                        }
                    </div>
                </div>
                <div class="button-row">
                    {project_links(project, false)}
                </div>
            </header>

            <ProjectMedia card={project.card()} slot={MediaSlot::Hero} />

            <section>
                <h2>{"About This Project"}</h2>
                <p>{project.description}</p>
            </section>

            if !project.technologies.is_empty() {
                <section>
                    <h2>{"Technologies Used"}</h2>
                    <div class="badge-row">
                        { for project.technologies.iter().map(|tech| html! {
                            <span key={*tech} class="badge badge-outline">{*tech}</span>
                        }) }
                    </div>
                </section>
            }

            <section>
                <h2>{"Project Links"}</h2>
                <div class="button-row">
                    {project_links(project, true)}
                </div>
            </section>
        </article>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="section-block">
            <h1>{"Not found"}</h1>
            <p>{"That page does not exist."}</p>
            <a href="/projects">{"Browse projects"}</a>
        </section>
    }
}
