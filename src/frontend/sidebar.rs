use yew::prelude::*;

use super::media::ProjectMedia;
use crate::media::MediaSlot;
use crate::projects;
use crate::site::{AUTHOR_EMAIL, PROJECTS_ON_HOME_PAGE, SOCIAL_PROFILES};

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <aside class="sidebar">
            <section class="sidebar-card" aria-labelledby="contact-heading">
                <h2 id="contact-heading">{"Get in Touch"}</h2>
                <ul class="row-list">
                    { for SOCIAL_PROFILES.iter().map(|profile| html! {
                        <li>
                            <a
                                class="sidebar-row"
                                href={profile.link}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <span class="sidebar-row-label">{profile.name}</span>
                                <span class="sr-only">{" (opens in a new tab)"}</span>
                            </a>
                        </li>
                    }) }
                    if let Some(email) = AUTHOR_EMAIL {
                        <li class="sidebar-row">
                            <span class="sidebar-row-label">{email}</span>
                        </li>
                    }
                </ul>
            </section>

            <section class="sidebar-card" aria-labelledby="working-on-heading">
                <h2 id="working-on-heading">{"What am I working on?"}</h2>
                <ul class="row-list">
                    { for projects::home_page_projects(PROJECTS_ON_HOME_PAGE).iter().map(|project| html! {
                        <li key={project.slug}>
                            <a class="sidebar-row" href={project.detail_path()}>
                                <span class="sidebar-row-label">{project.title}</span>
                                <ProjectMedia card={project.card()} slot={MediaSlot::Thumbnail} />
                            </a>
                        </li>
                    }) }
                </ul>
                <hr />
                <a class="sidebar-footer-link" href="/projects">
                    {"All projects"}
                    <span aria-hidden="true">{" →"}</span>
                </a>
            </section>
        </aside>
    }
}
