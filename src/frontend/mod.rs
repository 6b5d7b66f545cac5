mod media;
mod pages;
mod sidebar;
mod spotlight_card;

use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Storage};
use yew::prelude::*;

use crate::metadata::PageMetadata;
use crate::route::Route;
use crate::site::{self, NavItem, SITE_TITLE};
use crate::theme::{Theme, THEME_STORAGE_KEY};

use pages::{HomePage, NotFoundPage, ProjectPage, ProjectsPage};

pub use spotlight_card::SpotlightCard;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_theme() -> Option<Theme> {
    let value = local_storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()?;
    match value.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            tracing::warn!("ignoring stored theme: {err}");
            None
        }
    }
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn resolve_theme() -> Theme {
    read_stored_theme().unwrap_or_else(|| Theme::from_prefers_dark(system_prefers_dark()))
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn current_route() -> Route {
    let path = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::parse(&path)
}

fn set_document_title(metadata: &PageMetadata) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(&metadata.document_title());
    }
}

fn nav_item(item: &NavItem) -> Html {
    match item {
        NavItem::Link { title, href } => html! {
            <li><a class="nav-link" href={*href}>{*title}</a></li>
        },
        NavItem::Group { title, content } => html! {
            <li class="nav-group">
                <span class="nav-group-title">{*title}</span>
                <ul class="nav-group-links">
                    { for content.iter().map(|link| html! {
                        <li>
                            <a class="nav-link" href={link.href}>{link.title}</a>
                            <p class="muted">{link.description}</p>
                        </li>
                    }) }
                </ul>
            </li>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(resolve_theme);
    let route = use_memo((), |_| current_route());

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    {
        let route = (*route).clone();
        use_effect_with(route, |route| {
            tracing::debug!(?route, "rendering route");
            set_document_title(&PageMetadata::for_route(route));
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let page = match &*route {
        Route::Home => html! { <HomePage /> },
        Route::Projects => html! { <ProjectsPage theme={*theme} /> },
        Route::Project { slug } => html! {
            <ProjectPage slug={AttrValue::from(slug.clone())} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="page-shell">
                <header class="site-header">
                    <a class="site-title" href="/">{SITE_TITLE}</a>
                    <nav aria-label="Primary">
                        <ul class="nav-list">
                            { for site::navigation_links().iter().map(nav_item) }
                        </ul>
                    </nav>
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={(*theme).toggle_label()}
                        aria-pressed={(*theme).pressed().to_string()}
                        onclick={on_toggle}
                    >
                        <span aria-hidden="true">{(*theme).icon()}</span>
                    </button>
                </header>

                <main id="content">
                    {page}
                </main>
            </div>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
