//! Persistent navigation sidebar.
//!
//! Static link list; the only state is the open/collapsed chrome in
//! `UiState`.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::entity::EntityKind;
use crate::routes::list_path;
use crate::state::ui::UiState;

/// One sidebar link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
}

/// Overview, the six entity sections in sidebar order, then reports and settings.
pub fn nav_items() -> Vec<NavItem> {
    let mut items = vec![NavItem { label: "Dashboard", href: "/".to_owned() }];
    items.extend(
        EntityKind::ALL
            .into_iter()
            .map(|kind| NavItem { label: kind.descriptor().title, href: list_path(kind) }),
    );
    items.push(NavItem { label: "Reports", href: "/reports".to_owned() });
    items.push(NavItem { label: "Settings", href: "/settings".to_owned() });
    items
}

/// True when `path` is `href` or one of its create/edit sub-routes.
pub fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    view! {
        <button
            class="btn sidebar-toggle"
            title="Toggle navigation"
            aria-label="Toggle navigation"
            on:click=move |_| ui.update(UiState::toggle_sidebar)
        >
            "☰"
        </button>
        <aside
            class="sidebar"
            class:sidebar--open=move || ui.get().sidebar_open
            class:sidebar--collapsed=move || ui.get().sidebar_collapsed
        >
            <div class="sidebar__brand">
                <a href="/" class="sidebar__logo">"RekaTalent"</a>
                <button
                    class="btn sidebar__collapse"
                    title="Collapse sidebar"
                    on:click=move |_| ui.update(UiState::toggle_collapsed)
                >
                    {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
                </button>
            </div>
            <nav class="sidebar__nav">
                {nav_items()
                    .into_iter()
                    .map(|item| {
                        let href = item.href.clone();
                        view! {
                            <a
                                class="sidebar__link"
                                class:sidebar__link--active=move || is_active(&href, &pathname.get())
                                href=item.href
                                title=item.label
                                on:click=move |_| ui.update(UiState::close_sidebar)
                            >
                                <span class="sidebar__label">{item.label}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
