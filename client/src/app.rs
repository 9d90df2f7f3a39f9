//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the `Stores` registry and sidebar `UiState` as context,
//! renders the persistent sidebar, and maps every entity kind to its list,
//! create and edit routes.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::config::candidate_endpoint;
use crate::entity::EntityKind;
use crate::pages::{
    create::EntityCreatePage, edit::EntityEditPage, list::EntityListPage, overview::OverviewPage,
    section::SectionPage,
};
use crate::state::ui::UiState;
use crate::store::Stores;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Stores::new(candidate_endpoint()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/rekatalent.css"/>
        <Title text="RekaTalent"/>

        <Router>
            <div class="layout">
                <Sidebar/>
                <main class="layout__main">
                    <Routes fallback=|| view! { <SectionPage title="Page not found."/> }>
                        <Route path=StaticSegment("") view=OverviewPage/>
                        <Route path=StaticSegment("users") view=|| view! { <EntityListPage kind=EntityKind::User /> } />
                        <Route
                            path=(StaticSegment("users"), StaticSegment("create"))
                            view=|| view! { <EntityCreatePage kind=EntityKind::User /> }
                        />
                        <Route
                            path=(StaticSegment("users"), StaticSegment("edit"), ParamSegment("id"))
                            view=|| view! { <EntityEditPage kind=EntityKind::User /> }
                        />
                        <Route path=StaticSegment("candidates") view=|| view! { <EntityListPage kind=EntityKind::Candidate /> } />
                        <Route
                            path=(StaticSegment("candidates"), StaticSegment("create"))
                            view=|| view! { <EntityCreatePage kind=EntityKind::Candidate /> }
                        />
                        <Route
                            path=(StaticSegment("candidates"), StaticSegment("edit"), ParamSegment("id"))
                            view=|| view! { <EntityEditPage kind=EntityKind::Candidate /> }
                        />
                        <Route path=StaticSegment("interview-schedulings") view=|| view! { <EntityListPage kind=EntityKind::InterviewScheduling /> } />
                        <Route
                            path=(StaticSegment("interview-schedulings"), StaticSegment("create"))
                            view=|| view! { <EntityCreatePage kind=EntityKind::InterviewScheduling /> }
                        />
                        <Route
                            path=(StaticSegment("interview-schedulings"), StaticSegment("edit"), ParamSegment("id"))
                            view=|| view! { <EntityEditPage kind=EntityKind::InterviewScheduling /> }
                        />
                        <Route path=StaticSegment("test-schedulings") view=|| view! { <EntityListPage kind=EntityKind::TestScheduling /> } />
                        <Route
                            path=(StaticSegment("test-schedulings"), StaticSegment("create"))
                            view=|| view! { <EntityCreatePage kind=EntityKind::TestScheduling /> }
                        />
                        <Route
                            path=(StaticSegment("test-schedulings"), StaticSegment("edit"), ParamSegment("id"))
                            view=|| view! { <EntityEditPage kind=EntityKind::TestScheduling /> }
                        />
                        <Route path=StaticSegment("interviews") view=|| view! { <EntityListPage kind=EntityKind::Interview /> } />
                        <Route
                            path=(StaticSegment("interviews"), StaticSegment("create"))
                            view=|| view! { <EntityCreatePage kind=EntityKind::Interview /> }
                        />
                        <Route
                            path=(StaticSegment("interviews"), StaticSegment("edit"), ParamSegment("id"))
                            view=|| view! { <EntityEditPage kind=EntityKind::Interview /> }
                        />
                        <Route path=StaticSegment("psychological-tests") view=|| view! { <EntityListPage kind=EntityKind::PsychologicalTest /> } />
                        <Route
                            path=(StaticSegment("psychological-tests"), StaticSegment("create"))
                            view=|| view! { <EntityCreatePage kind=EntityKind::PsychologicalTest /> }
                        />
                        <Route
                            path=(StaticSegment("psychological-tests"), StaticSegment("edit"), ParamSegment("id"))
                            view=|| view! { <EntityEditPage kind=EntityKind::PsychologicalTest /> }
                        />
                        <Route path=StaticSegment("reports") view=|| view! { <SectionPage title="Reports"/> }/>
                        <Route path=StaticSegment("settings") view=|| view! { <SectionPage title="Settings"/> }/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
