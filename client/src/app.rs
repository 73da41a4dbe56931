//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::protected_route::{GuestRoute, ProtectedRoute};
use crate::components::toaster::Toaster;
use crate::pages::{
    forgot_password::ForgotPasswordPage,
    home::HomePage,
    learn_more::LearnMorePage,
    login::LoginPage,
    main_layout::{LayoutContent, MainLayout},
    register::RegisterPage,
};
use crate::state::{auth::AuthState, session::Role, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The document starts dark; the client re-applies the stored theme on load.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark" data-theme="dark">
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
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);

    // Effects only run in the browser, so SSR always renders the
    // "session not read yet" state and guards stay pending until this runs.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        auth.set(AuthState::loaded(crate::util::session_store::load()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/shopify-console.css"/>
        <Title text="Shopify Console"/>

        <Toaster/>
        <Router>
            <Routes fallback=|| view! { <div class="not-found">"Page not found."</div> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("learnMore") view=LearnMorePage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <GuestRoute><LoginPage/></GuestRoute> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <GuestRoute><RegisterPage/></GuestRoute> }
                />
                <ParentRoute
                    path=StaticSegment("mainLayout")
                    view=|| {
                        view! {
                            <ProtectedRoute allowed=vec![Role::Tenant, Role::Admin]>
                                <MainLayout/>
                            </ProtectedRoute>
                        }
                    }
                >
                    <Route path=StaticSegment("") view=LayoutContent/>
                    <Route path=StaticSegment("tenants") view=LayoutContent/>
                    <Route path=WildcardSegment("any") view=LayoutContent/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
