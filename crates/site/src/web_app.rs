use dock_runtime::{AppDock, DockProvider};
use leptos::*;
use leptos_meta::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Home" />
        <Meta name="description" content="Home-screen launcher dock." />

        <main class="site-root">
            <HomeScreen />
        </main>
    }
}

#[component]
pub fn HomeScreen() -> impl IntoView {
    view! {
        <DockProvider host_services=build_host_services()>
            <AppDock />
        </DockProvider>
    }
}
