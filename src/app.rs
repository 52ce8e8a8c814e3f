mod gallery;
mod navbar;
mod sections;

use chrono::{Datelike, Utc};
use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::state::{Theme, THEME_STORAGE_KEY};
use gallery::ProjectsSection;
use navbar::NavBar;
use sections::{About, Contact, Hero};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/png" href="/briefcase.png" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Handle to the persisted light/dark preference.
///
/// Initialised from local storage (falling back to [`Theme::default`]) and
/// written back on every change.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme -> {next}");
        self.set_theme.set(next);
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // the server always renders the default theme, so hold the stored value
    // back until hydration is done or the dark class never gets removed
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, FromToStringCodec>(
        THEME_STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );
    provide_context(ThemeContext { theme, set_theme });

    view! {
        <Title formatter=|title| format!("Jebonne - {title}") />

        <Router>
            <div class=move || theme.get().root_class()>
                <div class="bg-white text-black dark:bg-[#080707] dark:text-[#E5E5E5] min-h-screen w-full overflow-x-hidden transition-colors duration-300">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <NavBar />
        <main class="pt-24">
            <Hero />
            <About />
            <ProjectsSection />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    view! {
        <footer class="text-center py-8 text-sm text-gray-600 dark:text-[#B0B0B0] border-t border-gray-300 dark:border-[#413530] bg-white dark:bg-[#080707]">
            <p>{format!("© {year} Jebonne Elvina. All rights reserved.")}</p>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-4xl font-bold">"Page not found."</h1>
            <A href="/" attr:class="text-indigo-600 dark:text-indigo-400 hover:underline">
                "Back to the portfolio →"
            </A>
        </div>
    }
}
