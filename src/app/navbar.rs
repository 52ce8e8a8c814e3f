use leptos::prelude::*;

use super::ThemeContext;
use crate::state::{NavEffect, NavMsg, NavState, SectionId, SECTIONS};

fn scroll_to(id: SectionId) {
    match document().get_element_by_id(id.anchor()) {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("no element for section #{id}"),
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let dispatch = move |msg: NavMsg| {
        log::debug!("nav: {msg:?}");
        let mut effect = None;
        nav.update(|n| effect = n.apply(msg));
        if let Some(NavEffect::ScrollTo(id)) = effect {
            scroll_to(id);
        }
    };

    let nav_items = move |vertical: bool| {
        SECTIONS
            .iter()
            .map(|section| {
                let id = section.id;
                let active_border = if vertical { "border-l-2 pl-2" } else { "border-b-2" };
                view! {
                    <li
                        class=move || {
                            if nav.with(|n| n.is_active(id)) {
                                format!(
                                    "cursor-pointer text-lg transition-colors text-black dark:text-[#E5E5E5] {active_border} border-black dark:border-[#E5E5E5]",
                                )
                            } else {
                                "cursor-pointer text-lg transition-colors text-gray-700 dark:text-[#B0B0B0] hover:text-black dark:hover:text-[#E5E5E5]"
                                    .to_string()
                            }
                        }
                        on:click=move |_| dispatch(NavMsg::Select(id))
                    >
                        {section.label}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 w-full bg-white dark:bg-[#080707]/90 backdrop-blur-sm shadow-md shadow-black/10 dark:shadow-[#2c2724]/20 z-40">
            <div class="container mx-auto flex justify-between items-center px-6 py-4">
                <h1 class="flex items-center gap-2 text-2xl font-extrabold tracking-tight">
                    <img src="/briefcase.png" alt="Icon" class="w-6 h-6 object-contain mr-3" />
                    <span>"Jebs"</span>
                    <ThemeToggle extra_class="md:hidden ml-2" />
                </h1>
                <div class="hidden md:flex items-center gap-6">
                    <ThemeToggle extra_class="" />
                    <ul class="flex gap-6">{nav_items(false)}</ul>
                </div>
                <button
                    class="md:hidden text-2xl p-2"
                    aria-label="Toggle Menu"
                    on:click=move |_| dispatch(NavMsg::ToggleMenu)
                >
                    {move || if nav.with(|n| n.menu_open()) { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || nav.with(|n| n.menu_open())>
                <div class="md:hidden bg-white dark:bg-[#080707]/90 backdrop-blur-sm px-6 py-4 border-t border-gray-300 dark:border-[#413530]">
                    <ul class="flex flex-col gap-4">{nav_items(true)}</ul>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn ThemeToggle(extra_class: &'static str) -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    view! {
        <button
            class=format!(
                "text-xl p-2 border rounded-full border-black dark:border-[#E5E5E5] hover:bg-black dark:hover:bg-[#E5E5E5] hover:text-white dark:hover:text-[#080707] transition {extra_class}",
            )
            aria-label="Toggle Theme"
            on:click=move |_| theme.toggle()
        >
            <span class=move || {
                if theme.get().is_dark() { "text-yellow-400" } else { "text-gray-700" }
            }>{move || if theme.get().is_dark() { "☀" } else { "☾" }}</span>
        </button>
    }
}
