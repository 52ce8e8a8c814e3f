use std::sync::Arc;

use leptos::{either::Either, ev, prelude::*};

use crate::{
    projects::{catalog, Collection, Project},
    state::{Gallery, GalleryMsg, SectionId, SlideCursor},
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let gallery = RwSignal::new(Gallery::default());
    let dispatch = Callback::new(move |msg: GalleryMsg| {
        log::debug!("gallery: {msg:?}");
        let mut res = Ok(());
        gallery.update(|g| res = g.apply(msg));
        if let Err(e) = res {
            log::warn!("ignoring gallery event: {e}");
        }
    });

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        if let Some(msg) = gallery.with_untracked(|g| g.escape()) {
            dispatch.run(msg);
        }
    });
    on_cleanup(move || handle.remove());

    // keep the page underneath from scrolling while the modal is up
    Effect::new(move |_| {
        let open = gallery.with(|g| g.is_open());
        if let Some(body) = document().body() {
            if let Err(e) = body.class_list().toggle_with_force("overflow-hidden", open) {
                log::warn!("couldn't toggle page scroll lock: {e:?}");
            }
        }
    });

    // only rebuild the modal when the project changes, not when the lightbox opens
    let open_project = Memo::new(move |_| gallery.with(|g| g.project().cloned()));
    let enlarged = Memo::new(move |_| {
        gallery.with(|g| match g {
            Gallery::Enlarged(project, index) => Some((project.clone(), *index)),
            _ => None,
        })
    });

    let collections = match catalog() {
        Ok(catalog) => Either::Left(
            catalog
                .collections
                .iter()
                .map(|collection| {
                    view! { <CollectionRow collection=collection.clone() on_msg=dispatch /> }
                })
                .collect_view(),
        ),
        Err(e) => Either::Right(view! {
            <p class="text-center text-red-600 dark:text-red-400">
                {format!("Projects are unavailable: {e}")}
            </p>
        }),
    };

    view! {
        <section
            id=SectionId::Projects.anchor()
            class="min-h-screen w-full bg-gradient-to-b from-gray-200 via-gray-300 to-gray-200 dark:from-[#2c2724] dark:via-[#413530] dark:to-[#080707] px-6 py-24"
        >
            <div class="max-w-6xl mx-auto space-y-28">{collections}</div>
            {move || {
                open_project
                    .get()
                    .map(|project| view! { <ProjectModal project on_msg=dispatch /> })
            }}
            {move || {
                enlarged
                    .get()
                    .map(|(project, start)| {
                        view! {
                            <Lightbox
                                title=project.title.clone()
                                images=project.screenshots.clone()
                                start
                                on_close=Callback::new(move |_: ()| {
                                    dispatch.run(GalleryMsg::CloseEnlarged)
                                })
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn CollectionRow(collection: Collection, on_msg: Callback<GalleryMsg>) -> impl IntoView {
    let cards = collection
        .projects
        .into_iter()
        .map(|project| view! { <ProjectCard project on_msg /> })
        .collect_view();
    view! {
        <div>
            <h3 class="text-center text-4xl font-extrabold mb-10 leading-tight pb-1">
                {collection.name}
            </h3>
            <div class="flex gap-5 overflow-x-auto snap-x snap-mandatory pb-4">{cards}</div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Arc<Project>, on_msg: Callback<GalleryMsg>) -> impl IntoView {
    let title = project.title.clone();
    let description = project.description.clone();
    view! {
        <div class="snap-start shrink-0 w-[90%] md:w-[45%] transition-transform duration-300 hover:scale-[1.03] bg-white dark:bg-[#131212]/90 p-6 rounded-2xl shadow-xl hover:shadow-2xl flex flex-col border border-gray-200 dark:border-[#3a3a3a]">
            <h4 class="text-2xl font-semibold mb-2">{title}</h4>
            <p class="text-gray-700 dark:text-[#B0B0B0] mb-4 leading-relaxed">{description}</p>
            <button
                class="mt-auto text-indigo-600 dark:text-indigo-400 font-semibold hover:underline"
                on:click=move |_| on_msg.run(GalleryMsg::Open(project.clone()))
            >
                "View Project →"
            </button>
        </div>
    }
}

#[component]
fn ProjectModal(project: Arc<Project>, on_msg: Callback<GalleryMsg>) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 bg-black/70 z-50 flex items-center justify-center px-4"
            on:click=move |_| on_msg.run(GalleryMsg::Close)
        >
            <div
                class="bg-white dark:bg-[#1e1e1e] rounded-2xl p-8 max-w-6xl w-full relative shadow-2xl"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 text-xl text-black dark:text-white bg-gray-200 dark:bg-[#2a2a2a] rounded-md px-3 py-1 shadow-md hover:text-red-500 hover:bg-gray-300 dark:hover:bg-[#3a3a3a] transition z-50"
                    aria-label="Close"
                    on:click=move |_| on_msg.run(GalleryMsg::Close)
                >
                    "×"
                </button>
                <h3 class="text-center text-3xl font-bold mb-4">{project.title.clone()}</h3>
                <p class="text-center mb-6 text-gray-700 dark:text-gray-300 text-lg">
                    {project.description.clone()}
                </p>
                <Carousel
                    title=project.title.clone()
                    images=project.screenshots.clone()
                    on_select=Callback::new(move |index| on_msg.run(GalleryMsg::Enlarge(index)))
                />
                <p class="text-center mt-4 text-sm text-gray-500 dark:text-gray-400 animate-pulse">
                    "Click a screenshot to enlarge it"
                </p>
            </div>
        </div>
    }
}

/// Slide-at-a-time viewer. Owns its own position; the gallery only hears
/// about a slide when it is clicked.
#[component]
fn Carousel(
    title: String,
    images: Vec<String>,
    on_select: Callback<usize>,
) -> impl IntoView {
    let cursor = RwSignal::new(SlideCursor::new(images.len(), 0));
    let count = images.len();
    let images = StoredValue::new(images);

    let dots = (0..count)
        .map(|i| {
            view! {
                <button
                    class=move || {
                        if cursor.with(|c| c.index() == i) {
                            "w-3 h-3 rounded-full bg-indigo-600 dark:bg-indigo-400"
                        } else {
                            "w-3 h-3 rounded-full bg-gray-300 dark:bg-gray-600"
                        }
                    }
                    aria-label=format!("Go to slide {}", i + 1)
                    on:click=move |_| cursor.set(SlideCursor::new(count, i))
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="relative">
            {move || {
                let index = cursor.with(|c| c.index());
                images
                    .with_value(|images| images.get(index).cloned())
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt=format!("{} screenshot {}", title, index + 1)
                                class="rounded-xl shadow-lg w-full max-h-[600px] object-cover cursor-zoom-in"
                                on:click=move |_| on_select.run(index)
                            />
                        }
                    })
            }}
            <button
                class="absolute left-2 top-1/2 -translate-y-1/2 text-3xl px-3 py-1 rounded-full bg-black/40 text-white disabled:opacity-20"
                aria-label="Previous screenshot"
                disabled=move || cursor.with(|c| c.is_first())
                on:click=move |_| cursor.update(|c| *c = c.prev())
            >
                "‹"
            </button>
            <button
                class="absolute right-2 top-1/2 -translate-y-1/2 text-3xl px-3 py-1 rounded-full bg-black/40 text-white disabled:opacity-20"
                aria-label="Next screenshot"
                disabled=move || cursor.with(|c| c.is_last())
                on:click=move |_| cursor.update(|c| *c = c.next())
            >
                "›"
            </button>
        </div>
        <div class="flex justify-center gap-2 mt-4">{dots}</div>
    }
}

/// Full-screen single image with its own wrapping prev/next controls.
#[component]
fn Lightbox(
    title: String,
    images: Vec<String>,
    start: usize,
    on_close: Callback<()>,
) -> impl IntoView {
    let cursor = RwSignal::new(SlideCursor::new(images.len(), start));
    let images = StoredValue::new(images);

    let handle = window_event_listener(ev::keydown, move |ev| match ev.key().as_str() {
        "ArrowLeft" => cursor.update(|c| *c = c.prev_wrapping()),
        "ArrowRight" => cursor.update(|c| *c = c.next_wrapping()),
        _ => {}
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="fixed inset-0 bg-black/90 z-[60] flex items-center justify-center">
            <button
                class="absolute top-4 right-4 text-3xl text-white px-3 py-1 hover:text-red-400"
                aria-label="Close enlarged screenshot"
                on:click=move |_| on_close.run(())
            >
                "×"
            </button>
            <button
                class="absolute left-4 text-5xl text-white px-3 hover:text-gray-300"
                aria-label="Previous screenshot"
                on:click=move |_| cursor.update(|c| *c = c.prev_wrapping())
            >
                "‹"
            </button>
            {move || {
                let index = cursor.with(|c| c.index());
                images
                    .with_value(|images| images.get(index).cloned())
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt=format!("{} screenshot {}", title, index + 1)
                                class="max-w-[90vw] max-h-[90vh] object-contain"
                            />
                        }
                    })
            }}
            <button
                class="absolute right-4 text-5xl text-white px-3 hover:text-gray-300"
                aria-label="Next screenshot"
                on:click=move |_| cursor.update(|c| *c = c.next_wrapping())
            >
                "›"
            </button>
            <p class="absolute bottom-6 text-white text-sm">
                {move || cursor.with(|c| format!("{} / {}", c.index() + 1, c.len()))}
            </p>
        </div>
    }
}
