use leptos::prelude::*;

use crate::portfolio::{Section, OWNER};

/// Scrolls the section's element into view. Smooth scrolling comes from the
/// `scroll-smooth` class on the root element.
pub fn scroll_to(section: Section) {
    match document().get_element_by_id(section.id()) {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("no element with id {}", section.id()),
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-50 bg-background/95 backdrop-blur border-b">
            <div class="max-w-6xl mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <h2 class="text-xl font-bold bg-gradient-to-r from-gradient-start to-gradient-end bg-clip-text text-transparent">
                        {OWNER}
                    </h2>
                    <div class="flex gap-6">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="text-sm hover:text-primary transition-colors"
                                        on:click=move |_| scroll_to(section)
                                    >
                                        {section.nav_label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
