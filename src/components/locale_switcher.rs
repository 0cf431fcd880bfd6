//! Two-button language toggle writing through the locale context.

use leptos::prelude::*;

use crate::state::locale::{Locale, use_locale};

/// Locale switcher. Must render inside the locale provider.
#[component]
pub fn LocaleSwitcher() -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="locale-switcher">
            {[Locale::En, Locale::Es]
                .into_iter()
                .map(|candidate| {
                    view! {
                        <button
                            class="locale-switcher__option"
                            class=("locale-switcher__option--active", move || {
                                locale.get() == candidate
                            })
                            on:click=move |_| locale.set(candidate)
                        >
                            {candidate.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
