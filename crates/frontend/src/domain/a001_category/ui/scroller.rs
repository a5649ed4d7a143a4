use contracts::domain::a001_category::Category;
use leptos::prelude::*;

use super::icon_view::CategoryIconView;
use crate::domain::a001_category::resolver::{resolve_icon, resolve_palette, IconSize};

#[component]
fn ScrollerChip(category: Category, on_select: Option<Callback<Category>>) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let icon = resolve_icon(&category, IconSize::Medium);
    let name = category.name().to_string();

    let palette_source = category.clone();
    let style = move || {
        let p = resolve_palette(&palette_source, hovered.get());
        format!(
            "background-color: {}; border-color: {}; color: {};",
            p.background, p.border, p.text
        )
    };

    view! {
        <button
            type="button"
            class="category-chip"
            style=style
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
            on:click=move |_| {
                if let Some(callback) = on_select {
                    callback.run(category.clone());
                }
            }
        >
            <CategoryIconView icon=icon />
            <span class="category-chip__name">{name}</span>
        </button>
    }
}

/// Single-row horizontal list used on the home page
#[component]
pub fn CategoryScroller(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(default = None)] on_select: Option<Callback<Category>>,
) -> impl IntoView {
    view! {
        <div class="category-scroller">
            <For
                each=move || categories.get()
                key=Category::clone
                let:category
            >
                <ScrollerChip category=category on_select=on_select />
            </For>
        </div>
    }
}
