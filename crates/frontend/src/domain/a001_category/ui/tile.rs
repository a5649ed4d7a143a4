use contracts::domain::a001_category::Category;
use leptos::prelude::*;

use super::icon_view::CategoryIconView;
use crate::domain::a001_category::resolver::{resolve_icon, resolve_palette, IconSize};

/// Grid card. Hover is local state fed into the resolver, styles are derived from it.
#[component]
pub fn CategoryTile(
    category: Category,
    #[prop(default = None)] on_select: Option<Callback<Category>>,
) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let icon = resolve_icon(&category, IconSize::Large);
    let name = category.name().to_string();
    let description = category.description().map(str::to_string);
    let business_count = category.business_count().filter(|n| *n > 0);
    let inactive = !category.is_active();
    let tile_class = if inactive {
        "category-tile category-tile--inactive"
    } else {
        "category-tile"
    };

    let palette_source = category.clone();
    let palette = Memo::new(move |_| resolve_palette(&palette_source, hovered.get()));

    let card_style = move || {
        palette.with(|p| {
            format!(
                "background-color: {}; border: 1px solid {};",
                p.background, p.border
            )
        })
    };
    let icon_style = move || palette.with(|p| format!("color: {};", p.text));
    let label_style = move || {
        if hovered.get() {
            palette.with(|p| format!("color: {};", p.text))
        } else {
            String::new()
        }
    };

    let on_click = move |_: leptos::ev::MouseEvent| {
        if let Some(callback) = on_select {
            callback.run(category.clone());
        }
    };

    view! {
        <button
            type="button"
            class=tile_class
            style=card_style
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
            on:click=on_click
        >
            <div class="category-tile__icon" style=icon_style>
                <CategoryIconView icon=icon />
            </div>
            <div class="category-tile__name" style=label_style>{name}</div>
            {description.map(|d| view! { <div class="category-tile__description">{d}</div> })}
            {business_count.map(|n| view! {
                <div class="category-tile__count">{format!("{} empresas", n)}</div>
            })}
            {inactive.then(|| view! { <span class="category-tile__badge">"Inactiva"</span> })}
        </button>
    }
}
