use contracts::domain::a001_category::Category;
use leptos::prelude::*;

use super::icon_view::CategoryIconView;
use crate::domain::a001_category::resolver::{
    resolve_background, resolve_icon, resolve_text_color, IconSize, TILE_BACKGROUND_ALPHA,
};

/// Compact badges; anything past `limit` collapses into a "+N" badge
#[component]
pub fn CategoryBadgeList(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(default = 8)] limit: usize,
) -> impl IntoView {
    let visible = move || categories.with(|all| all.iter().take(limit).cloned().collect::<Vec<_>>());
    let hidden = move || categories.with(|all| all.len().saturating_sub(limit));

    view! {
        <div class="category-badges">
            <For
                each=visible
                key=Category::clone
                let:category
            >
                {
                    let style = format!(
                        "background-color: {}; color: {};",
                        resolve_background(&category, TILE_BACKGROUND_ALPHA),
                        resolve_text_color(&category),
                    );
                    let icon = resolve_icon(&category, IconSize::Small);
                    view! {
                        <span class="category-badge" style=style>
                            <CategoryIconView icon=icon />
                            {category.name().to_string()}
                        </span>
                    }
                }
            </For>
            {move || {
                let rest = hidden();
                (rest > 0).then(|| view! { <span class="category-badge category-badge--more">{format!("+{}", rest)}</span> })
            }}
        </div>
    }
}
