use contracts::domain::a001_category::Category;
use leptos::prelude::*;

use super::tile::CategoryTile;

#[component]
pub fn CategoryGrid(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(default = None)] on_select: Option<Callback<Category>>,
) -> impl IntoView {
    view! {
        <div class="category-grid">
            <For
                each=move || categories.get()
                key=Category::clone
                let:category
            >
                <CategoryTile category=category on_select=on_select />
            </For>
        </div>
    }
}
