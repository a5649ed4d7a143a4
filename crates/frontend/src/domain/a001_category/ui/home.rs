use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use thaw::*;

use super::badge_list::CategoryBadgeList;
use super::scroller::CategoryScroller;
use crate::domain::a001_category::store::CategoryStore;

/// Home page section: featured categories in a scroller plus the full badge list
#[component]
pub fn HomeCategories(
    store: CategoryStore,
    #[prop(default = 12)] limit: usize,
    #[prop(default = None)] on_select: Option<Callback<Category>>,
) -> impl IntoView {
    let categorias = store.categorias;
    let loading = store.loading;
    let error = store.error;

    let featured = Signal::derive(move || {
        categorias.with(|all| {
            all.iter()
                .filter(|c| c.is_active())
                .take(limit)
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <section class="home-categories">
            <h2 class="home-categories__title">"Explora por categoría"</h2>
            {move || {
                (loading.get() && categorias.with(Vec::is_empty)).then(|| view! {
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center;">
                        <Spinner />
                    </Flex>
                })
            }}
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <CategoryScroller categories=featured on_select=on_select />
            <CategoryBadgeList categories=categorias limit=limit />
        </section>
    }
}
