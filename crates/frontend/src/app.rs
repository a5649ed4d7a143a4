use std::sync::Arc;

use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_category::api::{CategoryApi, HttpCategoryApi};
use crate::domain::a001_category::store::{use_categories, CategoryStoreOptions};
use crate::domain::a001_category::ui::{CategoryAdminPage, CategoryDirectory, HomeCategories};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Directory,
    Admin,
}

impl Page {
    fn title(self) -> &'static str {
        match self {
            Page::Home => "Inicio",
            Page::Directory => "Categorías",
            Page::Admin => "Administración",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let api: Arc<dyn CategoryApi> = Arc::new(HttpCategoryApi::from_window());
    // Public pages share one store with active categories only
    let store = use_categories(api.clone(), CategoryStoreOptions::default());
    let page = RwSignal::new(Page::Home);

    let open_directory = Callback::new(move |_: Category| page.set(Page::Directory));

    let nav_button = move |target: Page| {
        view! {
            <Button
                appearance=Signal::derive(move || {
                    if page.get() == target {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    }
                })
                on_click=move |_: leptos::ev::MouseEvent| page.set(target)
            >
                {target.title()}
            </Button>
        }
    };

    view! {
        <ConfigProvider>
            <div class="app">
                <nav class="app__nav">
                    <Flex gap=FlexGap::Small>
                        {nav_button(Page::Home)}
                        {nav_button(Page::Directory)}
                        {nav_button(Page::Admin)}
                    </Flex>
                </nav>
                <main class="app__content">
                    {move || match page.get() {
                        Page::Home => view! {
                            <HomeCategories store=store.clone() on_select=Some(open_directory) />
                        }
                        .into_any(),
                        Page::Directory => view! { <CategoryDirectory store=store.clone() /> }.into_any(),
                        Page::Admin => view! { <CategoryAdminPage api=api.clone() /> }.into_any(),
                    }}
                </main>
            </div>
        </ConfigProvider>
    }
}
