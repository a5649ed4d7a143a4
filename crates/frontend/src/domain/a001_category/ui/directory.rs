use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::grid::CategoryGrid;
use super::icon_view::CategoryIconView;
use crate::domain::a001_category::resolver::{resolve_icon, resolve_text_color, IconSize};
use crate::domain::a001_category::store::CategoryStore;
use crate::shared::icons::icon;

#[component]
fn StatTile(label: &'static str, #[prop(into)] value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <div class="stat-tile__label">{label}</div>
            <div class="stat-tile__value">{move || value.get().to_string()}</div>
        </div>
    }
}

#[component]
fn CategoryDetail(category: Category) -> impl IntoView {
    let icon_view = resolve_icon(&category, IconSize::Large);
    let color = format!("color: {};", resolve_text_color(&category));
    let count = category
        .business_count()
        .map(|n| format!("{} empresas registradas", n))
        .unwrap_or_else(|| "Sin datos de empresas".to_string());

    view! {
        <div class="category-detail">
            <div class="category-detail__icon" style=color>
                <CategoryIconView icon=icon_view />
            </div>
            <div class="category-detail__body">
                <h3>{category.name().to_string()}</h3>
                <div class="category-detail__slug">{format!("/{}", category.slug())}</div>
                {category.description().map(|d| view! { <p>{d.to_string()}</p> })}
                <div class="category-detail__count">{count}</div>
            </div>
        </div>
    }
}

/// Directory page: search, icon-type filter, stats and the category grid
#[component]
pub fn CategoryDirectory(store: CategoryStore) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let icon_type = RwSignal::new(String::new());
    let detail: RwSignal<Option<Result<Category, String>>> = RwSignal::new(None);

    let categorias = store.categorias;
    let loading = store.loading;
    let error = store.error;

    let visible = Signal::derive({
        let store = store.clone();
        move || {
            let mut items = store.search(&search.get());
            let kind = icon_type.get();
            if !kind.is_empty() {
                items.retain(|c| c.icon_type() == Some(kind.as_str()));
            }
            items
        }
    });

    let stats = Memo::new({
        let store = store.clone();
        move |_| store.compute_stats()
    });
    let icon_types = Memo::new({
        let store = store.clone();
        move |_| store.icon_types()
    });

    let open_detail = Callback::new({
        let store = store.clone();
        move |category: Category| {
            let store = store.clone();
            let slug = category.slug();
            spawn_local(async move {
                detail.set(Some(store.obtain_by_slug(&slug).await));
            });
        }
    });

    let refresh = {
        let store = store.clone();
        move |_: leptos::ev::MouseEvent| store.retry()
    };

    view! {
        <div class="category-directory">
            <div class="category-directory__toolbar">
                <Input
                    value=search
                    placeholder="Buscar por nombre, descripción o slug..."
                />
                <select
                    class="category-directory__type"
                    prop:value=move || icon_type.get()
                    on:change=move |ev| icon_type.set(event_target_value(&ev))
                >
                    <option value="">"Todos los tipos"</option>
                    <For each=move || icon_types.get() key=|t| t.clone() let:kind>
                        <option value=kind.clone()>{kind.clone()}</option>
                    </For>
                </select>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=refresh
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                </Button>
            </div>

            <div class="category-directory__stats">
                <StatTile label="Total" value=Signal::derive(move || stats.with(|s| s.total)) />
                <StatTile label="Activas" value=Signal::derive(move || stats.with(|s| s.active)) />
                <StatTile label="Inactivas" value=Signal::derive(move || stats.with(|s| s.inactive)) />
                <StatTile label="Con empresas" value=Signal::derive(move || stats.with(|s| s.with_businesses)) />
            </div>

            {
                let store = store.clone();
                move || {
                    error.get().map(|e| {
                        let store = store.clone();
                        view! {
                            <div class="alert alert--error">
                                {icon("alert")}
                                <span>{e}</span>
                                <button type="button" class="alert__action" on:click=move |_| store.retry()>
                                    "Reintentar"
                                </button>
                            </div>
                        }
                    })
                }
            }

            {move || {
                (loading.get() && categorias.with(Vec::is_empty)).then(|| view! {
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                        <Spinner />
                    </Flex>
                })
            }}

            {move || {
                (!loading.get() && error.get().is_none() && visible.with(Vec::is_empty)).then(|| view! {
                    <div class="category-directory__empty">"No se encontraron categorías"</div>
                })
            }}

            <CategoryGrid categories=visible on_select=Some(open_detail) />

            {move || detail.get().map(|result| match result {
                Ok(category) => view! { <CategoryDetail category=category /> }.into_any(),
                Err(e) => view! { <div class="alert alert--error">{e}</div> }.into_any(),
            })}
        </div>
    }
}
