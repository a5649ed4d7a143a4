use std::sync::Arc;

use contracts::domain::a001_category::{Category, CategoryDto, CategoryId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::icon_view::CategoryIconView;
use crate::domain::a001_category::admin::{use_category_admin, CategoryAdminStore, MutationOutcome};
use crate::domain::a001_category::api::CategoryApi;
use crate::domain::a001_category::resolver::{resolve_icon, resolve_text_color, IconSize};
use crate::shared::icons::icon;

/// Status line shown after a mutation: `(is_success, text)`
pub fn notice_for<T>(outcome: &MutationOutcome<T>, done: &str) -> (bool, String) {
    match &outcome.result {
        Ok(_) if outcome.refreshed => (true, done.to_string()),
        Ok(_) => (
            true,
            format!("{}. No se pudo recargar la lista, inténtalo de nuevo", done),
        ),
        Err(message) => (false, message.clone()),
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Clone, Copy)]
struct CategoryForm {
    nombre: RwSignal<String>,
    slug: RwSignal<String>,
    tipo_icono: RwSignal<String>,
    icono: RwSignal<String>,
    color: RwSignal<String>,
    descripcion: RwSignal<String>,
    activo: RwSignal<bool>,
    editing: RwSignal<Option<CategoryId>>,
}

impl CategoryForm {
    fn new() -> Self {
        let form = Self {
            nombre: RwSignal::new(String::new()),
            slug: RwSignal::new(String::new()),
            tipo_icono: RwSignal::new(String::new()),
            icono: RwSignal::new(String::new()),
            color: RwSignal::new(String::new()),
            descripcion: RwSignal::new(String::new()),
            activo: RwSignal::new(true),
            editing: RwSignal::new(None),
        };
        form.fill(&CategoryDto::default(), None);
        form
    }

    fn fill(&self, dto: &CategoryDto, id: Option<CategoryId>) {
        self.nombre.set(dto.nombre.clone());
        self.slug.set(dto.slug.clone().unwrap_or_default());
        self.tipo_icono.set(dto.tipo_icono.clone());
        self.icono.set(dto.icono.clone().unwrap_or_default());
        self.color.set(dto.color_primario.clone().unwrap_or_default());
        self.descripcion.set(dto.descripcion.clone().unwrap_or_default());
        self.activo.set(dto.activo);
        self.editing.set(id);
    }

    fn reset(&self) {
        self.fill(&CategoryDto::default(), None);
    }

    fn to_dto(&self) -> CategoryDto {
        CategoryDto {
            nombre: self.nombre.get_untracked().trim().to_string(),
            slug: non_empty(self.slug.get_untracked()),
            tipo_icono: self.tipo_icono.get_untracked().trim().to_string(),
            icono: non_empty(self.icono.get_untracked()),
            color_primario: non_empty(self.color.get_untracked()),
            descripcion: non_empty(self.descripcion.get_untracked()),
            activo: self.activo.get_untracked(),
        }
    }
}

#[component]
fn AdminRow(
    category: Category,
    admin: CategoryAdminStore,
    form: CategoryForm,
    notice: RwSignal<Option<(bool, String)>>,
) -> impl IntoView {
    let icon_view = resolve_icon(&category, IconSize::Small);
    let color = resolve_text_color(&category);
    let id = category.id();
    let name = category.name().to_string();
    let icon_type = if category.is_legacy() {
        "(legado)".to_string()
    } else {
        category.icon_type().unwrap_or_default().to_string()
    };
    let active = category.is_active();
    let businesses = category
        .business_count()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());

    let on_edit = {
        let category = category.clone();
        move |_: leptos::ev::MouseEvent| {
            form.fill(&CategoryDto::from_category(&category), category.id());
        }
    };

    let on_toggle = {
        let admin = admin.clone();
        move |_: leptos::ev::MouseEvent| {
            let Some(id) = id else { return };
            let admin = admin.clone();
            spawn_local(async move {
                let outcome = admin.toggle_active(id).await;
                notice.set(Some(notice_for(&outcome, "Estado actualizado")));
            });
        }
    };

    let on_delete = {
        let admin = admin.clone();
        move |_: leptos::ev::MouseEvent| {
            let Some(id) = id else { return };
            let admin = admin.clone();
            spawn_local(async move {
                let outcome = admin.delete(id).await;
                notice.set(Some(notice_for(&outcome, "Categoría eliminada")));
            });
        }
    };

    view! {
        <tr class="table__row">
            <td class="table__cell" style=format!("color: {};", color)>
                <CategoryIconView icon=icon_view />
            </td>
            <td class="table__cell">{name}</td>
            <td class="table__cell">{icon_type}</td>
            <td class="table__cell">
                {if active {
                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Activa"</Badge> }.into_any()
                } else {
                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Inactiva"</Badge> }.into_any()
                }}
            </td>
            <td class="table__cell">{businesses}</td>
            <td class="table__cell">
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Subtle on_click=on_edit disabled=id.is_none()>
                        {icon("edit")}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=on_toggle disabled=id.is_none()>
                        {icon("power")}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=on_delete disabled=id.is_none()>
                        {icon("trash")}
                    </Button>
                </Flex>
            </td>
        </tr>
    }
}

/// Category maintenance: every category (inactive included) with create/edit/toggle/delete
#[component]
pub fn CategoryAdminPage(api: Arc<dyn CategoryApi>) -> impl IntoView {
    let admin = use_category_admin(api);
    let form = CategoryForm::new();
    let notice: RwSignal<Option<(bool, String)>> = RwSignal::new(None);
    let saving = RwSignal::new(false);

    let categorias = admin.categorias;
    let loading = admin.loading;
    let error = admin.error;

    let on_submit = {
        let admin = admin.clone();
        move |_: leptos::ev::MouseEvent| {
            let admin = admin.clone();
            let dto = form.to_dto();
            let target = form.editing.get_untracked();
            saving.set(true);
            spawn_local(async move {
                let outcome = match target {
                    Some(id) => admin.update(id, dto).await,
                    None => admin.create(dto).await,
                };
                saving.set(false);
                if outcome.is_success() {
                    form.reset();
                }
                let done = if target.is_some() {
                    "Categoría actualizada"
                } else {
                    "Categoría creada"
                };
                notice.set(Some(notice_for(&outcome, done)));
            });
        }
    };

    let on_reload = {
        let admin = admin.clone();
        move |_: leptos::ev::MouseEvent| admin.retry()
    };

    view! {
        <div class="category-admin">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Categorías"</h1>
                    <Badge>{move || categorias.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_reload
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                    </Button>
                </div>
            </div>

            {move || notice.get().map(|(ok, text)| {
                let class = if ok { "alert alert--success" } else { "alert alert--error" };
                view! { <div class=class>{text}</div> }
            })}
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="category-admin__form">
                <h2>
                    {move || if form.editing.get().is_some() { "Editar categoría" } else { "Nueva categoría" }}
                </h2>
                <Flex vertical=true gap=FlexGap::Medium>
                    <Input value=form.nombre placeholder="Nombre" />
                    <Input value=form.slug placeholder="Slug (opcional)" />
                    <Input value=form.tipo_icono placeholder="Tipo de icono, p. ej. builtin:wrench o emoji" />
                    <Input value=form.icono placeholder="Icono (emoji, URL o nombre)" />
                    <Input value=form.color placeholder="#6366f1" />
                    <Input value=form.descripcion placeholder="Descripción" />
                    <label class="category-admin__active">
                        <input
                            type="checkbox"
                            prop:checked=move || form.activo.get()
                            on:change=move |ev| form.activo.set(event_target_checked(&ev))
                        />
                        " Activa"
                    </label>
                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_submit
                            disabled=Signal::derive(move || saving.get())
                        >
                            {icon("plus")}
                            {move || if form.editing.get().is_some() { " Guardar" } else { " Crear" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_: leptos::ev::MouseEvent| form.reset()
                        >
                            "Cancelar"
                        </Button>
                    </Flex>
                </Flex>
            </div>

            <div class="table-wrapper">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Icono"</th>
                            <th class="table__header-cell">"Nombre"</th>
                            <th class="table__header-cell">"Tipo"</th>
                            <th class="table__header-cell">"Estado"</th>
                            <th class="table__header-cell">"Empresas"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || categorias.get()
                            key=Category::clone
                            let:category
                        >
                            <AdminRow category=category admin=admin.clone() form=form notice=notice />
                        </For>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_for() {
        let refreshed = MutationOutcome {
            result: Ok(()),
            refreshed: true,
        };
        assert_eq!(notice_for(&refreshed, "Hecho"), (true, "Hecho".to_string()));

        let stale = MutationOutcome {
            result: Ok(()),
            refreshed: false,
        };
        let (ok, text) = notice_for(&stale, "Hecho");
        assert!(ok);
        assert!(text.starts_with("Hecho. No se pudo recargar"));

        let failed: MutationOutcome<()> = MutationOutcome {
            result: Err("Nombre duplicado".into()),
            refreshed: false,
        };
        assert_eq!(notice_for(&failed, "Hecho"), (false, "Nombre duplicado".to_string()));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty(" #fff ".into()), Some("#fff".to_string()));
    }
}
