use leptos::prelude::*;

use crate::domain::a001_category::resolver::CategoryIcon;
use crate::shared::icons::icon_sized;

/// Renders a resolved category icon
#[component]
pub fn CategoryIconView(icon: CategoryIcon) -> impl IntoView {
    match icon {
        CategoryIcon::Builtin { name, px } => view! {
            <span class="category-icon category-icon--builtin">{icon_sized(&name, px)}</span>
        }
        .into_any(),
        CategoryIcon::Image { src, px } => {
            let style = format!("width: {px}px; height: {px}px; object-fit: contain;");
            view! { <img class="category-icon category-icon--image" src=src alt="" style=style /> }
                .into_any()
        }
        CategoryIcon::Glyph { text, px } => {
            let style = format!("font-size: {px}px; line-height: 1;");
            view! { <span class="category-icon category-icon--glyph" style=style>{text}</span> }
                .into_any()
        }
        // legacy content is pre-rendered markup or text, inserted untouched
        CategoryIcon::Legacy(content) => view! {
            <span class="category-icon category-icon--legacy" inner_html=content></span>
        }
        .into_any(),
    }
}
