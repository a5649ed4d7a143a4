use serde::{Deserialize, Serialize};
use crate::shared::color::is_hex_color;

/// Цвет категории, если `ColorPrimario` отсутствует или не распознан
pub const DEFAULT_CATEGORY_COLOR: &str = "#6366f1";

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор категории (числовой на стороне бэкенда)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Разбор ID из строки (поля форм, параметры URL)
    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid category id: {}", e))
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Category
// ============================================================================

/// Категория в старом формате: только имя и готовое содержимое иконки
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegacyCategory {
    /// Отсутствует, если запись пришла простой строкой
    pub id: Option<CategoryId>,
    pub name: String,
    pub icon_content: String,
}

/// Категория в текущем формате
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrentCategory {
    pub id: CategoryId,
    pub name: String,
    pub slug: Option<String>,
    /// Значение `TipoIcono` как есть, например `builtin:wrench` или `emoji`
    pub icon_type: String,
    /// `Icono` текущего формата: значение для вида иконки без `:value`
    pub icon_value: Option<String>,
    /// `ColorPrimario` как есть; проверка формата выполняется при отрисовке
    pub color: Option<String>,
    pub active: bool,
    pub description: Option<String>,
    pub business_count: Option<u32>,
}

/// Категория каталога. Любая запись бэкенда приводится к одному из двух вариантов
/// в `decode`, дальше код работает только с этим типом.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Legacy(LegacyCategory),
    Current(CurrentCategory),
}

impl Category {
    pub fn id(&self) -> Option<CategoryId> {
        match self {
            Category::Legacy(c) => c.id,
            Category::Current(c) => Some(c.id),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Category::Legacy(c) => &c.name,
            Category::Current(c) => &c.name,
        }
    }

    /// Явный `Slug` либо `"{Nombre}-{id}"`
    pub fn slug(&self) -> String {
        match self {
            Category::Current(c) => match &c.slug {
                Some(slug) => slug.clone(),
                None => format!("{}-{}", c.name, c.id),
            },
            Category::Legacy(c) => match c.id {
                Some(id) => format!("{}-{}", c.name, id),
                None => c.name.clone(),
            },
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Category::Legacy(_) => None,
            Category::Current(c) => c.description.as_deref(),
        }
    }

    pub fn icon_type(&self) -> Option<&str> {
        match self {
            Category::Legacy(_) => None,
            Category::Current(c) => Some(&c.icon_type),
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            Category::Legacy(_) => None,
            Category::Current(c) => c.color.as_deref(),
        }
    }

    /// Старый формат не знает флага активности и считается активным
    pub fn is_active(&self) -> bool {
        match self {
            Category::Legacy(_) => true,
            Category::Current(c) => c.active,
        }
    }

    pub fn business_count(&self) -> Option<u32> {
        match self {
            Category::Legacy(_) => None,
            Category::Current(c) => c.business_count,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Category::Legacy(_))
    }

    /// Регистронезависимый поиск подстроки по имени, описанию и slug.
    /// Пустой (или из пробелов) запрос совпадает со всем.
    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.name().to_lowercase().contains(&needle)
            || self
                .description()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false)
            || self.slug().to_lowercase().contains(&needle)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления категории (имена полей бэкенда)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Slug", skip_serializing_if = "Option::is_none", default)]
    pub slug: Option<String>,
    #[serde(rename = "TipoIcono")]
    pub tipo_icono: String,
    #[serde(rename = "Icono", skip_serializing_if = "Option::is_none", default)]
    pub icono: Option<String>,
    #[serde(rename = "ColorPrimario", skip_serializing_if = "Option::is_none", default)]
    pub color_primario: Option<String>,
    #[serde(rename = "Descripcion", skip_serializing_if = "Option::is_none", default)]
    pub descripcion: Option<String>,
    #[serde(rename = "Activo")]
    pub activo: bool,
}

impl Default for CategoryDto {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            slug: None,
            tipo_icono: "builtin:tag".to_string(),
            icono: None,
            color_primario: Some(DEFAULT_CATEGORY_COLOR.to_string()),
            descripcion: None,
            activo: true,
        }
    }
}

impl CategoryDto {
    /// Заполнение формы из существующей категории.
    /// Для старого формата переносятся только имя и иконка.
    pub fn from_category(category: &Category) -> Self {
        match category {
            Category::Current(c) => Self {
                nombre: c.name.clone(),
                slug: c.slug.clone(),
                tipo_icono: c.icon_type.clone(),
                icono: c.icon_value.clone(),
                color_primario: c.color.clone(),
                descripcion: c.description.clone(),
                activo: c.active,
            },
            Category::Legacy(c) => Self {
                nombre: c.name.clone(),
                icono: Some(c.icon_content.clone()).filter(|s| !s.is_empty()),
                ..Self::default()
            },
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre es obligatorio".into());
        }
        if self.tipo_icono.trim().is_empty() {
            return Err("El tipo de icono es obligatorio".into());
        }
        if let Some(color) = self.color_primario.as_deref() {
            if !color.trim().is_empty() && !is_hex_color(color) {
                return Err("El color debe tener el formato #rrggbb".into());
            }
        }
        if let Some(slug) = self.slug.as_deref() {
            if slug.chars().any(char::is_whitespace) {
                return Err("El slug no puede contener espacios".into());
            }
        }
        Ok(())
    }
}
