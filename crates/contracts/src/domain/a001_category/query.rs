use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::aggregate::Category;

/// Параметры запроса списка категорий
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListParams {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub active: Option<bool>,
    #[serde(rename = "includeInactive", skip_serializing_if = "Option::is_none", default)]
    pub include_inactive: Option<bool>,
    /// Произвольные параметры вызывающего кода
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl CategoryListParams {
    /// Базовый фильтр: только активные
    pub fn active_only() -> Self {
        Self {
            active: Some(true),
            ..Self::default()
        }
    }

    /// Базовый фильтр админки: включая неактивные
    pub fn with_inactive() -> Self {
        Self {
            include_inactive: Some(true),
            ..Self::default()
        }
    }

    /// Наложить параметры вызывающего кода поверх базовых: заданные поля побеждают
    pub fn merged_with(mut self, overrides: Option<CategoryListParams>) -> Self {
        let Some(overrides) = overrides else {
            return self;
        };
        if overrides.active.is_some() {
            self.active = overrides.active;
        }
        if overrides.include_inactive.is_some() {
            self.include_inactive = overrides.include_inactive;
        }
        self.extra.extend(overrides.extra);
        self
    }
}

/// Сводная статистика по загруженным категориям
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Только категории текущего формата (у старого нет `TipoIcono`)
    pub counts_by_icon_type: BTreeMap<String, usize>,
    pub with_businesses: usize,
}

impl CategoryStats {
    pub fn collect(categories: &[Category]) -> Self {
        let mut stats = CategoryStats {
            total: categories.len(),
            ..Self::default()
        };

        for category in categories {
            if category.is_active() {
                stats.active += 1;
            } else {
                stats.inactive += 1;
            }
            if let Some(icon_type) = category.icon_type() {
                *stats
                    .counts_by_icon_type
                    .entry(icon_type.to_string())
                    .or_insert(0) += 1;
            }
            if category.business_count().unwrap_or(0) > 0 {
                stats.with_businesses += 1;
            }
        }

        stats
    }
}

/// Поиск по уже загруженному набору
pub fn search_categories(categories: &[Category], term: &str) -> Vec<Category> {
    if term.trim().is_empty() {
        return categories.to_vec();
    }
    categories
        .iter()
        .filter(|c| c.matches_term(term))
        .cloned()
        .collect()
}

/// Точное совпадение по `TipoIcono`
pub fn filter_by_icon_type(categories: &[Category], icon_type: &str) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| c.icon_type() == Some(icon_type))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Category> {
        [
            json!({ "id": 1, "Nombre": "Plomería", "TipoIcono": "builtin:wrench", "Activo": true, "_count": { "Empresas": 2 } }),
            json!({ "id": 2, "Nombre": "Taxi", "Icono": "🚕" }),
            json!({ "id": 3, "Nombre": "Panadería", "TipoIcono": "emoji:🥖", "Activo": false, "Descripcion": "Pan artesanal" }),
            json!({ "id": 4, "Nombre": "Electricista", "TipoIcono": "builtin:wrench", "Activo": true, "_count": { "Empresas": 0 } }),
        ]
        .iter()
        .filter_map(Category::from_value)
        .collect()
    }

    #[test]
    fn test_stats() {
        let stats = CategoryStats::collect(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.active + stats.inactive, stats.total);
        assert_eq!(stats.counts_by_icon_type.get("builtin:wrench"), Some(&2));
        assert_eq!(stats.counts_by_icon_type.get("emoji:🥖"), Some(&1));
        assert_eq!(stats.counts_by_icon_type.values().sum::<usize>(), 3);
        assert_eq!(stats.with_businesses, 1);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(CategoryStats::collect(&[]), CategoryStats::default());
    }

    #[test]
    fn test_search() {
        let all = sample();
        assert_eq!(search_categories(&all, ""), all);
        assert_eq!(search_categories(&all, "   "), all);

        let found = search_categories(&all, "PLOMERÍA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Plomería");

        let by_description = search_categories(&all, "artesanal");
        assert_eq!(by_description[0].name(), "Panadería");

        assert!(search_categories(&all, "hotel").is_empty());
    }

    #[test]
    fn test_filter_by_icon_type() {
        let all = sample();
        let wrenches = filter_by_icon_type(&all, "builtin:wrench");
        assert_eq!(wrenches.len(), 2);
        assert!(filter_by_icon_type(&all, "builtin").is_empty());
    }

    #[test]
    fn test_merge_params() {
        let merged = CategoryListParams::active_only().merged_with(Some(CategoryListParams {
            active: Some(false),
            extra: BTreeMap::from([("ciudad".to_string(), "Quito".to_string())]),
            ..CategoryListParams::default()
        }));
        assert_eq!(merged.active, Some(false));
        assert_eq!(merged.include_inactive, None);
        assert_eq!(merged.extra.get("ciudad").map(String::as_str), Some("Quito"));

        assert_eq!(
            CategoryListParams::with_inactive().merged_with(None),
            CategoryListParams::with_inactive()
        );
    }
}
