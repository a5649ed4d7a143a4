pub mod aggregate;
pub mod decode;
pub mod query;

pub use aggregate::{Category, CategoryDto, CategoryId, CurrentCategory, LegacyCategory, DEFAULT_CATEGORY_COLOR};
pub use decode::{decode_category_list, DecodedList, MalformedPayload};
pub use query::{filter_by_icon_type, search_categories, CategoryListParams, CategoryStats};
