pub mod admin_page;
pub mod badge_list;
pub mod directory;
pub mod grid;
pub mod home;
pub mod icon_view;
pub mod scroller;
pub mod tile;

pub use admin_page::CategoryAdminPage;
pub use badge_list::CategoryBadgeList;
pub use directory::CategoryDirectory;
pub use grid::CategoryGrid;
pub use home::HomeCategories;
pub use icon_view::CategoryIconView;
pub use scroller::CategoryScroller;
pub use tile::CategoryTile;
