pub mod admin;
pub mod api;
pub mod resolver;
pub mod store;
pub mod ui;

#[cfg(test)]
mod test_support;
