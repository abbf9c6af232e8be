//! UI components for the recipe workspace

mod favorites_window;
mod notice;
mod recipe_view;
mod search_bar;

pub use favorites_window::FavoritesWindow;
pub use notice::NoticePopup;
pub use recipe_view::RecipeView;
pub use search_bar::SearchBar;
