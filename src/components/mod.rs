//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod chart;
pub mod pie_chart;
pub mod notifications;
pub mod friend_search;
pub mod loading;
pub mod toast;

pub use nav::Nav;
pub use chart::{CalorieChart, ChartDownloadLink, SeriesSpec};
pub use pie_chart::PieChart;
pub use notifications::NotificationBell;
pub use friend_search::{SearchBar, SearchResults};
pub use loading::InlineLoading;
pub use toast::Toast;
