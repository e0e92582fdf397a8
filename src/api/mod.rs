//! API Layer
//!
//! HTTP client functions for the calorie tracker backend.

pub mod client;

pub use client::{
    clear_all_notifications, clear_notification, fetch_usernames, send_friend_request, UserEntry,
};
