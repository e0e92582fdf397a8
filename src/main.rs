//! CalorieTracker Dashboard
//!
//! Browser-side presentation layer for the calorie tracking web app,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Caloric intake trend and goal-breakdown charts with image download
//! - In-page notification panel with server acknowledgement
//! - Live search-as-you-type friend finder
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The server template injects page data (time series, friend
//! lists, CSRF token) as JS globals; they are snapshotted once into a typed
//! `PageContext` at startup. State-changing calls go to the JSON API over
//! HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
