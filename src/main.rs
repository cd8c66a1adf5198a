//! CRM Dashboard
//!
//! Browser dashboard for the AminTAI CRM, built with Leptos (WASM).
//!
//! # Features
//!
//! - JWT bearer authentication backed by browser localStorage
//! - Role-aware dashboard with summary cards and detail tables
//! - Canvas charts for pipeline, lead, and campaign series
//! - Client-side row filtering with a debounced search box
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the CRM REST API over HTTP; the API itself lives
//! in a separate service.

use leptos::*;

mod api;
mod app;
mod auth;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
