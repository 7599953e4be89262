//! PYQ Analyzer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading previous year question papers
//! to the analysis service and browsing the ranked question groups it
//! returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (analysis service status)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadSection or ResultsSection                        │
//! │                        └── QuestionCard (one per group)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Wire model and error taxonomy
//! - [`controller`] - Upload state machine
//! - [`ranking`] - Filtering, ranks and card state for the results view
//! - [`components`] - UI components (Header, Upload, Results, etc.)
//! - [`services`] - Analysis service communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod controller;
pub mod ranking;
pub mod components;
pub mod services;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Analysis
    AnalysisResult, Priority, RankedQuestion, Variant,
    // Service
    HealthStatus,
    // Errors
    AppError, AppResult, TransportError, ValidationError,
};

// State
pub use controller::{AnalysisRequest, PaperFile, UploadController, UploadPhase};
pub use ranking::{PriorityFilter, SummaryStats, VariantDisclosure};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Session state; nothing survives a reload
    let upload = create_rw_signal(UploadController::<File>::new());

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            // Upload view until a result arrives, results view afterwards
            <Show
                when=move || upload.with(|u| u.result().is_none())
                fallback=move || view! { <ResultsSection upload=upload/> }
            >
                <UploadSection upload=upload/>
            </Show>
        </div>

        <Footer/>
    }
}
