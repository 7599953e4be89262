use leptos::*;

use crate::services::check_health;

/// Status text for the header badge; `None` while the probe is pending.
pub fn service_status_label(online: Option<bool>) -> &'static str {
    match online {
        None => "Checking service...",
        Some(true) => "Service online",
        Some(false) => "Service offline",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (service_online, set_service_online) = create_signal(None::<bool>);

    // Probe the analysis service once at mount
    spawn_local(async move {
        match check_health().await {
            Ok(status) => {
                log::info!("🩺 Analysis service status: {}", status.status);
                set_service_online.set(Some(status.is_ok()));
            }
            Err(e) => {
                log::warn!("Analysis service unreachable: {}", e.detail());
                set_service_online.set(Some(false));
            }
        }
    });

    let online = move || service_online.get() == Some(true);

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"PYQ ANALYZER"</a>
            </div>
            <div class="header-right">
                <div class="service-status" class:connected=online>
                    <span class="status-dot" class:connected=online></span>
                    <span>{move || service_status_label(service_online.get())}</span>
                </div>
            </div>
        </header>
    }
}
