//! Alert list with status filtering.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use leptos::prelude::*;

use crate::components::loading::LoadingScreen;
use crate::components::sidebar::Sidebar;
use crate::net::api;
use crate::net::types::Alert;

/// Which slice of the alert list is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Resolved,
}

impl StatusFilter {
    fn matches(self, alert: &Alert) -> bool {
        match self {
            Self::All => true,
            Self::Active => alert.status == "active",
            Self::Resolved => alert.status == "resolved",
        }
    }
}

fn filter_alerts(alerts: &[Alert], filter: StatusFilter) -> Vec<Alert> {
    alerts
        .iter()
        .filter(|alert| filter.matches(alert))
        .cloned()
        .collect()
}

/// (all, active, resolved) counts for the filter buttons.
fn status_counts(alerts: &[Alert]) -> (usize, usize, usize) {
    let active = alerts.iter().filter(|a| a.status == "active").count();
    let resolved = alerts.iter().filter(|a| a.status == "resolved").count();
    (alerts.len(), active, resolved)
}

/// Where the alert came from, for the table's source column.
fn location_label(alert: &Alert) -> String {
    match (&alert.camera_name, &alert.zone_name) {
        (Some(camera), Some(zone)) => format!("{camera} / {zone}"),
        (Some(camera), None) => match &alert.camera_location {
            Some(location) => format!("{camera} ({location})"),
            None => camera.clone(),
        },
        (None, _) => match alert.camera_id {
            Some(id) => format!("Camera #{id}"),
            None => "Unknown source".to_owned(),
        },
    }
}

/// Alerts page — filterable table of raised alerts.
#[component]
pub fn AlertsPage() -> impl IntoView {
    let alerts = LocalResource::new(|| async { api::fetch_alerts().await.unwrap_or_default() });
    let filter = RwSignal::new(StatusFilter::default());

    let filter_button = move |label: &'static str, value: StatusFilter, count: usize| {
        view! {
            <button
                class="filter-btn"
                class=("filter-btn--active", move || filter.get() == value)
                on:click=move |_| filter.set(value)
            >
                {format!("{label} ({count})")}
            </button>
        }
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <h1 class="page__title">"Alerts"</h1>
                <Suspense fallback=|| view! { <LoadingScreen/> }>
                    {move || {
                        alerts
                            .get()
                            .map(|list| {
                                let (all, active, resolved) = status_counts(&list);
                                let visible = filter_alerts(&list, filter.get());
                                view! {
                                    <div class="filter-row">
                                        {filter_button("All", StatusFilter::All, all)}
                                        {filter_button("Active", StatusFilter::Active, active)}
                                        {filter_button(
                                            "Resolved",
                                            StatusFilter::Resolved,
                                            resolved,
                                        )}
                                    </div>
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Status"</th>
                                                <th>"Source"</th>
                                                <th>"Raised"</th>
                                                <th>"Message"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {visible
                                                .into_iter()
                                                .map(|alert| {
                                                    let id = alert.id;
                                                    let status_class = if alert.status == "active" {
                                                        "table__status table__status--active"
                                                    } else {
                                                        "table__status"
                                                    };
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                <span class=status_class>
                                                                    {alert.status.clone()}
                                                                </span>
                                                            </td>
                                                            <td>{location_label(&alert)}</td>
                                                            <td>
                                                                {alert
                                                                    .created_at
                                                                    .clone()
                                                                    .unwrap_or_default()}
                                                            </td>
                                                            <td>
                                                                {alert.message.clone().unwrap_or_default()}
                                                            </td>
                                                            <td>
                                                                <a
                                                                    href=format!("/alerts/{id}")
                                                                    class="btn"
                                                                >
                                                                    "View"
                                                                </a>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
