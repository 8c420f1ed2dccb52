//! Dashboard page with aggregate counts and alert charts.

use leptos::prelude::*;

use crate::components::charts::{BarChart, LineChart, alerts_per_day, busiest_cameras, day_buckets_ending};
use crate::components::loading::LoadingScreen;
use crate::components::sidebar::Sidebar;
use crate::net::api;
use crate::net::types::{Alert, Camera, Employee, SecurityUser};
use crate::state::session::use_session;
use crate::util::time;

const TREND_DAYS: usize = 7;
const TOP_CAMERAS: usize = 5;

/// Everything the dashboard shows, fetched in one pass. The personnel
/// collections stay `None` for non-admin sessions, whose accounts may not
/// read them.
#[derive(Clone, Debug, Default)]
struct DashboardData {
    alerts: Vec<Alert>,
    cameras: Vec<Camera>,
    employees: Option<Vec<Employee>>,
    security: Option<Vec<SecurityUser>>,
}

fn active_alert_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|alert| alert.status == "active").count()
}

/// Dashboard page — stat tiles plus the 7-day alert trend and the busiest
/// cameras.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    let data = LocalResource::new(move || {
        let admin = session.with(crate::state::session::Session::is_admin);
        async move {
            let alerts = api::fetch_alerts().await.unwrap_or_default();
            let cameras = api::fetch_cameras().await.unwrap_or_default();
            let (employees, security) = if admin {
                (
                    api::fetch_employees().await,
                    api::fetch_security_users().await,
                )
            } else {
                (None, None)
            };
            DashboardData {
                alerts,
                cameras,
                employees,
                security,
            }
        }
    });

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <h1 class="page__title">"Overview"</h1>
                <Suspense fallback=|| view! { <LoadingScreen/> }>
                    {move || {
                        data.get()
                            .map(|data| {
                                let buckets = day_buckets_ending(time::now_ms(), TREND_DAYS);
                                let counts = alerts_per_day(&data.alerts, &buckets);
                                let labels: Vec<String> =
                                    buckets.into_iter().map(|bucket| bucket.label).collect();
                                let top = busiest_cameras(&data.alerts, TOP_CAMERAS);
                                view! {
                                    <section class="stat-row">
                                        <StatTile label="Cameras" value=data.cameras.len()/>
                                        <StatTile
                                            label="Active alerts"
                                            value=active_alert_count(&data.alerts)
                                        />
                                        {data
                                            .employees
                                            .as_ref()
                                            .map(|employees| {
                                                view! {
                                                    <StatTile
                                                        label="Employees"
                                                        value=employees.len()
                                                    />
                                                }
                                            })}
                                        {data
                                            .security
                                            .as_ref()
                                            .map(|security| {
                                                view! {
                                                    <StatTile
                                                        label="Security personnel"
                                                        value=security.len()
                                                    />
                                                }
                                            })}
                                    </section>
                                    <section class="chart-row">
                                        <LineChart
                                            title="Alerts, last 7 days"
                                            labels=labels
                                            values=counts
                                        />
                                        <BarChart title="Most active cameras" series=top/>
                                    </section>
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

/// One aggregate number with its caption.
#[component]
fn StatTile(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{value}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}
