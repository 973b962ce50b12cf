//! Admin back office: member control list and the signup chart.

use dioxus::prelude::*;

use ladle_core::modal::TitleContentModal;
use ladle_core::models::{MemberRow, Role, SignupPoint};

use crate::state::AppState;

#[component]
pub fn AdminPage() -> Element {
    let mut state = use_context::<AppState>();
    let mut members = use_signal(Vec::<MemberRow>::new);
    let mut signups = use_signal(Vec::<SignupPoint>::new);

    let is_admin = state.session.read().is_admin();

    use_effect(move || {
        if !state.session.read().is_admin() {
            return;
        }
        let client = state.api.read().clone();
        spawn(async move {
            let Some(client) = client else { return };
            match client.admin_members().await {
                Ok(rows) => members.set(rows),
                Err(error) => {
                    tracing::warn!("Member list fetch failed: {}", error);
                    state.reject(error.user_message());
                }
            }
            match client.admin_signup_chart().await {
                Ok(points) => signups.set(points),
                Err(error) => {
                    tracing::warn!("Signup chart fetch failed: {}", error);
                    state.reject(error.user_message());
                }
            }
        });
    });

    if !is_admin {
        return rsx! {
            p { "Administrators only." }
        };
    }

    let points = signups();
    let max_count = points.iter().map(|point| point.count).max().unwrap_or(0);

    rsx! {
        div {
            h1 { "Back office" }

            h2 { "Signups per day" }
            if points.is_empty() {
                p { style: "color: #aaa;", "No signup data." }
            }
            div { style: "display: flex; flex-direction: column; gap: 4px; max-width: 480px;",
                for point in points {
                    ChartBar { key: "{point.date}", point, max_count }
                }
            }

            h2 { style: "margin-top: 24px;", "Members" }
            table { style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        th { style: "text-align: left; padding: 6px;", "Email" }
                        th { style: "text-align: left; padding: 6px;", "Nickname" }
                        th { style: "text-align: left; padding: 6px;", "Role" }
                        th { style: "text-align: left; padding: 6px;", "Registered" }
                        th { style: "text-align: left; padding: 6px;", "Status" }
                    }
                }
                tbody {
                    for member in members() {
                        MemberTableRow { key: "{member.id}", member }
                    }
                }
            }
        }
    }
}

#[component]
fn ChartBar(point: SignupPoint, max_count: i64) -> Element {
    let percent = if max_count > 0 {
        (point.count as f64 / max_count as f64) * 100.0
    } else {
        0.0
    };
    let width = format!("{percent:.0}");

    rsx! {
        div { style: "display: flex; align-items: center; gap: 8px;",
            span { style: "width: 90px; font-size: 12px; color: #888;", "{point.date}" }
            div { style: "flex: 1; background: #f0e9df; border-radius: 4px;",
                div { style: "height: 14px; width: {width}%; background: #e07a3f; border-radius: 4px;" }
            }
            span { style: "width: 32px; font-size: 12px;", "{point.count}" }
        }
    }
}

#[component]
fn MemberTableRow(member: MemberRow) -> Element {
    let mut state = use_context::<AppState>();
    let role = match member.role {
        Role::Admin => "Admin",
        Role::User => "User",
    };
    let status = if member.banned { "Banned" } else { "Active" };

    let show_detail = {
        let member = member.clone();
        move |_| {
            state.modals.write().set_title_content(TitleContentModal {
                title: member.nickname.clone(),
                content: format!(
                    "{}\n{role}\nRegistered {}\n{status}",
                    member.email, member.registered_at
                ),
            });
        }
    };

    rsx! {
        tr { style: "border-top: 1px solid #eee; cursor: pointer;", onclick: show_detail,
            td { style: "padding: 6px;", "{member.email}" }
            td { style: "padding: 6px;", "{member.nickname}" }
            td { style: "padding: 6px;", "{role}" }
            td { style: "padding: 6px;", "{member.registered_at}" }
            td { style: "padding: 6px;", "{status}" }
        }
    }
}
