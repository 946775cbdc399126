//! Notification area of one section.

use crate::state::DashboardState;
use covid_state::{NoticeRegion, Severity};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NotificationBoxProps {
    pub region: NoticeRegion,
}

fn severity_style(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "background: #E3F2FD; color: #0D47A1; border: 1px solid #90CAF9;",
        Severity::Success => "background: #E8F5E9; color: #1B5E20; border: 1px solid #A5D6A7;",
        Severity::Error => "background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A;",
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "alert alert-info",
        Severity::Success => "alert alert-success",
        Severity::Error => "alert alert-danger",
    }
}

/// Displays the current notice of `region`, or nothing once it is hidden.
#[component]
pub fn NotificationBox(props: NotificationBoxProps) -> Element {
    let dash = use_context::<DashboardState>();
    let notice = dash.ui.read().notifications.current(props.region).cloned();
    let id = match props.region {
        NoticeRegion::Query => "query-message",
        NoticeRegion::Management => "management-message",
    };

    let Some(notice) = notice else {
        return rsx! {
            div { id: "{id}", style: "display: none;" }
        };
    };

    let style = format!(
        "padding: 12px 16px; margin: 8px 0; border-radius: 4px; {}",
        severity_style(notice.severity)
    );

    rsx! {
        div {
            id: "{id}",
            role: "alert",
            class: severity_class(notice.severity),
            style: "{style}",
            "{notice.message}"
        }
    }
}
