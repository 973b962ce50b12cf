//! Member profile page with the monthly calendar.

use dioxus::prelude::*;

use crate::components::MiniCalendar;
use crate::state::AppState;

#[component]
pub fn ProfilePage(id: i64) -> Element {
    let state = use_context::<AppState>();
    let session = state.session.read();
    let own_page = session.member_id() == Some(id);
    let heading = if own_page {
        session
            .profile
            .as_ref()
            .map_or_else(|| "My calendar".to_string(), |p| format!("{}'s calendar", p.nickname))
    } else {
        "Member calendar".to_string()
    };
    drop(session);

    rsx! {
        div {
            h1 { "{heading}" }
            MiniCalendar { key: "{id}", member_id: id }
        }
    }
}
