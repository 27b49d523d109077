//! Address cell coloured by known-device match

use addressmon_table::MatchStatus;
use leptos::prelude::*;

/// Monospace address on a green (known) or salmon (unknown) background
#[component]
pub fn MatchCell(address: String, status: MatchStatus) -> impl IntoView {
    let style = format!(
        "padding: 0.5rem; font-family: monospace; background-color: {};",
        status.background()
    );

    view! {
        <td style=style>{address}</td>
    }
}
