//! In-page anchor links that animate-scroll instead of jump-scrolling.
//!
//! Default navigation is suppressed for every fragment href; the target
//! lookup happens afterwards, and a missing target is a silent no-op.

use dioxus::prelude::*;
use overture_core::anchor::{self, AnchorAction};

#[component]
pub fn AnchorLink(href: String, label: String) -> Element {
    let target = href.clone();

    rsx! {
        a {
            class: "anchor-link",
            href: "{href}",
            onclick: move |evt| {
                // Non-fragment hrefs keep their default behavior
                if target.starts_with('#') {
                    evt.prevent_default();
                    let href = target.clone();
                    spawn(async move {
                        scroll_to_fragment(&href).await;
                    });
                }
            },
            "{label}"
        }
    }
}

/// Resolve a fragment href against the live document and scroll if the
/// target exists.
async fn scroll_to_fragment(href: &str) {
    let Some(id) = href.strip_prefix('#') else {
        return;
    };

    let probe = format!("return !!document.getElementById({id:?})");
    let exists = document::eval(&probe)
        .await
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    match anchor::resolve(href, |_| exists) {
        AnchorAction::SmoothScroll(id) => {
            let js = format!(
                "document.getElementById({id:?})?.scrollIntoView({{behavior:'smooth',block:'start'}})"
            );
            document::eval(&js);
        }
        AnchorAction::Suppress => {
            tracing::debug!(href, "anchor target missing, jump suppressed");
        }
        AnchorAction::PassThrough => {}
    }
}
