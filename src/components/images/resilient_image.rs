//! Resilient Image Display
//!
//! Renders a Drive-hosted photo by walking the candidate URLs from
//! [`anchetas_core::resolver`] until one loads. The webview's load and
//! error events drive the state machine; a watchdog timer covers
//! candidates that never answer either way. A stale watchdog is made
//! inert by an [`AttemptToken`] identity check, so it can never fail a
//! later candidate or a different item.

use anchetas_core::{resolver, ImageResolution};
use dioxus::prelude::*;

/// Display a product photo with loading state and terminal fallback
///
/// # Examples
///
/// ```rust
/// rsx! {
///     ResilientImage {
///         share_link: item.share_link.clone(),
///         alt: item.name.clone(),
///     }
/// }
/// ```
#[component]
pub fn ResilientImage(
    /// Drive share link from the item record
    share_link: ReadOnlySignal<String>,
    /// Alt text for accessibility
    alt: String,
    /// Optional CSS class for the img element
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let mut resolution = use_signal(|| ImageResolution::new(&share_link.peek()));

    // Reset when the owning item's share link changes. This runs before
    // any pending watchdog can fire for the old link: rebind bumps the
    // generation, so the old timer's token check fails.
    use_effect(move || {
        let link = share_link();
        if resolution.peek().share_link() != link {
            resolution.write().rebind(&link);
        }
    });

    // Watchdog: a candidate that neither loads nor errors within the
    // timeout is treated exactly like an error. Each pending attempt
    // arms one timer; the token makes every superseded timer a no-op.
    use_effect(move || {
        let Some(armed) = resolution.read().pending_token() else {
            return;
        };
        spawn(async move {
            tokio::time::sleep(resolver::LOAD_TIMEOUT).await;
            let mut res = resolution.write();
            if res.pending_token() == Some(armed) {
                tracing::warn!("Image load timed out, trying next candidate");
                res.advance();
            }
        });
    });

    let css_class = class.unwrap_or_else(|| "card-image__img".to_string());
    let current = resolution.read().current_url().map(str::to_string);
    let loaded = resolution.read().is_loaded();

    rsx! {
        if let Some(url) = current {
            if !loaded {
                div { class: "card-image__loading",
                    div { class: "spinner" }
                }
            }
            img {
                class: if loaded { "{css_class}" } else { "{css_class} card-image__img--hidden" },
                src: "{url}",
                alt: "{alt}",
                onload: move |_| resolution.write().mark_loaded(),
                onerror: move |_| resolution.write().advance(),
            }
        } else {
            // Exhausted: placeholder, plus a way out to the original
            // resource when the item has one
            div { class: "card-image__placeholder",
                span { class: "card-image__placeholder-icon", "🎁" }
                if !share_link().is_empty() {
                    button {
                        class: "card-image__drive-link",
                        onclick: move |e| {
                            e.stop_propagation();
                            let url = share_link.peek().clone();
                            if let Err(err) = opener::open(&url) {
                                tracing::error!("Failed to open Drive link: {}", err);
                            }
                        },
                        "Ver imagen en Drive"
                    }
                }
            }
        }
    }
}
