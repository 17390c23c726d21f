//! Category Pills Component
//!
//! Horizontal row of category filter pills. The selected pill gets the
//! filled rose gradient; the rest stay on white.

use dioxus::prelude::*;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// List of available categories, "Todas" first
    pub categories: Vec<String>,
    /// Currently selected category
    pub selected: String,
    /// Handler called when a category is selected
    pub on_select: EventHandler<String>,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| "Todas".to_string());
///
/// rsx! {
///     CategoryPills {
///         categories: vec!["Todas".to_string(), "Amor".to_string()],
///         selected: selected(),
///         on_select: move |cat| selected.set(cat),
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Filtro de categorías",
            for cat in props.categories.iter() {
                {
                    let cat_clone = cat.clone();
                    let is_selected = selected == *cat;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: if is_selected { "pill pill--selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(cat_clone.clone());
                            },
                            "{cat}"
                        }
                    }
                }
            }
        }
    }
}
