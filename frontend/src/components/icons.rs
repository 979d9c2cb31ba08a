//! Inline SVG icons (lucide outlines).

use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    PlayCircle,
}

#[component]
pub fn IconSvg(
    icon: Icon,
    /// Extra classes for sizing/placement
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let shape = match icon {
        Icon::ArrowRight => view! {
            <path d="M5 12h14"/>
            <path d="m12 5 7 7-7 7"/>
        }
        .into_view(),
        Icon::PlayCircle => view! {
            <circle cx="12" cy="12" r="10"/>
            <polygon points="10 8 16 12 10 16 10 8"/>
        }
        .into_view(),
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=format!("icon {}", class)
        >
            {shape}
        </svg>
    }
}
