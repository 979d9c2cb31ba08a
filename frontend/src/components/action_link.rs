//! Call-to-action link: routes in-app or opens an isolated new tab.

use leptos::*;
use leptos_router::A;

use super::button::{Button, ButtonSize};
use crate::content::{ActionTarget, CallToAction};

#[component]
pub fn ActionLink(action: CallToAction) -> impl IntoView {
    let face = view! {
        <Button size=ButtonSize::Lg variant=action.variant icon=action.icon class=action.class>
            {action.label}
        </Button>
    };

    match action.target {
        ActionTarget::Route(path) => view! {
            <A href=path class="cta-link">{face}</A>
        }
        .into_view(),
        ActionTarget::External(url) => view! {
            <a
                href=url
                target=action.target.target_attr()
                rel=action.target.rel_attr()
                class="cta-link"
            >
                {face}
            </a>
        }
        .into_view(),
    }
}
