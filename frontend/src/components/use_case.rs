//! Placeholder for the `/use-case` view; the research console lives
//! outside this crate.

use leptos::*;
use leptos_router::A;

#[component]
pub fn UseCasePage() -> impl IntoView {
    view! {
        <section class="use-case">
            <h2>"Use Case"</h2>
            <p>"The research console loads here."</p>
            <A href="/" class="cta-link">"← Back"</A>
        </section>
    }
}
