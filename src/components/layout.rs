use leptos::*;
use crate::routes;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <a href=routes::HOME class="site-brand">{ "🫀 OpenHeart" }</a>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{ "© 2025 OpenHeart Reviews. Made with ❤️ for honest reviews." }</p>
        </footer>
    }
}
