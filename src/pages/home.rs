use leptos::*;
use crate::routes;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            // Hero
            <section class="hero">
                <h1>{ "🫀 OpenHeart Reviews" }</h1>
                <p class="hero-tagline">{ "A Privacy-First Review Platform" }</p>
                <p class="hero-pitch">{ "Share honest reviews anonymously. Better than MouthShut." }</p>
                <div class="hero-actions">
                    <a href=routes::NEW_REVIEW class="btn-primary">{ "Write a Review" }</a>
                    <a href=routes::CATEGORIES class="btn-secondary">{ "Browse Categories" }</a>
                </div>
            </section>

            <section class="features">
                <h2>{ "Why Choose OpenHeart?" }</h2>
                <div class="feature-grid">
                    <FeatureCard icon="🔒" title="Anonymous Posting" blurb="Write reviews without revealing your identity" />
                    <FeatureCard icon="🛡️" title="Email Privacy" blurb="Your email is NEVER shown publicly" />
                    <FeatureCard icon="🚫" title="No Tracking" blurb="Zero third-party analytics or cookies" />
                </div>
            </section>

            <section class="coming-soon">
                <h2>{ "🚀 Coming Soon" }</h2>
                <p>{ "We're building something amazing for you!" }</p>
                <p>{ "Full features launching soon: Categories, Reviews, User Dashboard, and more." }</p>
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{ icon }</div>
            <h3>{ title }</h3>
            <p>{ blurb }</p>
        </div>
    }
}
