//! Feature overview reachable from the landing page.

use leptos::prelude::*;

/// `(title, subtitle, icon)` per feature card.
const FEATURES: [(&str, &str, &str); 6] = [
    ("Multi-Tenant Support", "Manage multiple Shopify stores securely", "👥"),
    ("Real-Time Dashboard", "Track orders, revenue & customers live", "📊"),
    ("Customer Insights", "Identify top customers & trends", "⚙"),
    ("Automated Data Sync", "Keep Shopify data up-to-date automatically", "🔄"),
    ("Secure Authentication", "Email-based login ensures tenant data privacy", "🛡"),
    ("Insights Visualization", "Charts & graphs to see trends at a glance", "📈"),
];

#[component]
pub fn LearnMorePage() -> impl IntoView {
    view! {
        <div class="learn-more">
            <h1 class="learn-more__title">"Smart Features, Smarter Store"</h1>
            <div class="learn-more__grid">
                {FEATURES
                    .iter()
                    .map(|(title, subtitle, icon)| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-card__icon" aria-hidden="true">{*icon}</div>
                                <h2 class="feature-card__title">{*title}</h2>
                                <p class="feature-card__subtitle">{*subtitle}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
