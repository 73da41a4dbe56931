//! Public landing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <div class="home">
            <div class="home__blob home__blob--a" aria-hidden="true"></div>
            <div class="home__blob home__blob--b" aria-hidden="true"></div>
            <div class="home__hero">
                <div class="home__copy">
                    <h1 class="home__title">"Xeno FDE Project Store"</h1>
                    <p class="home__lead">
                        "Empowering enterprise retailers with seamless "
                        <span class="home__accent">"Shopify Data Ingestion"</span>
                        " & actionable "
                        <span class="home__accent">"customer insights"</span>
                        ". Your journey into next-gen e-commerce intelligence starts here."
                    </p>
                    <div class="home__cta">
                        <a class="btn btn--primary" href="/register">"Get Started"</a>
                        <a class="btn btn--outline" href="/learnMore">"Learn More"</a>
                    </div>
                </div>
                <div class="home__art" aria-hidden="true">"📊"</div>
            </div>
        </div>
        <Footer/>
    }
}
