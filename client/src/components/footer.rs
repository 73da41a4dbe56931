//! Marketing footer for the landing page.

use chrono::Datelike;
use leptos::prelude::*;

const COMPANY_LINKS: [&str; 3] = ["About Us", "Careers", "Blog"];
const SUPPORT_LINKS: [&str; 3] = ["Help Center", "Contact Us", "Privacy Policy"];
const SOCIAL_LINKS: [&str; 3] = ["Twitter", "LinkedIn", "Instagram"];

fn link_list(labels: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="footer__list">
            {labels.iter().map(|label| view! { <li><a class="footer__link" href="#">{*label}</a></li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <h2>"Xeno FDE Store"</h2>
                    <p>"Empowering retailers with Shopify Data & actionable customer insights."</p>
                </div>
                <div class="footer__columns">
                    <div>
                        <h3>"Company"</h3>
                        {link_list(&COMPANY_LINKS)}
                    </div>
                    <div>
                        <h3>"Support"</h3>
                        {link_list(&SUPPORT_LINKS)}
                    </div>
                </div>
                <div class="footer__social">
                    <h3>"Follow Us"</h3>
                    <div class="footer__social-links">
                        {SOCIAL_LINKS.iter().map(|label| view! { <a class="footer__link" href="#">{*label}</a> }).collect_view()}
                    </div>
                    <p>"Subscribe for updates:"</p>
                    <form class="footer__subscribe" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                        <input type="email" placeholder="Your email"/>
                        <button type="submit">"Subscribe"</button>
                    </form>
                </div>
            </div>
            <div class="footer__bottom">
                <p>
                    {format!("© {year} Xeno FDE Store. Built with ❤️ for the ")}
                    <span class="footer__accent">"Xeno FDE Internship 2025"</span>
                    "."
                </p>
            </div>
        </footer>
    }
}
