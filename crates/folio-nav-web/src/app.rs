//! Portfolio page shell: navigation plus the sections it links to

use leptos::prelude::*;

use crate::components::NavHeader;

/// Placeholder section so the navigation has targets to scroll to
#[component]
fn PortfolioSection(id: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <section id=id class="min-h-screen px-8 py-16">
            <h2 class="text-3xl font-bold mb-6">{title}</h2>
        </section>
    }
}

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="lg:flex">
            <NavHeader />
            <main class="flex-1">
                <PortfolioSection id="hero" title="Hi, I'm K" />
                <PortfolioSection id="about" title="About" />
                <PortfolioSection id="skills" title="Skills" />
                <PortfolioSection id="projects" title="Projects" />
                <PortfolioSection id="experience" title="Experience" />
                <PortfolioSection id="contact" title="Contact" />
            </main>
        </div>
    }
}
