//! Freelancer portfolio landing page.
//!
//! Static sections with smooth-scroll navigation between in-page anchors.
//! The only local state is which service card is highlighted.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::components::service_card::ServiceCard;
use crate::config::SiteConfig;
use crate::dom;
use crate::fixtures::SERVICES;
use crate::hover::HoverState;

fn scroll_to(id: &'static str) {
    if let Err(e) = dom::scroll_to_section(id) {
        log::warn!("Cannot scroll to section: {}", e);
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let show_form = config.show_contact_form;

    view! {
        <div class="landing-page">
            <style>{include_str!("landing.css")}</style>
            <NavBar />
            <HeroSection />
            <AboutSection />
            <ServicesSection />
            <ContactSection show_form=show_form />
            <Footer />
        </div>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <nav class="landing-nav">
            <div class="container nav-row">
                <div class="nav-brand">
                    <div class="initials-badge">{config.initials.clone()}</div>
                    <span class="nav-name">{config.owner_name.clone()}</span>
                </div>
                <div class="nav-links">
                    <button class="nav-link" on:click=move |_| scroll_to("about")>"About"</button>
                    <button class="nav-link" on:click=move |_| scroll_to("services")>"Services"</button>
                    <button class="nav-link" on:click=move |_| scroll_to("contact")>"Contact"</button>
                </div>
                <button class="btn btn-primary" on:click=move |_| scroll_to("contact")>
                    "Get in Touch"
                </button>
            </div>
        </nav>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <section class="hero">
            <div class="container hero-content">
                <span class="badge badge-outline">{config.tagline.clone()}</span>
                <h1 class="hero-title">
                    "Bringing Your"
                    <span class="hero-accent">"Ideas to Life"</span>
                </h1>
                <p class="hero-subtitle">
                    "Web Development | AI Solutions | Digital Marketing | Business Consulting"
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" on:click=move |_| scroll_to("contact")>
                        "Get in Touch"
                        <IconGlyph icon=Icon::ArrowRight />
                    </button>
                    <button class="btn btn-outline btn-lg" on:click=move |_| scroll_to("services")>
                        "View Services"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <section id="about" class="section section-tinted">
            <div class="container about-grid">
                <div class="about-copy">
                    <h2 class="section-title">"About Me"</h2>
                    <p>
                        "Hi, I'm "
                        <strong>{config.owner_name.clone()}</strong>
                        ", passionate about transforming your ideas into real business growth. \
                         From building websites to optimizing content and guiding your business \
                         strategy, I provide personalized solutions tailored to your needs."
                    </p>
                    <p>
                        "With expertise spanning web development, AI automation, digital marketing, \
                         and strategic consulting, I help entrepreneurs and businesses unlock their \
                         full potential in the digital landscape."
                    </p>
                    <div class="badge-row">
                        <span class="badge">"5+ Years Experience"</span>
                        <span class="badge">"100+ Projects"</span>
                        <span class="badge">"Global Clients"</span>
                    </div>
                </div>

                <div class="about-cards">
                    <div class="card mission-card">
                        <div class="card-heading">
                            <IconGlyph icon=Icon::Target class="text-primary" />
                            <h3>"My Mission"</h3>
                        </div>
                        <p class="text-muted">
                            "To empower businesses with cutting-edge digital solutions that drive \
                             growth, efficiency, and success in today's competitive market."
                        </p>
                    </div>
                    <div class="mini-stats">
                        <div class="card mini-stat">
                            <IconGlyph icon=Icon::Users class="text-primary" />
                            <div class="mini-stat-value">"50+"</div>
                            <div class="text-muted small">"Happy Clients"</div>
                        </div>
                        <div class="card mini-stat">
                            <IconGlyph icon=Icon::Zap class="text-primary" />
                            <div class="mini-stat-value">"24/7"</div>
                            <div class="text-muted small">"Support"</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    let hover = RwSignal::new(HoverState::default());

    view! {
        <section id="services" class="section">
            <div class="container">
                <div class="section-intro">
                    <h2 class="section-title">"My Services"</h2>
                    <p class="section-lead">
                        "Comprehensive digital solutions to help your business thrive in the modern landscape"
                    </p>
                </div>
                <div class="service-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| view! {
                            <ServiceCard service=*service index=index hover=hover />
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSection(show_form: bool) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let mailto = config.mailto();

    view! {
        <section id="contact" class="section section-tinted">
            <div class="container contact-content">
                <h2 class="section-title">"Let's Work Together"</h2>
                <p class="section-lead">
                    "Ready to bring your ideas to life? Get in touch and let's discuss how I can help your business grow."
                </p>

                <div class="contact-grid">
                    <div class="card contact-card">
                        <div class="contact-icon"><IconGlyph icon=Icon::Mail /></div>
                        <h3>"Email Me"</h3>
                        <p class="text-muted">"Drop me a line and I'll get back to you soon"</p>
                        <a href=mailto.clone() class="btn btn-outline">
                            {config.email.clone()}
                            <IconGlyph icon=Icon::ExternalLink />
                        </a>
                    </div>
                    <div class="card contact-card">
                        <div class="contact-icon"><IconGlyph icon=Icon::Phone /></div>
                        <h3>"WhatsApp"</h3>
                        <p class="text-muted">"Quick chat? Let's connect on WhatsApp"</p>
                        <a
                            href=config.whatsapp_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-outline"
                        >
                            "Chat on WhatsApp"
                            <IconGlyph icon=Icon::ExternalLink />
                        </a>
                    </div>
                </div>

                {show_form.then(|| view! { <ContactForm /> })}

                <a href=mailto class="btn btn-primary btn-lg">
                    "Start Your Project Today"
                    <IconGlyph icon=Icon::ArrowRight />
                </a>
            </div>
        </section>
    }
}

/// Presentation-only form: fields are `required` for the browser, and
/// submitting sends nothing.
#[component]
fn ContactForm() -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::debug!("Contact form submitted; no handler configured");
    };

    view! {
        <form class="card contact-form" on:submit=on_submit>
            <h3>"Send a Message"</h3>
            <label for="contact-name">"Name"</label>
            <input id="contact-name" name="name" type="text" class="input" required=true />
            <label for="contact-email">"Email"</label>
            <input id="contact-email" name="email" type="email" class="input" required=true />
            <label for="contact-message">"Message"</label>
            <textarea id="contact-message" name="message" rows="4" class="input" required=true></textarea>
            <button type="submit" class="btn btn-primary">"Send Message"</button>
        </form>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let year = dom::current_year();

    view! {
        <footer class="landing-footer">
            <div class="container footer-content">
                <div class="nav-brand">
                    <div class="initials-badge initials-badge-inverse">{config.initials.clone()}</div>
                    <span class="footer-name">{config.owner_name.clone()}</span>
                </div>
                <p class="footer-tagline">
                    "Web Developer, Digital Marketer & Business Consultant helping businesses grow \
                     through innovative digital solutions."
                </p>
                <div class="footer-links">
                    <a href=config.mailto() class="btn btn-ghost">
                        <IconGlyph icon=Icon::Mail />
                        "Email"
                    </a>
                    <a
                        href=config.whatsapp_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-ghost"
                    >
                        <IconGlyph icon=Icon::Phone />
                        "WhatsApp"
                    </a>
                </div>
                <p class="footer-copyright">
                    {format!("\u{00A9} {} {}. All rights reserved.", year, config.owner_name)}
                </p>
            </div>
        </footer>
    }
}
