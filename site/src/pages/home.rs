//! The portfolio page: every section in document order.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::contact_form::ContactForm;
use crate::components::email_link::EmailLink;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::reveal::Reveal;
use crate::components::skills::SkillsPanel;
use crate::components::stats::StatsPanel;
use crate::content::{Portfolio, Project};
use crate::state::reveal::RevealState;

#[component]
pub fn HomePage() -> impl IntoView {
    provide_context(RwSignal::new(RevealState::default()));

    match Portfolio::load() {
        Ok(portfolio) => view! { <PortfolioPage portfolio/> }.into_any(),
        Err(e) => {
            log::error!("portfolio content is malformed: {e}");
            view! { <p class="content-error">"This page is temporarily unavailable."</p> }.into_any()
        }
    }
}

#[component]
fn PortfolioPage(portfolio: Portfolio) -> impl IntoView {
    let Portfolio { name, title, tagline, email, about, stats, skills, projects, socials } = portfolio;

    view! {
        <NavBar brand=name.clone()/>
        <main>
            <Hero name=name.clone() title tagline/>

            <section id="about" class="section about">
                <h2 class="section__title">"About Me"</h2>
                <Reveal id="about-content" class="about__content">
                    {about.into_iter().map(|p| view! { <p class="about__text">{p}</p> }).collect_view()}
                </Reveal>
                <StatsPanel stats/>
            </section>

            <section id="skills" class="section skills-section">
                <h2 class="section__title">"Skills"</h2>
                <SkillsPanel groups=skills/>
            </section>

            <section id="projects" class="section projects">
                <h2 class="section__title">"Projects"</h2>
                <div class="projects__grid">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard index=i project/> })
                        .collect_view()}
                </div>
            </section>

            <section id="contact" class="section contact">
                <h2 class="section__title">"Get In Touch"</h2>
                <Reveal id="contact-content" class="contact__content">
                    <div class="contact__info">
                        <p>"Have a project in mind or just want to say hello? Drop me a line."</p>
                        <EmailLink email/>
                    </div>
                    <ContactForm/>
                </Reveal>
            </section>
        </main>

        <footer class="footer">
            <ul class="footer__socials">
                {socials
                    .into_iter()
                    .map(|s| {
                        view! {
                            <li>
                                <a href=s.url target="_blank" rel="noopener noreferrer">
                                    {s.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="footer__copy">{format!("© {name}")}</p>
        </footer>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    let id = format!("project-{index}");
    let Project { title, description, tags, link } = project;

    view! {
        <Reveal id class="project-card">
            <h3 class="project-card__title">{title}</h3>
            <p class="project-card__description">{description}</p>
            <ul class="project-card__tags">
                {tags.into_iter().map(|t| view! { <li class="project-card__tag">{t}</li> }).collect_view()}
            </ul>
            {link
                .map(|href| {
                    view! {
                        <a class="project-card__link" href=href target="_blank" rel="noopener noreferrer">
                            "View project →"
                        </a>
                    }
                })}
        </Reveal>
    }
}
