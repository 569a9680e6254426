//! Skill tags that fade in with a per-tag stagger.

use leptos::prelude::*;

use crate::components::reveal::watch_section;
use crate::content::SkillGroup;
use crate::state::reveal::{SkillsState, skill_tag_delay_ms};

const SKILLS_ID: &str = "skills";

#[component]
pub fn SkillsPanel(groups: Vec<SkillGroup>) -> impl IntoView {
    let skills = RwSignal::new(SkillsState::default());

    watch_section(SKILLS_ID, move |top, viewport_height| {
        skills.try_update(|s| s.on_scroll(top, viewport_height));
    });

    // Stagger runs across all groups, not per group.
    let mut index = 0_usize;
    let groups = groups
        .into_iter()
        .map(|group| {
            let tags = group
                .tags
                .into_iter()
                .map(|tag| {
                    let delay = skill_tag_delay_ms(index);
                    index += 1;
                    view! {
                        <span
                            class="skill-tag"
                            class:visible=move || skills.get().visible()
                            style=format!("transition-delay: {delay}ms;")
                        >
                            {tag}
                        </span>
                    }
                })
                .collect_view();
            view! {
                <div class="skills__group">
                    <h3 class="skills__group-name">{group.name}</h3>
                    <div class="skills__tags">{tags}</div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="skills">{groups}</div> }
}
