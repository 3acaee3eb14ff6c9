use leptos::prelude::*;

use crate::portfolio::{Experience, TimelineSide, EXPERIENCES};

use super::{
    icon_view,
    reveal::{stagger_delay_ms, Direction, Reveal},
};

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-6">
            <div class="max-w-4xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-green-400 to-blue-400 bg-clip-text text-transparent">
                        "Experience Timeline"
                    </h2>
                    <p class="text-gray-400 text-lg">
                        "My journey in data science and AI engineering"
                    </p>
                </Reveal>
                <div class="relative">
                    // spine
                    <div class="absolute left-1/2 -translate-x-1/2 w-1 h-full bg-gradient-to-b from-blue-400 via-purple-400 to-pink-400 rounded-full" />
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(index, &exp)| view! { <TimelineEntry index=index exp=exp /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(index: usize, exp: Experience) -> impl IntoView {
    let (direction, justify, card) = match TimelineSide::for_index(index) {
        TimelineSide::Left => (Direction::Left, "justify-start", "mr-auto"),
        TimelineSide::Right => (Direction::Right, "justify-end", "ml-auto"),
    };
    let delay = stagger_delay_ms(index, 300, 0);

    view! {
        <Reveal direction=direction delay_ms=delay class=format!("relative flex items-center mb-16 {justify}")>
            <div class="absolute left-1/2 -translate-x-1/2 z-10">
                <Reveal direction=Direction::Scale delay_ms={delay + 500} duration_ms=500>
                    <div class="w-4 h-4 bg-blue-400 rounded-full border-4 border-gray-900" />
                </Reveal>
            </div>
            <div class=format!("w-5/12 {card} transition-transform duration-300 hover:scale-105")>
                <div class="bg-gray-900/80 backdrop-blur-sm border border-gray-700/50 rounded-lg p-6 hover:border-blue-400/50 transition-all duration-300">
                    <div class="flex items-center mb-4">
                        <div class="p-2 bg-blue-500/20 rounded-full mr-4 text-2xl">
                            {icon_view(exp.icon)}
                        </div>
                        <div>
                            <h3 class="text-xl font-bold text-white">{exp.title}</h3>
                            <p class="text-blue-400">{exp.company}</p>
                        </div>
                    </div>
                    <p class="text-purple-300 text-sm mb-3">{exp.period}</p>
                    <p class="text-gray-300 mb-4">{exp.description}</p>
                    <div class="flex flex-wrap gap-2">
                        {exp
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <span class="px-3 py-1 bg-purple-500/20 text-purple-300 rounded-full text-sm border border-purple-400/30">
                                        {*skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
