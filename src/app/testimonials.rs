use leptos::prelude::*;

use crate::carousel::{Carousel, Direction};
use crate::catalog::TestimonialRecord;
use crate::content::TESTIMONIALS;

#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = match Carousel::new(TESTIMONIALS.len()) {
        Ok(c) => RwSignal::new(c),
        Err(e) => {
            log::warn!("hiding testimonials: {e}");
            return ().into_any();
        }
    };
    let go_to = move |i: usize| {
        carousel.update(|c| {
            if let Err(e) = c.go_to(i) {
                log::warn!("{e}");
            }
        })
    };

    view! {
        <section id="testimonials" class="w-full py-8 md:py-16 px-4 sm:px-6 overflow-hidden">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-8 md:mb-12">
                    <h2 class="text-2xl sm:text-3xl md:text-4xl font-bold mb-2 md:mb-4">
                        "What Clients Say"
                    </h2>
                    <div class="h-px bg-gradient-to-r from-transparent via-indigo-500 to-transparent w-1/2 md:w-1/3 mx-auto" />
                </div>
                <div class="relative h-auto min-h-[300px] sm:min-h-[350px] md:h-96">
                    {move || {
                        let c = carousel.get();
                        let slide_class = match c.direction() {
                            Direction::Forward => "absolute inset-0 flex items-center justify-center px-2 sm:px-4 animate-slide-in-right",
                            Direction::Backward => "absolute inset-0 flex items-center justify-center px-2 sm:px-4 animate-slide-in-left",
                        };
                        TESTIMONIALS
                            .get(c.current())
                            .cloned()
                            .map(|testimonial| {
                                view! {
                                    <div class=slide_class>
                                        <Slide testimonial />
                                    </div>
                                }
                            })
                    }}
                    <button
                        on:click=move |_| carousel.update(Carousel::previous)
                        class="absolute left-0 top-1/2 -translate-y-1/2 p-1 sm:p-2 rounded-full bg-gray-700 hover:bg-gray-600 z-10 ml-1 sm:ml-4"
                        aria-label="Previous testimonial"
                    >
                        "‹"
                    </button>
                    <button
                        on:click=move |_| carousel.update(Carousel::next)
                        class="absolute right-0 top-1/2 -translate-y-1/2 p-1 sm:p-2 rounded-full bg-gray-700 hover:bg-gray-600 z-10 mr-1 sm:mr-4"
                        aria-label="Next testimonial"
                    >
                        "›"
                    </button>
                </div>
                <div class="flex justify-center gap-2 mt-6 sm:mt-8">
                    {(0..TESTIMONIALS.len())
                        .map(|i| {
                            view! {
                                <button
                                    on:click=move |_| go_to(i)
                                    class=move || {
                                        if carousel.with(|c| c.current() == i) {
                                            "w-2 h-2 sm:w-6 sm:h-3 rounded-full transition-all bg-indigo-500"
                                        } else {
                                            "w-2 h-2 sm:w-3 sm:h-3 rounded-full transition-all bg-gray-600"
                                        }
                                    }
                                    aria-label=format!("Go to testimonial {}", i + 1)
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn Slide(testimonial: TestimonialRecord) -> impl IntoView {
    let stars = testimonial.stars();
    let alt = testimonial.name.clone();
    view! {
        <div class="bg-gray-800/50 rounded-xl p-6 sm:p-8 backdrop-blur-sm border border-gray-700 w-full max-w-2xl mx-2 sm:mx-4">
            <div class="flex flex-col sm:flex-row items-center sm:items-start gap-4 sm:gap-6">
                <img
                    src=testimonial.avatar
                    alt=alt
                    class="flex-shrink-0 w-14 h-14 sm:w-16 sm:h-16 rounded-full object-cover border-2 border-indigo-500"
                />
                <div class="text-center sm:text-left">
                    <div class="flex flex-col sm:flex-row sm:items-center gap-2 sm:gap-4 mb-2">
                        <h3 class="text-lg sm:text-xl font-semibold">{testimonial.name}</h3>
                        <div class="flex justify-center sm:justify-start">
                            {(0..TestimonialRecord::MAX_RATING)
                                .map(|i| {
                                    view! {
                                        <span class=if i < stars {
                                            "text-yellow-400"
                                        } else {
                                            "text-gray-600"
                                        }>"★"</span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <p class="text-sm sm:text-base text-gray-400 mb-3 sm:mb-4">{testimonial.role}</p>
                    <p class="text-sm sm:text-base text-gray-300 italic">
                        "\"" {testimonial.content} "\""
                    </p>
                </div>
            </div>
        </div>
    }
}
