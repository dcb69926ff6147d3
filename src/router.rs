use yew::prelude::*;
use yew_router::prelude::*;

use crate::env_variable_utils::get_app_name;
use crate::summarize::SummarizerApp;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/app")]
    Summarizer,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Summarizer => html! { <SummarizerApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-red-600 hover:underline">
                        {"Go back to start"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

struct Feature {
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "AI-Powered",
        text: "Uses advanced AI to analyze video content",
    },
    Feature {
        title: "Smart Summaries",
        text: "Creates structured, context-aware summaries",
    },
    Feature {
        title: "Any YouTube Video",
        text: "Works with any public YouTube video in seconds",
    },
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-700 p-4">
            <div class="text-center max-w-3xl">
                <h1 class="text-5xl font-extrabold text-white mb-4">
                    { get_app_name() }
                </h1>
                <p class="text-lg text-gray-300 mb-8">
                    { "Transform lengthy videos into concise, intelligent summaries using advanced NLP technology." }
                </p>
                <div class="flex justify-center gap-4 mb-8">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="bg-white rounded-xl shadow-md p-4 w-56 h-36 flex flex-col justify-center">
                            <h2 class="font-semibold text-gray-800 mb-1">{ feature.title }</h2>
                            <p class="text-sm text-gray-600">{ feature.text }</p>
                        </div>
                    })}
                </div>
                <Link<Route>
                    to={Route::Summarizer}
                    classes="inline-block bg-red-600 text-white font-bold px-6 py-3 rounded-lg hover:bg-red-700"
                >
                    { "Get Started →" }
                </Link<Route>>
            </div>
        </div>
    }
}
