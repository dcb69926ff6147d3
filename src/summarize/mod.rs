pub mod api;
pub mod components;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::env_variable_utils::get_app_name;
use crate::models::VideoInfo;
use crate::router::Route;
use crate::summarize::components::{ErrorToast, LoadingSkeleton, VideoInputForm, VideoResult};
use crate::utils::{extract_video_id, thumbnail_url};
use yew_router::prelude::*;

const ERROR_TOAST_MS: u32 = 5_000;

/// Drives the submit -> summarize -> render cycle. One request is in
/// flight at a time; the form is disabled while loading. On failure the
/// whole result (summary, metadata, thumbnail) is rolled back together.
#[function_component(SummarizerApp)]
pub fn summarizer_app() -> Html {
    let loading = use_state(|| false);
    let summary = use_state(String::new);
    let thumbnail = use_state(String::new);
    let fallback_thumbnail = use_state(String::new);
    let video_info = use_state(Option::<VideoInfo>::default);
    let is_music_video = use_state(|| false);
    let has_transcript = use_state(|| false);
    let success_score = use_state(|| 0.0f64);
    let video_url = use_state(String::new);
    let error_message = use_state(Option::<String>::default);

    // Errors expire on their own; a new one restarts the clock.
    {
        let error_message = error_message.clone();
        use_effect_with((*error_message).clone(), move |current: &Option<String>| {
            let timeout = current.as_ref().map(|_| {
                Timeout::new(ERROR_TOAST_MS, move || error_message.set(None))
            });
            move || drop(timeout)
        });
    }

    let on_error = {
        let error_message = error_message.clone();
        Callback::from(move |message: String| error_message.set(Some(message)))
    };

    let on_dismiss_error = {
        let error_message = error_message.clone();
        Callback::from(move |_: ()| error_message.set(None))
    };

    let on_submit = {
        let loading = loading.clone();
        let summary = summary.clone();
        let thumbnail = thumbnail.clone();
        let fallback_thumbnail = fallback_thumbnail.clone();
        let video_info = video_info.clone();
        let is_music_video = is_music_video.clone();
        let has_transcript = has_transcript.clone();
        let success_score = success_score.clone();
        let video_url = video_url.clone();
        let error_message = error_message.clone();

        Callback::from(move |url: String| {
            let loading = loading.clone();
            let summary = summary.clone();
            let thumbnail = thumbnail.clone();
            let fallback_thumbnail = fallback_thumbnail.clone();
            let video_info = video_info.clone();
            let is_music_video = is_music_video.clone();
            let has_transcript = has_transcript.clone();
            let success_score = success_score.clone();
            let video_url = video_url.clone();
            let error_message = error_message.clone();

            loading.set(true);
            summary.set(String::new());
            error_message.set(None);
            video_url.set(url.clone());

            // Phase one: a locally derived thumbnail gives the user
            // something to look at before the backend answers. The
            // response may later supply a fallback, never an eager
            // replacement.
            thumbnail.set(thumbnail_url(&extract_video_id(&url)));
            fallback_thumbnail.set(String::new());

            wasm_bindgen_futures::spawn_local(async move {
                match api::summarize_video(&url).await {
                    Ok(response) => {
                        if let Some(backend_error) = &response.error {
                            log::warn!("backend reported a soft error: {backend_error}");
                        }
                        summary.set(response.summary);
                        video_info.set(Some(response.video_info));
                        is_music_video.set(response.is_music_video);
                        has_transcript.set(response.has_transcript);
                        success_score.set(response.success_score);
                        if !response.thumbnail.is_empty() {
                            fallback_thumbnail.set(response.thumbnail);
                        }
                    }
                    Err(e) => {
                        // Full rollback, never a partial result.
                        thumbnail.set(String::new());
                        video_info.set(None);
                        summary.set(String::new());
                        error_message.set(Some(e.message().to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-2">
                    { get_app_name() }
                </h1>
                <p class="text-center text-gray-600 mb-6">
                    { "Enter a YouTube video URL to get an AI-generated summary" }
                </p>

                <div class="text-center mb-4">
                    <Link<Route> to={Route::Home} classes="text-red-600 hover:underline text-sm">
                        { "Back to start" }
                    </Link<Route>>
                </div>

                <VideoInputForm
                    loading={*loading}
                    on_submit={on_submit}
                    on_error={on_error}
                />

                {
                    if let Some(message) = &*error_message {
                        html! {
                            <ErrorToast message={message.clone()} on_dismiss={on_dismiss_error} />
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if *loading {
                        html! { <LoadingSkeleton /> }
                    } else {
                        match &*video_info {
                            Some(info) if !summary.is_empty() => html! {
                                <VideoResult
                                    summary={(*summary).clone()}
                                    video_info={info.clone()}
                                    thumbnail={(*thumbnail).clone()}
                                    fallback_thumbnail={(*fallback_thumbnail).clone()}
                                    video_url={(*video_url).clone()}
                                    is_music_video={*is_music_video}
                                    has_transcript={*has_transcript}
                                    success_score={*success_score}
                                />
                            },
                            _ => html! {},
                        }
                    }
                }
            </div>
        </div>
    }
}
