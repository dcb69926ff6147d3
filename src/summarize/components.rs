use web_sys::{Event, HtmlImageElement, HtmlInputElement};
use yew::prelude::*;

use crate::models::VideoInfo;
use crate::storage;
use crate::utils::{
    extract_video_id, format_duration, format_publish_date, format_views, next_thumbnail,
    render_markdown, truncate_text,
};

#[derive(Properties, PartialEq)]
pub struct VideoInputFormProps {
    pub loading: bool,
    pub on_submit: Callback<String>,
    /// Local validation failures are reported here; no request is made.
    pub on_error: Callback<String>,
}

#[function_component(VideoInputForm)]
pub fn video_input_form(props: &VideoInputFormProps) -> Html {
    let url = use_state(String::new);
    let recent_urls = use_state(storage::recent_urls);
    let show_history = use_state(|| false);

    let on_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            url.set(input_value);
        })
    };

    let on_clear_input = {
        let url = url.clone();
        Callback::from(move |_: MouseEvent| url.set(String::new()))
    };

    let on_toggle_history = {
        let show_history = show_history.clone();
        Callback::from(move |_: MouseEvent| show_history.set(!*show_history))
    };

    let on_clear_history = {
        let recent_urls = recent_urls.clone();
        let show_history = show_history.clone();
        Callback::from(move |_: MouseEvent| {
            storage::clear_recent_urls();
            recent_urls.set(Vec::new());
            show_history.set(false);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let on_error = props.on_error.clone();
        let url = url.clone();
        let recent_urls = recent_urls.clone();
        let show_history = show_history.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)

            let submitted = (*url).clone();
            if submitted.is_empty() {
                on_error.emit("Please enter a YouTube URL".to_string());
                return;
            }
            if !submitted.contains("youtube.com/watch") && !submitted.contains("youtu.be/") {
                on_error.emit("Please enter a valid YouTube video URL".to_string());
                return;
            }

            // Recorded before the request resolves, success or not.
            recent_urls.set(storage::remember_url(&submitted));
            show_history.set(false);
            on_submit.emit(submitted);
        })
    };

    html! {
        <div class="relative mb-4">
            <form onsubmit={on_submit} class="flex">
                <input
                    type="text"
                    class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-red-500"
                    placeholder="https://www.youtube.com/watch?v=..."
                    value={(*url).clone()}
                    oninput={on_input}
                    disabled={props.loading}
                />
                {
                    if !url.is_empty() {
                        html! {
                            <button
                                type="button"
                                class="px-3 text-gray-400 hover:text-gray-600 border-y border-gray-300"
                                title="Clear input"
                                onclick={on_clear_input}
                            >
                                { "✕" }
                            </button>
                        }
                    } else if !recent_urls.is_empty() {
                        html! {
                            <button
                                type="button"
                                class="px-3 text-gray-400 hover:text-gray-600 border-y border-gray-300"
                                title="Show recent videos"
                                onclick={on_toggle_history}
                            >
                                { "⌚" }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
                <button
                    type="submit"
                    class="bg-red-600 text-white p-3 rounded-r-lg hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500 disabled:opacity-50"
                    disabled={props.loading}
                >
                    { if props.loading { "Summarizing..." } else { "Summarize" } }
                </button>
            </form>
            {
                if *show_history && !recent_urls.is_empty() {
                    let select_buttons = recent_urls.iter().map(|recent| {
                        let recent_owned = recent.clone();
                        let url = url.clone();
                        let show_history = show_history.clone();
                        let on_select = Callback::from(move |_: MouseEvent| {
                            url.set(recent_owned.clone());
                            show_history.set(false);
                        });
                        html! {
                            <button
                                type="button"
                                class="w-full text-left px-2 py-1 text-sm hover:bg-gray-100 truncate"
                                onclick={on_select}
                            >
                                { truncate_text(recent, 60) }
                            </button>
                        }
                    });
                    html! {
                        <div class="absolute top-full left-0 right-0 z-10 mt-2 bg-white border border-gray-300 rounded-lg shadow-md p-2">
                            <div class="flex justify-between px-2 py-1">
                                <span class="text-xs font-bold text-gray-500">{ "RECENT VIDEOS" }</span>
                                <button
                                    type="button"
                                    class="text-xs text-red-600 hover:underline"
                                    onclick={on_clear_history}
                                >
                                    { "Clear" }
                                </button>
                            </div>
                            { for select_buttons }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorToastProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

#[function_component(ErrorToast)]
pub fn error_toast(props: &ErrorToastProps) -> Html {
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="flex items-center justify-between bg-red-100 border border-red-300 text-red-800 rounded-lg p-3 mb-4">
            <p class="text-sm">{ &props.message }</p>
            <button class="ml-4 font-bold hover:text-red-600" title="Dismiss" onclick={on_dismiss}>
                { "✕" }
            </button>
        </div>
    }
}

#[function_component(LoadingSkeleton)]
pub fn loading_skeleton() -> Html {
    html! {
        <div class="animate-pulse mt-4">
            <div class="h-64 bg-gray-200 rounded-xl mb-4"></div>
            <div class="h-6 bg-gray-200 rounded w-3/4 mb-3"></div>
            <div class="h-4 bg-gray-200 rounded w-1/2 mb-6"></div>
            <div class="space-y-2">
                <div class="h-3 bg-gray-200 rounded"></div>
                <div class="h-3 bg-gray-200 rounded"></div>
                <div class="h-3 bg-gray-200 rounded w-5/6"></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoResultProps {
    pub summary: String,
    pub video_info: VideoInfo,
    pub thumbnail: String,
    /// Server-provided thumbnail, consulted only once the quality ladder
    /// is exhausted.
    pub fallback_thumbnail: String,
    pub video_url: String,
    pub is_music_video: bool,
    pub has_transcript: bool,
    pub success_score: f64,
}

#[function_component(VideoResult)]
pub fn video_result(props: &VideoResultProps) -> Html {
    let saved = use_state(|| false);

    {
        let saved = saved.clone();
        use_effect_with(props.video_url.clone(), move |video_url: &String| {
            saved.set(storage::is_saved(video_url));
            || ()
        });
    }

    // Degrade through the thumbnail quality ladder by rewriting the image
    // source in place; state is untouched so a rerender restarts from the
    // optimistic primary.
    let on_image_error = {
        let video_url = props.video_url.clone();
        let fallback = props.fallback_thumbnail.clone();
        Callback::from(move |e: Event| {
            let image: HtmlImageElement = e.target_unchecked_into();
            let video_id = extract_video_id(&video_url);
            let server_fallback = (!fallback.is_empty()).then_some(fallback.as_str());
            if let Some(next) = next_thumbnail(&image.src(), &video_id, server_fallback) {
                image.set_src(&next);
            }
        })
    };

    let on_toggle_saved = {
        let saved = saved.clone();
        let video_url = props.video_url.clone();
        Callback::from(move |_: MouseEvent| {
            let now_saved = !*saved;
            storage::set_saved(&video_url, now_saved);
            saved.set(now_saved);
        })
    };

    let on_copy_url = {
        let video_url = props.video_url.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&video_url);
            }
        })
    };

    let info = &props.video_info;
    let summary_html = Html::from_html_unchecked(AttrValue::from(render_markdown(&props.summary)));

    html! {
        <div class="bg-white rounded-2xl shadow-xl overflow-hidden mt-4">
            {
                if !props.thumbnail.is_empty() {
                    html! {
                        <img
                            src={props.thumbnail.clone()}
                            alt="Video thumbnail"
                            class="w-full h-72 object-cover"
                            onerror={on_image_error}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <div class="p-6">
                <h2 class="text-2xl font-bold text-gray-800 mb-2">{ &info.title }</h2>
                <p class="text-gray-600 mb-3">
                    { "By " }<span class="font-bold text-gray-800">{ &info.author }</span>
                </p>
                {
                    if let Some(description) = info.description.as_deref().filter(|d| !d.is_empty()) {
                        html! {
                            <p class="text-sm text-gray-500 mb-3">
                                { truncate_text(description, 200) }
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="flex flex-wrap gap-2 mb-4 text-sm">
                    {
                        if info.length > 0 {
                            html! {
                                <span class="bg-purple-100 text-purple-800 px-3 py-1 rounded-full">
                                    { format_duration(info.length) }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if info.views > 0 {
                            html! {
                                <span class="bg-blue-100 text-blue-800 px-3 py-1 rounded-full">
                                    { format_views(info.views) }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if let Some(publish_date) = info.publish_date.as_deref().filter(|d| !d.is_empty()) {
                            html! {
                                <span class="bg-gray-100 text-gray-800 px-3 py-1 rounded-full">
                                    { format_publish_date(publish_date) }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if let Some(language) = info.language.as_deref().filter(|l| !l.is_empty()) {
                            html! {
                                <span class="bg-indigo-100 text-indigo-800 px-3 py-1 rounded-full uppercase">
                                    { language }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if props.is_music_video {
                            html! {
                                <span class="bg-red-100 text-red-800 px-3 py-1 rounded-full">
                                    { "Music Video" }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if props.has_transcript {
                            html! {
                                <span class="bg-green-100 text-green-800 px-3 py-1 rounded-full">
                                    { "Transcript Available" }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <span
                        class="bg-gray-100 text-gray-500 px-3 py-1 rounded-full"
                        title="Summary confidence score reported by the backend"
                    >
                        { format!("Score {}", props.success_score) }
                    </span>
                </div>
                <div class="flex justify-between items-center mb-4">
                    <a
                        href={props.video_url.clone()}
                        target="_blank"
                        class="text-red-600 hover:underline text-sm"
                    >
                        { "Watch on YouTube ↗" }
                    </a>
                    <div class="flex gap-2">
                        <button
                            class="text-sm px-3 py-1 rounded hover:bg-gray-100"
                            title={ if *saved { "Remove bookmark" } else { "Save summary" } }
                            onclick={on_toggle_saved}
                        >
                            { if *saved { "★ Saved" } else { "☆ Save" } }
                        </button>
                        <button
                            class="text-sm px-3 py-1 rounded hover:bg-gray-100"
                            title="Copy video URL"
                            onclick={on_copy_url}
                        >
                            { "Copy link" }
                        </button>
                    </div>
                </div>
                <hr class="mb-4 border-gray-200"/>
                {
                    if props.is_music_video {
                        html! {
                            <div class="bg-red-50 text-gray-700 text-sm rounded-xl p-4 mb-4">
                                { "This appears to be a music video. The summary is based on available information about the song and artist." }
                            </div>
                        }
                    } else if !props.has_transcript {
                        html! {
                            <div class="bg-yellow-50 text-gray-700 text-sm rounded-xl p-4 mb-4">
                                { "No transcript was found for this video. The summary is based on video metadata only." }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="markdown-body text-gray-700 leading-relaxed">
                    { summary_html }
                </div>
            </div>
        </div>
    }
}
