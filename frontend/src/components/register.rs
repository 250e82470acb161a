use crate::auth::register;
use crate::components::icons::Sparkles;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mehndihub_shared::{RegisterRequest, UserType};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = use_router();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (user_type, set_user_type) = signal(UserType::Client);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    // 注册成功后显示验证提示；后端要求邮箱验证后才能首次登录
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let req = RegisterRequest {
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                user_type: user_type.get_untracked(),
            };
            match register(req).await {
                Ok(resp) => {
                    let msg = resp.message.unwrap_or_else(|| {
                        "Account created. Check your email to verify your account.".to_string()
                    });
                    set_success_msg.set(Some(msg));
                }
                Err(err) => set_error_msg.set(Some(err)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Sparkles attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Join MehndiHub"</h1>
                        <p class="text-base-content/70">
                            "Create an account as a client or an artist"
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <Show
                        when=move || success_msg.get().is_none()
                        fallback=move || view! {
                            <div class="card-body items-center text-center">
                                <div role="alert" class="alert alert-success">
                                    <span>{move || success_msg.get().unwrap_or_default()}</span>
                                </div>
                                <button
                                    class="btn btn-primary mt-4"
                                    on:click=move |_| router.navigate(AppRoute::Login.to_path())
                                >
                                    "Back to sign in"
                                </button>
                            </div>
                        }
                    >
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="grid grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label" for="first_name">
                                        <span class="label-text">"First name"</span>
                                    </label>
                                    <input
                                        id="first_name"
                                        type="text"
                                        on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                        prop:value=first_name
                                        class="input input-bordered w-full"
                                        required
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label" for="last_name">
                                        <span class="label-text">"Last name"</span>
                                    </label>
                                    <input
                                        id="last_name"
                                        type="text"
                                        on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                        prop:value=last_name
                                        class="input input-bordered w-full"
                                        required
                                    />
                                </div>
                            </div>

                            <div class="form-control">
                                <label class="label" for="reg_email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="reg_email"
                                    type="email"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                    required
                                />
                            </div>

                            <div class="form-control">
                                <label class="label" for="reg_password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="reg_password"
                                    type="password"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                    required
                                />
                            </div>

                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"I am a"</span>
                                </label>
                                <select
                                    class="select select-bordered w-full"
                                    on:change=move |ev| {
                                        if event_target_value(&ev) == "artist" {
                                            set_user_type.set(UserType::Artist);
                                        } else {
                                            set_user_type.set(UserType::Client);
                                        }
                                    }
                                >
                                    <option value="client" selected=move || user_type.get() == UserType::Client>
                                        "Client looking for artists"
                                    </option>
                                    <option value="artist" selected=move || user_type.get() == UserType::Artist>
                                        "Mehndi artist"
                                    </option>
                                </select>
                            </div>

                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Creating..." }.into_any()
                                    } else {
                                        "Create account".into_any()
                                    }}
                                </button>
                            </div>
                            <p class="text-center text-sm text-base-content/70 mt-2">
                                "Already have an account? "
                                <a
                                    class="link link-primary"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        router.navigate(AppRoute::Login.to_path());
                                    }
                                    href="/login"
                                >
                                    "Sign in"
                                </a>
                            </p>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
