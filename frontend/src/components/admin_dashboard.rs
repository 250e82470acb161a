use crate::api::{self, ApiClient};
use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::HtmlInputElement;
use mehndihub_shared::{
    BlogPost, Booking, CreateBlogRequest, PlatformStats, UserProfile, UserStatus, UserType,
};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth_ctx = use_auth();

    let (stats, set_stats) = signal(PlatformStats::default());
    let (users, set_users) = signal(Vec::<UserProfile>::new());
    let (bookings, set_bookings) = signal(Vec::<Booking>::new());
    let (blogs, set_blogs) = signal(Vec::<BlogPost>::new());
    let (loading, set_loading) = signal(true);
    let (toast, set_toast) = signal(Option::<(String, bool)>::None);

    // 博客发布表单
    let blog_title = RwSignal::new(String::new());
    let blog_content = RwSignal::new(String::new());
    let (uploading_cover, set_uploading_cover) = signal(false);
    let (cover_url, set_cover_url) = signal(Option::<String>::None);
    let cover_input_ref = NodeRef::<leptos::html::Input>::new();

    let load_all = move || {
        let api = ApiClient::new();
        set_loading.set(true);
        spawn_local(async move {
            match api.admin_stats().await {
                Ok(resp) => set_stats.set(resp.data),
                Err(e) => set_toast.set(Some((format!("Failed to load stats: {}", e), true))),
            }
            match api.admin_list_users(1, 50).await {
                Ok(resp) => set_users.set(resp.data),
                Err(e) => set_toast.set(Some((format!("Failed to load users: {}", e), true))),
            }
            match api.admin_list_bookings(1, 50).await {
                Ok(resp) => set_bookings.set(resp.data),
                Err(e) => set_toast.set(Some((format!("Failed to load bookings: {}", e), true))),
            }
            match api.list_blogs().await {
                Ok(resp) => set_blogs.set(resp.data),
                Err(e) => set_toast.set(Some((format!("Failed to load blogs: {}", e), true))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_all());

    let toggle_user_status = move |user: UserProfile| {
        let next = match user.status {
            UserStatus::Active => UserStatus::Suspended,
            UserStatus::Suspended => UserStatus::Active,
        };
        let api = ApiClient::new();
        spawn_local(async move {
            match api.admin_update_user_status(&user.id, next).await {
                Ok(resp) => {
                    let updated = resp.data;
                    set_users.update(|list| {
                        if let Some(u) = list.iter_mut().find(|u| u.id == updated.id) {
                            *u = updated;
                        }
                    });
                }
                Err(e) => set_toast.set(Some((e, true))),
            }
        });
    };

    // 封面直传：选中文件即上传，成功后把 URL 填进表单
    let on_cover_selected = move |_| {
        let Some(input) = cover_input_ref.get_untracked() else {
            return;
        };
        let input: HtmlInputElement = input;
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_uploading_cover.set(true);
        spawn_local(async move {
            match api::uploads::upload_media(&file).await {
                Ok(url) => set_cover_url.set(Some(url)),
                Err(e) => set_toast.set(Some((e, true))),
            }
            set_uploading_cover.set(false);
        });
    };

    let publish_blog = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let title = blog_title.get_untracked();
        let content = blog_content.get_untracked();
        if title.trim().is_empty() || content.trim().is_empty() {
            set_toast.set(Some(("Title and content are required".to_string(), true)));
            return;
        }

        let req = CreateBlogRequest {
            title,
            excerpt: None,
            content,
            cover_image: cover_url.get_untracked(),
            published: true,
        };

        let api = ApiClient::new();
        spawn_local(async move {
            match api.create_blog(&req).await {
                Ok(resp) => {
                    set_toast.set(Some(("Blog post published".to_string(), false)));
                    set_blogs.update(|list| list.insert(0, resp.data));
                    blog_title.set(String::new());
                    blog_content.set(String::new());
                    set_cover_url.set(None);
                }
                Err(e) => set_toast.set(Some((e, true))),
            }
        });
    };

    let delete_blog = move |id: String| {
        let api = ApiClient::new();
        spawn_local(async move {
            match api.delete_blog(&id).await {
                Ok(_) => set_blogs.update(|list| list.retain(|b| b.id != id)),
                Err(e) => set_toast.set(Some((e, true))),
            }
        });
    };

    let on_logout = move |_| {
        spawn_local(async move {
            logout(&auth_ctx).await;
        });
    };

    Effect::new(move |_| {
        if toast.get().is_some() {
            set_timeout(
                move || set_toast.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Show when=move || toast.get().is_some()>
                    <div class="toast toast-top toast-end z-50">
                        <div class=move || {
                            if toast.get().map(|(_, is_err)| is_err).unwrap_or(false) {
                                "alert alert-error shadow-lg"
                            } else {
                                "alert alert-success shadow-lg"
                            }
                        }>
                            <span>{move || toast.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                        </div>
                    </div>
                </Show>

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <Sparkles attr:class="text-primary h-6 w-6" />
                        <a class="btn btn-ghost text-xl">"Platform admin"</a>
                    </div>
                    <div class="flex-none gap-2">
                        <button
                            on:click=move |_| load_all()
                            disabled=move || loading.get()
                            class="btn btn-ghost btn-circle"
                        >
                            <RefreshCw attr:class=move || {
                                if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" }
                            } />
                        </button>
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Sign out"
                        </button>
                    </div>
                </div>

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <Users attr:class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"Users"</div>
                        <div class="stat-value text-primary">{move || stats.get().total_users}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Bookings"</div>
                        <div class="stat-value text-secondary">{move || stats.get().total_bookings}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Active artists"</div>
                        <div class="stat-value">{move || stats.get().active_artists}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Revenue"</div>
                        <div class="stat-value text-success">
                            {move || format!("{:.0}", stats.get().total_revenue)}
                        </div>
                    </div>
                </div>

                // 用户管理
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Users"</h3>
                        <div class="overflow-x-auto">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Role"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || users.get()
                                        key=|u| (u.id.clone(), u.status)
                                        children=move |user| {
                                            let is_admin = user.user_type == UserType::Admin;
                                            let suspended = user.status == UserStatus::Suspended;
                                            let user_for_toggle = user.clone();
                                            view! {
                                                <tr>
                                                    <td class="font-bold">{user.full_name()}</td>
                                                    <td>{user.email.clone()}</td>
                                                    <td>
                                                        <div class="badge badge-ghost">{user.user_type.as_str()}</div>
                                                    </td>
                                                    <td>
                                                        <div class=move || {
                                                            if suspended {
                                                                "badge badge-error badge-outline"
                                                            } else {
                                                                "badge badge-success badge-outline"
                                                            }
                                                        }>
                                                            {if suspended { "suspended" } else { "active" }}
                                                        </div>
                                                    </td>
                                                    <td>
                                                        // 不允许在界面上封禁管理员
                                                        <Show when=move || !is_admin>
                                                            {
                                                                let user = user_for_toggle.clone();
                                                                view! {
                                                                    <button
                                                                        on:click=move |_| toggle_user_status(user.clone())
                                                                        class="btn btn-ghost btn-sm"
                                                                    >
                                                                        {if suspended { "Reactivate" } else { "Suspend" }}
                                                                    </button>
                                                                }
                                                            }
                                                        </Show>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    // 平台预约总览
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"All bookings"</h3>
                            <div class="overflow-x-auto">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"Event"</th>
                                            <th>"Date"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || bookings.get()
                                            key=|b| b.id.clone()
                                            children=move |booking| {
                                                view! {
                                                    <tr>
                                                        <td class="font-bold">
                                                            {booking.event_type.clone()}
                                                            <div class="text-xs text-base-content/50">
                                                                {booking.city.clone()}
                                                            </div>
                                                        </td>
                                                        <td>{booking.event_date.format_date()}</td>
                                                        <td>
                                                            <div class="badge badge-accent badge-outline">
                                                                {booking.status.as_str()}
                                                            </div>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </div>

                    // 博客管理
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"Blog posts"</h3>
                            <form on:submit=publish_blog class="space-y-2">
                                <input
                                    type="text" required
                                    placeholder="Title"
                                    class="input input-bordered w-full"
                                    prop:value=blog_title
                                    on:input=move |ev| blog_title.set(event_target_value(&ev))
                                />
                                <textarea required
                                    class="textarea textarea-bordered w-full"
                                    placeholder="Write your post..."
                                    prop:value=blog_content
                                    on:input=move |ev| blog_content.set(event_target_value(&ev))
                                ></textarea>
                                <div class="flex items-center gap-2">
                                    <input
                                        type="file"
                                        accept="image/*"
                                        class="file-input file-input-bordered file-input-sm flex-1"
                                        node_ref=cover_input_ref
                                        on:change=on_cover_selected
                                    />
                                    <Show when=move || uploading_cover.get()>
                                        <span class="loading loading-spinner loading-sm"></span>
                                    </Show>
                                    <Show when=move || cover_url.get().is_some()>
                                        <span class="badge badge-success">"Cover ready"</span>
                                    </Show>
                                </div>
                                <button
                                    type="submit"
                                    class="btn btn-primary btn-sm gap-2"
                                    disabled=move || uploading_cover.get()
                                >
                                    <Plus attr:class="h-4 w-4" /> "Publish"
                                </button>
                            </form>

                            <div class="divider my-2"></div>

                            <ul class="space-y-2">
                                <For
                                    each=move || blogs.get()
                                    key=|b| b.id.clone()
                                    children=move |blog| {
                                        let id = blog.id.clone();
                                        view! {
                                            <li class="flex items-center justify-between gap-2">
                                                <div>
                                                    <span class="font-bold">{blog.title.clone()}</span>
                                                    <span class="text-xs text-base-content/50 ml-2">
                                                        {blog.created_at.format_date()}
                                                    </span>
                                                </div>
                                                <button
                                                    on:click=move |_| delete_blog(id.clone())
                                                    class="btn btn-ghost btn-sm text-error"
                                                >
                                                    <Trash2 attr:class="h-4 w-4" />
                                                </button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
