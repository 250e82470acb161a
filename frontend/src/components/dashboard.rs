use crate::api::ApiClient;
use crate::auth::{logout, use_auth};
use crate::components::booking_dialog::BookingDialog;
use crate::components::icons::*;
use crate::web::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mehndihub_shared::{Booking, BookingStatus, CreateBookingRequest, NotificationItem};

/// 通知轮询间隔（毫秒）
const NOTIFICATION_POLL_MS: u32 = 30_000;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth_ctx = use_auth();

    let (bookings, set_bookings) = signal(Vec::<Booking>::new());
    let (loading_bookings, set_loading_bookings) = signal(true);
    let (status_filter, set_status_filter) = signal(Option::<BookingStatus>::None);
    let (notifications, set_notifications) = signal(Vec::<NotificationItem>::new());
    let (toast, set_toast) = signal(Option::<(String, bool)>::None); // 消息内容, 是否出错

    let load_bookings = move || {
        let api = ApiClient::new();
        set_loading_bookings.set(true);
        spawn_local(async move {
            match api.list_my_bookings(status_filter.get_untracked(), 1, 50).await {
                Ok(resp) => set_bookings.set(resp.data),
                Err(e) => set_toast.set(Some((format!("Failed to load bookings: {}", e), true))),
            }
            set_loading_bookings.set(false);
        });
    };

    let load_notifications = move || {
        let api = ApiClient::new();
        spawn_local(async move {
            // 轮询失败静默忽略，下一轮会重试
            if let Ok(resp) = api.list_notifications().await {
                set_notifications.set(resp.data);
            }
        });
    };

    // 初始加载 + 过滤条件变化时重载
    Effect::new(move |_| {
        let _ = status_filter.get();
        load_bookings();
    });

    // 周期刷新通知；Interval 非 Send，存入线程本地槽位，
    // 组件卸载时取出并 drop 以清除定时器
    load_notifications();
    let poll = StoredValue::new_local(Some(Interval::new(NOTIFICATION_POLL_MS, load_notifications)));
    on_cleanup(move || {
        poll.update_value(|p| {
            p.take();
        });
    });

    let handle_create_booking = move |req: CreateBookingRequest| {
        let api = ApiClient::new();
        spawn_local(async move {
            match api.create_booking(&req).await {
                Ok(_) => {
                    set_toast.set(Some(("Booking request submitted".to_string(), false)));
                    load_bookings();
                }
                Err(e) => set_toast.set(Some((format!("Failed to create booking: {}", e), true))),
            }
        });
    };

    let handle_cancel = move |id: String| {
        let api = ApiClient::new();
        spawn_local(async move {
            match api.cancel_booking(&id).await {
                Ok(resp) => {
                    set_toast.set(Some(("Booking cancelled".to_string(), false)));
                    let cancelled = resp.data;
                    set_bookings.update(|list| {
                        if let Some(b) = list.iter_mut().find(|b| b.id == cancelled.id) {
                            *b = cancelled;
                        }
                    });
                }
                Err(e) => set_toast.set(Some((format!("Failed to cancel booking: {}", e), true))),
            }
        });
    };

    let mark_all_read = move |_| {
        let api = ApiClient::new();
        spawn_local(async move {
            match api.mark_all_notifications_read().await {
                Ok(_) => load_notifications(),
                Err(e) => set_toast.set(Some((e, true))),
            }
        });
    };

    let on_logout = move |_| {
        // 登出后路由服务会自动重定向到登录页
        spawn_local(async move {
            logout(&auth_ctx).await;
        });
    };

    // 3秒后清除通知提示
    Effect::new(move |_| {
        if toast.get().is_some() {
            set_timeout(
                move || set_toast.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    // 统计数据的派生值
    let total_bookings = move || bookings.with(|b| b.len());
    let pending_count = move || {
        bookings.with(|b| {
            b.iter()
                .filter(|b| b.status == BookingStatus::Pending)
                .count()
        })
    };
    let completed_count = move || {
        bookings.with(|b| {
            b.iter()
                .filter(|b| b.status == BookingStatus::Completed)
                .count()
        })
    };
    let unread_count = move || notifications.with(|n| n.iter().filter(|n| !n.read).count());
    // view! 宏内不能裸写 `>` 比较，单独提一个闭包
    let has_unread = move || unread_count() > 0;

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                // 通知提示框
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
                        <a class="btn btn-ghost text-xl">"My bookings"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            {move || {
                                auth_ctx.state.with(|s| {
                                    s.user.as_ref().map(|u| u.full_name()).unwrap_or_default()
                                })
                            }}
                        </span>
                    </div>
                    <div class="flex-none gap-2">
                        <div class="indicator">
                            <Show when=has_unread>
                                <span class="indicator-item badge badge-secondary">{unread_count}</span>
                            </Show>
                            <button class="btn btn-ghost" on:click=mark_all_read title="Mark all notifications read">
                                <Calendar attr:class="h-5 w-5" />
                            </button>
                        </div>
                        <BookingDialog on_create=handle_create_booking />
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Sign out"
                        </button>
                    </div>
                </div>

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"Total bookings"</div>
                        <div class="stat-value text-primary">{total_bookings}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Awaiting artists"</div>
                        <div class="stat-value text-secondary">{pending_count}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Completed"</div>
                        <div class="stat-value text-success">{completed_count}</div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <div>
                                <h3 class="card-title">"Bookings"</h3>
                                <p class="text-base-content/70 text-sm">
                                    "Track your requests and confirmed events."
                                </p>
                            </div>
                            <div class="flex items-center gap-2">
                                <select
                                    class="select select-bordered select-sm"
                                    on:change=move |ev| {
                                        set_status_filter.set(match event_target_value(&ev).as_str() {
                                            "pending" => Some(BookingStatus::Pending),
                                            "confirmed" => Some(BookingStatus::Confirmed),
                                            "completed" => Some(BookingStatus::Completed),
                                            "cancelled" => Some(BookingStatus::Cancelled),
                                            _ => None,
                                        });
                                    }
                                >
                                    <option value="">"All statuses"</option>
                                    <option value="pending">"Pending"</option>
                                    <option value="confirmed">"Confirmed"</option>
                                    <option value="completed">"Completed"</option>
                                    <option value="cancelled">"Cancelled"</option>
                                </select>
                                <button
                                    on:click=move |_| load_bookings()
                                    disabled=move || loading_bookings.get()
                                    class="btn btn-ghost btn-circle"
                                >
                                    <RefreshCw attr:class=move || {
                                        if loading_bookings.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" }
                                    } />
                                </button>
                            </div>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Event"</th>
                                        <th>"Date"</th>
                                        <th class="hidden md:table-cell">"City"</th>
                                        <th class="hidden md:table-cell">"Budget"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || total_bookings() == 0 && !loading_bookings.get()>
                                        <tr>
                                            <td colspan="6" class="text-center py-8 text-base-content/50">
                                                "No bookings yet. Create one to get started."
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || loading_bookings.get() && total_bookings() == 0>
                                        <tr>
                                            <td colspan="6" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span> " Loading..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || bookings.get()
                                        key=|b| (b.id.clone(), b.status)
                                        children=move |booking| {
                                            let id = booking.id.clone();
                                            let cancellable = booking.status.is_cancellable();
                                            view! {
                                                <tr>
                                                    <td class="font-bold">{booking.event_type.clone()}</td>
                                                    <td>{booking.event_date.format_date()}</td>
                                                    <td class="hidden md:table-cell">{booking.city.clone()}</td>
                                                    <td class="hidden md:table-cell font-mono text-sm">
                                                        {format!("{:.0}-{:.0}", booking.budget_min, booking.budget_max)}
                                                    </td>
                                                    <td>
                                                        <div class="badge badge-accent badge-outline">
                                                            {booking.status.as_str()}
                                                        </div>
                                                    </td>
                                                    <td>
                                                        <Show when=move || cancellable>
                                                            {
                                                                let id = id.clone();
                                                                view! {
                                                                    <button
                                                                        on:click=move |_| handle_cancel(id.clone())
                                                                        class="btn btn-ghost btn-sm text-error"
                                                                    >
                                                                        <Trash2 attr:class="h-4 w-4" /> "Cancel"
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
            </div>
        </div>
    }
}
