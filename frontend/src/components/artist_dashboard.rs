use crate::api::ApiClient;
use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mehndihub_shared::{
    ApplicationStatus, Booking, JobApplication, SubmitProposalRequest, WalletSummary,
};

#[component]
pub fn ArtistDashboardPage() -> impl IntoView {
    let auth_ctx = use_auth();

    let (wallet, set_wallet) = signal(WalletSummary::default());
    let (jobs, set_jobs) = signal(Vec::<Booking>::new());
    let (applications, set_applications) = signal(Vec::<JobApplication>::new());
    let (loading, set_loading) = signal(true);
    let (toast, set_toast) = signal(Option::<(String, bool)>::None);

    // 提案表单状态：选中的预约 + 报价 + 留言
    let (proposal_target, set_proposal_target) = signal(Option::<Booking>::None);
    let price_input = RwSignal::new(String::new());
    let message_input = RwSignal::new(String::new());

    let load_all = move || {
        let api = ApiClient::new();
        set_loading.set(true);
        spawn_local(async move {
            match api.get_wallet().await {
                Ok(resp) => set_wallet.set(resp.data),
                Err(e) => set_toast.set(Some((format!("Failed to load wallet: {}", e), true))),
            }
            match api.list_open_jobs(1, 50).await {
                Ok(resp) => set_jobs.set(resp.data),
                Err(e) => set_toast.set(Some((format!("Failed to load jobs: {}", e), true))),
            }
            match api.list_my_applications().await {
                Ok(resp) => set_applications.set(resp.data),
                Err(e) => {
                    set_toast.set(Some((format!("Failed to load applications: {}", e), true)))
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_all());

    let submit_proposal = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(job) = proposal_target.get_untracked() else {
            return;
        };
        let Ok(price) = price_input.get_untracked().parse::<f64>() else {
            set_toast.set(Some(("Please enter a valid price".to_string(), true)));
            return;
        };
        let message = message_input.get_untracked();
        let req = SubmitProposalRequest {
            booking_id: job.id.clone(),
            proposed_price: price,
            message: (!message.trim().is_empty()).then_some(message),
        };

        let api = ApiClient::new();
        spawn_local(async move {
            match api.submit_proposal(&req).await {
                Ok(resp) => {
                    set_toast.set(Some(("Proposal submitted".to_string(), false)));
                    set_applications.update(|list| list.insert(0, resp.data));
                    set_proposal_target.set(None);
                    price_input.set(String::new());
                    message_input.set(String::new());
                }
                Err(e) => set_toast.set(Some((e, true))),
            }
        });
    };

    let withdraw_application = move |id: String| {
        let api = ApiClient::new();
        spawn_local(async move {
            match api.withdraw_application(&id).await {
                Ok(_) => {
                    set_toast.set(Some(("Application withdrawn".to_string(), false)));
                    set_applications.update(|list| {
                        if let Some(app) = list.iter_mut().find(|a| a.id == id) {
                            app.status = ApplicationStatus::Withdrawn;
                        }
                    });
                }
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

    // 已申请的预约不再展示「提交提案」按钮
    let applied_booking_ids = Memo::new(move |_| {
        applications.with(|apps| {
            apps.iter()
                .filter(|a| a.status != ApplicationStatus::Withdrawn)
                .map(|a| a.booking_id.clone())
                .collect::<Vec<_>>()
        })
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
                        <a class="btn btn-ghost text-xl">"Artist studio"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            {move || {
                                auth_ctx.state.with(|s| {
                                    s.user.as_ref().map(|u| u.full_name()).unwrap_or_default()
                                })
                            }}
                        </span>
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
                            <Wallet attr:class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"Balance"</div>
                        <div class="stat-value text-primary">
                            {move || format!("{:.2}", wallet.get().balance)}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Pending payouts"</div>
                        <div class="stat-value text-secondary">
                            {move || format!("{:.2}", wallet.get().pending_payouts)}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Lifetime earnings"</div>
                        <div class="stat-value text-success">
                            {move || format!("{:.2}", wallet.get().lifetime_earnings)}
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    // 开放预约列表
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"Open jobs"</h3>
                            <p class="text-base-content/70 text-sm">
                                "Requests from clients awaiting an artist."
                            </p>
                            <div class="overflow-x-auto">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"Event"</th>
                                            <th>"Date"</th>
                                            <th>"Budget"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <Show when=move || jobs.with(|j| j.is_empty()) && !loading.get()>
                                            <tr>
                                                <td colspan="4" class="text-center py-8 text-base-content/50">
                                                    "No open jobs right now."
                                                </td>
                                            </tr>
                                        </Show>
                                        <For
                                            each=move || jobs.get()
                                            key=|j| j.id.clone()
                                            children=move |job| {
                                                let job_id = job.id.clone();
                                                let already_applied = move || {
                                                    applied_booking_ids
                                                        .with(|ids| ids.contains(&job_id))
                                                };
                                                let job_for_dialog = job.clone();
                                                view! {
                                                    <tr>
                                                        <td class="font-bold">
                                                            {job.event_type.clone()}
                                                            <div class="text-xs text-base-content/50">
                                                                {job.city.clone()}
                                                            </div>
                                                        </td>
                                                        <td>{job.event_date.format_date()}</td>
                                                        <td class="font-mono text-sm">
                                                            {format!("{:.0}-{:.0}", job.budget_min, job.budget_max)}
                                                        </td>
                                                        <td>
                                                            <Show
                                                                when=already_applied
                                                                fallback=move || {
                                                                    let job = job_for_dialog.clone();
                                                                    view! {
                                                                        <button
                                                                            class="btn btn-primary btn-sm gap-1"
                                                                            on:click=move |_| {
                                                                                set_proposal_target.set(Some(job.clone()))
                                                                            }
                                                                        >
                                                                            <Send attr:class="h-4 w-4" /> "Propose"
                                                                        </button>
                                                                    }
                                                                }
                                                            >
                                                                <span class="badge badge-ghost">"Applied"</span>
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

                    // 我的申请列表
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"My proposals"</h3>
                            <p class="text-base-content/70 text-sm">
                                "Track the proposals you have sent."
                            </p>
                            <div class="overflow-x-auto">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"Booking"</th>
                                            <th>"Price"</th>
                                            <th>"Status"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <Show when=move || applications.with(|a| a.is_empty()) && !loading.get()>
                                            <tr>
                                                <td colspan="4" class="text-center py-8 text-base-content/50">
                                                    "You have not sent any proposals yet."
                                                </td>
                                            </tr>
                                        </Show>
                                        <For
                                            each=move || applications.get()
                                            key=|a| (a.id.clone(), a.status)
                                            children=move |app| {
                                                let id = app.id.clone();
                                                let pending = app.status == ApplicationStatus::Pending;
                                                view! {
                                                    <tr>
                                                        <td class="font-mono text-xs">{app.booking_id.clone()}</td>
                                                        <td class="font-mono text-sm">
                                                            {format!("{:.0}", app.proposed_price)}
                                                        </td>
                                                        <td>
                                                            <div class="badge badge-accent badge-outline">
                                                                {app.status.as_str()}
                                                            </div>
                                                        </td>
                                                        <td>
                                                            <Show when=move || pending>
                                                                {
                                                                    let id = id.clone();
                                                                    view! {
                                                                        <button
                                                                            on:click=move |_| withdraw_application(id.clone())
                                                                            class="btn btn-ghost btn-sm text-error"
                                                                        >
                                                                            <Trash2 attr:class="h-4 w-4" /> "Withdraw"
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

                // 提案弹层：选中某个 job 时展示
                <Show when=move || proposal_target.get().is_some()>
                    <div class="modal modal-open">
                        <div class="modal-box">
                            <h3 class="font-bold text-lg">
                                {move || {
                                    proposal_target
                                        .get()
                                        .map(|j| format!("Proposal for {}", j.event_type))
                                        .unwrap_or_default()
                                }}
                            </h3>
                            <form on:submit=submit_proposal class="space-y-4 pt-4">
                                <div class="form-control">
                                    <label for="proposed_price" class="label">
                                        <span class="label-text">"Your price"</span>
                                    </label>
                                    <input id="proposed_price" required
                                        type="number" min="0" step="any"
                                        class="input input-bordered w-full"
                                        prop:value=price_input
                                        on:input=move |ev| price_input.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-control">
                                    <label for="proposal_message" class="label">
                                        <span class="label-text">"Message (optional)"</span>
                                    </label>
                                    <textarea id="proposal_message"
                                        class="textarea textarea-bordered w-full"
                                        placeholder="Introduce yourself, describe your designs..."
                                        prop:value=message_input
                                        on:input=move |ev| message_input.set(event_target_value(&ev))
                                    ></textarea>
                                </div>
                                <div class="modal-action">
                                    <button
                                        type="button"
                                        class="btn btn-ghost"
                                        on:click=move |_| set_proposal_target.set(None)
                                    >
                                        "Cancel"
                                    </button>
                                    <button type="submit" class="btn btn-primary gap-2">
                                        <Send attr:class="h-4 w-4" /> "Send proposal"
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
