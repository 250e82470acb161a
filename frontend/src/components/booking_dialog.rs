use crate::components::icons::Plus;
use leptos::prelude::*;
use mehndihub_shared::CreateBookingRequest;

mod form_state;

use form_state::BookingFormState;

#[component]
pub fn BookingDialog(#[prop(into)] on_create: Callback<CreateBookingRequest>) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let form = BookingFormState::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        match form.to_request() {
            Ok(req) => {
                on_create.run(req);
                set_form_error.set(None);
                set_open.set(false);
                form.reset();
            }
            Err(err) => set_form_error.set(Some(err)),
        }
    };

    view! {
        // 触发按钮
        <button
            class="btn btn-primary gap-2"
            on:click=move |_| set_open.set(true)
        >
            <Plus attr:class="h-4 w-4" /> "New booking"
        </button>

        // 模态框内容
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Request a mehndi booking"</h3>
                <p class="py-4 text-base-content/70">
                    "Describe your event; artists will send proposals."
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <Show when=move || form_error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || form_error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="event_type" class="label">
                                <span class="label-text">"Event type"</span>
                            </label>
                            <input id="event_type" required
                                type="text"
                                placeholder="Bridal, Eid, party..."
                                on:input=move |ev| form.event_type.set(event_target_value(&ev))
                                prop:value=form.event_type
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="event_date" class="label">
                                <span class="label-text">"Event date"</span>
                            </label>
                            <input id="event_date" required
                                type="date"
                                on:input=move |ev| form.event_date.set(event_target_value(&ev))
                                prop:value=form.event_date
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="city" class="label">
                                <span class="label-text">"City"</span>
                            </label>
                            <input id="city" required
                                type="text"
                                placeholder="Lahore"
                                on:input=move |ev| form.city.set(event_target_value(&ev))
                                prop:value=form.city
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="address" class="label">
                                <span class="label-text">"Address (optional)"</span>
                            </label>
                            <input id="address"
                                type="text"
                                on:input=move |ev| form.address.set(event_target_value(&ev))
                                prop:value=form.address
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="budget_min" class="label">
                                <span class="label-text">"Budget from"</span>
                            </label>
                            <input id="budget_min" type="number" min="0" step="any" required
                                class="input input-bordered w-full"
                                prop:value=move || form.budget_min.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(val) = event_target_value(&ev).parse::<f64>() {
                                        form.budget_min.set(val);
                                    }
                                }
                            />
                        </div>
                        <div class="form-control">
                            <label for="budget_max" class="label">
                                <span class="label-text">"Budget to"</span>
                            </label>
                            <input id="budget_max" type="number" min="0" step="any" required
                                class="input input-bordered w-full"
                                prop:value=move || form.budget_max.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(val) = event_target_value(&ev).parse::<f64>() {
                                        form.budget_max.set(val);
                                    }
                                }
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="notes" class="label">
                            <span class="label-text">"Notes (optional)"</span>
                        </label>
                        <textarea id="notes"
                            class="textarea textarea-bordered w-full"
                            placeholder="Design preferences, number of guests..."
                            on:input=move |ev| form.notes.set(event_target_value(&ev))
                            prop:value=form.notes
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| set_open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            "Submit request"
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
