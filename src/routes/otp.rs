//! One-time PIN route.
//!
//! The hard screen of the flow: a six-cell code grid with an explicit focus
//! index, a resend countdown with exactly one scheduled tick outstanding, and
//! a verify submit whose outcome handling is decided by `flow::verify`.

use crate::app_lib::config::AppConfig;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::VerifyOtpRequest;
use crate::flow::countdown::Countdown;
use crate::flow::otp::{OtpEntry, OTP_LEN};
use crate::flow::verify::{self, VerifyOutcome};
use crate::routes::paths;
use gloo_timers::callback::Timeout;
use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::html;
use leptos::logging;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn OtpPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = auth.identifier_or_default();

    let (entry, set_entry) = signal(OtpEntry::new());
    let (countdown, set_countdown) = signal(Countdown::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // One outstanding tick at a time. The effect reruns on every countdown
    // change, drops the fired timeout, and schedules the next one until the
    // counter reaches zero; unmount cancels whatever is pending.
    let pending_tick = StoredValue::new_local(None::<Timeout>);
    Effect::new(move |_| {
        let keep_ticking = countdown.with(|timer| !timer.resend_ready());
        pending_tick.update_value(|slot| {
            slot.take();
        });
        if keep_ticking {
            pending_tick.set_value(Some(Timeout::new(1_000, move || {
                set_countdown.update(|timer| {
                    timer.tick();
                });
            })));
        }
    });
    on_cleanup(move || {
        pending_tick.update_value(|slot| {
            slot.take();
        });
    });

    // The focus index is state; this is the one place it touches the DOM.
    // The memo keeps notifications that leave the index unchanged (a rejected
    // keystroke, a deletion in a clicked cell) from re-asserting it, and the
    // per-cell focus handlers below keep the model in step with the user.
    let input_refs: [NodeRef<html::Input>; OTP_LEN] = std::array::from_fn(|_| NodeRef::new());
    let focus_index = Memo::new(move |_| entry.with(|state| state.focus()));
    Effect::new(move |_| {
        let index = focus_index.get();
        if let Some(input) = input_refs[index].get() {
            let _ = input.focus();
        }
    });

    let verify_action = Action::new_local(move |request: &VerifyOtpRequest| {
        let request = request.clone();
        async move { client::verify_otp(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match verify::resolve(AppConfig::load().verify_mode(), &result) {
                VerifyOutcome::Advance => {
                    navigate(paths::ACCOUNT, Default::default());
                }
                VerifyOutcome::InvalidCode => {
                    set_error.set(Some("Invalid code".to_string()));
                    set_entry.update(|state| state.reset());
                }
                VerifyOutcome::TransportFailed => {
                    if let Err(err) = &result {
                        logging::error!("OTP submission failed: {err}");
                    }
                    set_entry.update(|state| state.focus_first());
                }
            }
        }
    });

    let submit_email = email.clone();
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        verify_action.dispatch(VerifyOtpRequest {
            otp: entry.with_untracked(|state| state.code()),
            email: submit_email.clone(),
        });
    };

    view! {
        <AppShell>
            <div class="w-full max-w-md mx-auto mt-10 text-center">
                <div class="flex flex-col items-start justify-start text-start">
                    <h1 class="text-2xl font-bold">"One-Time PIN"</h1>
                    <span class="text-lg font-bold text-gray-700">{format!("Please {email}")}</span>
                    <span class="text-gray-700">
                        "For your protection, please enter the One-Time PIN that has been sent to your mobile number. The code expires in 5 minutes."
                    </span>
                </div>

                <form on:submit=on_submit>
                    <div class="flex justify-center gap-2 my-4">
                        {(0..OTP_LEN)
                            .map(|index| {
                                let node_ref = input_refs[index];
                                view! {
                                    <input
                                        node_ref=node_ref
                                        type="text"
                                        inputmode="numeric"
                                        maxlength="1"
                                        class="w-12 h-14 text-center text-xl bg-white border border-stone-300 focus:outline-none focus:border-green-400"
                                        prop:value=move || {
                                            entry.with(|state| state.cell(index).to_string())
                                        }
                                        on:input=move |event| {
                                            let value = event_target_value(&event);
                                            set_entry
                                                .update(|state| {
                                                    state.set_digit(index, &value);
                                                });
                                        }
                                        on:keydown=move |event: KeyboardEvent| {
                                            if event.key() == "Backspace" {
                                                set_entry.update(|state| state.backspace(index));
                                            }
                                        }
                                        on:focus=move |_| {
                                            set_entry.update(|state| state.focus_to(index));
                                        }
                                    />
                                }
                            })
                            .collect_view()}
                    </div>

                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! {
                                    <div class="mb-2">
                                        <Alert kind=AlertKind::Error message=message />
                                    </div>
                                }
                            })
                    }}

                    <p class="text-xs text-gray-500 mb-4">
                        {move || {
                            countdown
                                .with(|timer| {
                                    if timer.resend_ready() {
                                        "You can request a new code now.".to_string()
                                    } else {
                                        format!(
                                            "You can resend code if you don't receive it in {}",
                                            timer.display(),
                                        )
                                    }
                                })
                        }}
                    </p>

                    <Button button_type="submit" disabled=verify_action.pending()>
                        {move || {
                            if verify_action.pending().get() { "Verifying..." } else { "Next" }
                        }}
                    </Button>
                    {move || {
                        verify_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                </form>
            </div>
        </AppShell>
    }
}
