use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use career_mentor::booking::{BookingForm, SessionType, COUNSELORS};
use career_mentor::models::BookingConfirmation;
use career_mentor::CareerGateway;

use crate::api;

const BOOKING_FAILURE: &str = "Failed to book session. Please try again.";

/// Counseling session booking form and its confirmation.
#[component]
pub fn BookingPage() -> impl IntoView {
    let form = RwSignal::new(BookingForm::new());
    let (confirmation, set_confirmation) = signal(None::<BookingConfirmation>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(BookingForm::to_request) {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::gateway().schedule_session(&request).await {
                Ok(booking) => {
                    log::info!("Booked session {}", booking.id);
                    set_confirmation.set(Some(booking));
                }
                Err(e) => {
                    log::error!("Booking failed: {e}");
                    set_error.set(Some(BOOKING_FAILURE.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="counseling-booking">
            <h2>"Book a Counseling Session"</h2>
            <form class="booking-form" on:submit=on_submit>
                <div class="form-group">
                    <label>"Counselor"</label>
                    <select
                        class="form-select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.counselor_id = value);
                        }
                    >
                        <option value="">"Select a counselor"</option>
                        {COUNSELORS
                            .iter()
                            .map(|counselor| {
                                view! {
                                    <option
                                        value=counselor.id
                                        selected=move || form.with(|f| f.counselor_id == counselor.id)
                                    >
                                        {counselor.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Session Type"</label>
                    <select
                        class="form-select"
                        on:change=move |ev| {
                            if let Ok(kind) = event_target_value(&ev).parse::<SessionType>() {
                                form.update(|f| f.session_type = kind);
                            }
                        }
                    >
                        {SessionType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option
                                        value=kind.as_str()
                                        selected=move || form.with(|f| f.session_type == kind)
                                    >
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Preferred Date"</label>
                    <input
                        type="date"
                        class="form-input"
                        prop:value=move || form.with(|f| f.preferred_date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.preferred_date = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Preferred Time"</label>
                    <input
                        type="time"
                        class="form-input"
                        prop:value=move || form.with(|f| f.preferred_time.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.preferred_time = value);
                        }
                    />
                </div>
                <button type="submit" class="submit-btn" disabled=loading>
                    {move || if loading.get() { "Booking..." } else { "Book Session" }}
                </button>
            </form>

            {move || error.get().map(|err| view! { <div class="error">{err}</div> })}

            {move || confirmation.get().map(|booking| view! { <Confirmation booking=booking /> })}
        </div>
    }
}

#[component]
fn Confirmation(booking: BookingConfirmation) -> impl IntoView {
    let link = booking.meeting_link.map(|link| {
        let href = link.clone();
        view! {
            <p>
                "Meeting Link: "
                <a href=href target="_blank" rel="noopener noreferrer">{link}</a>
            </p>
        }
    });

    view! {
        <div class="booking-confirmation">
            <h3>"Booking Confirmed!"</h3>
            <p>"Session ID: " {booking.id}</p>
            <p>"Type: " {booking.session_type}</p>
            <p>"Date: " {booking.preferred_date}</p>
            <p>"Time: " {booking.preferred_time}</p>
            {link}
        </div>
    }
}
