use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::data::booking::{BookingRequest, Slot};
use crate::data::client::{fetch_available_slots, submit_booking};
use crate::pages::slot_grid::SlotGrid;
use crate::utils::date::today_date_string;
use crate::utils::dom::alert;

#[component]
pub fn BookingPage() -> impl IntoView {
    let (date_input, set_date_input) = create_signal(today_date_string());
    let (name_input, set_name_input) = create_signal(String::new());
    let (phone_input, set_phone_input) = create_signal(String::new());

    let (slots, set_slots) = create_signal(Vec::<Slot>::new());
    let (selected_time, set_selected_time) = create_signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = create_signal(false);

    // Generation counter for slot loads; a stale response must never
    // overwrite the list rendered by a later request.
    let load_generation = StoredValue::new(0_u64);

    let load_slots = move |date: String| {
        let token = load_generation.get_value() + 1;
        load_generation.set_value(token);

        leptos::task::spawn_local(async move {
            match fetch_available_slots(&date).await {
                Ok(fetched) => {
                    if load_generation.get_value() == token {
                        set_selected_time.set(None);
                        set_slots.set(fetched);
                    }
                }
                Err(err) => {
                    // Slot-load failures stay silent; the previous list
                    // remains rendered and the user can retry.
                    leptos::logging::log!("Error fetching available slots: {:?}", err);
                }
            }
        });
    };

    #[cfg(not(feature = "ssr"))]
    load_slots(date_input.get_untracked());

    let select_slot = move |time: String| {
        set_selected_time.set(Some(time));
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        if is_submitting.get() {
            return;
        }

        let request = BookingRequest {
            date: date_input.get(),
            time: selected_time.get().unwrap_or_default(),
            name: name_input.get(),
            phone_number: phone_input.get(),
        };

        if !request.is_complete() {
            alert("Date, time slot, name, and phone number are required.");
            return;
        }

        set_is_submitting.set(true);
        leptos::task::spawn_local(async move {
            match submit_booking(&request).await {
                Ok(response) => match response.error {
                    Some(error) => {
                        alert(&format!("Error: {}", error));
                    }
                    None => {
                        alert("Booking successful!");
                        load_slots(request.date);
                    }
                },
                Err(err) => {
                    leptos::logging::log!("Error booking time slot: {:?}", err);
                    alert("Error booking time");
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto p-4">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold text-gray-800">Book an Appointment</h2>
            </div>

            <div class="mb-6">
                <div class="flex flex-col">
                    <label for="date" class="text-sm font-medium text-gray-700 mb-1">Date:</label>
                    <input
                        id="date"
                        type="date"
                        class="px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        prop:value={date_input}
                        on:change=move |ev| {
                            let date = event_target_value(&ev);
                            set_date_input.set(date.clone());
                            load_slots(date);
                        }
                    />
                </div>
            </div>

            <div class="mb-6">
                <h3 class="text-sm font-medium text-gray-700 mb-2">Available time slots:</h3>
                <SlotGrid slots=slots selected=selected_time on_select=select_slot/>
                <div class="mt-2 text-sm text-gray-600">
                    {move || match selected_time.get() {
                        Some(time) => format!("Selected time: {}", time),
                        None => "No time slot selected".to_string(),
                    }}
                </div>
            </div>

            <form id="booking-form" on:submit=handle_submit>
                <div class="flex flex-wrap gap-4 items-end">
                    <div class="flex flex-col">
                        <label for="name" class="text-sm font-medium text-gray-700 mb-1">Name:</label>
                        <input
                            id="name"
                            type="text"
                            class="px-3 py-2 border border-gray-300 rounded-md"
                            placeholder="Your name"
                            prop:value={name_input}
                            on:input=move |ev| set_name_input.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="flex flex-col">
                        <label for="phone" class="text-sm font-medium text-gray-700 mb-1">Phone number:</label>
                        <input
                            id="phone"
                            type="tel"
                            class="px-3 py-2 border border-gray-300 rounded-md"
                            placeholder="555-1234"
                            prop:value={phone_input}
                            on:input=move |ev| set_phone_input.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 transition-colors disabled:opacity-50"
                        prop:disabled={is_submitting}
                    >
                        {move || if is_submitting.get() { "Booking..." } else { "Book" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
