use leptos::prelude::*;

use crate::data::booking::Slot;

#[component]
pub fn SlotGrid(
    slots: ReadSignal<Vec<Slot>>,
    selected: ReadSignal<Option<String>>,
    on_select: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div id="time-slots" class="flex flex-wrap gap-2">
            {move || {
                slots
                    .get()
                    .into_iter()
                    .map(|slot| {
                        view! {
                            <SlotButton slot=slot selected=selected on_select=on_select/>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn SlotButton(
    slot: Slot,
    selected: ReadSignal<Option<String>>,
    on_select: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let label = slot.time.clone();

    if slot.booked {
        return view! {
            <button
                type="button"
                class="px-3 py-2 rounded-md text-sm bg-gray-100 text-gray-400 line-through cursor-not-allowed"
                disabled=true
            >
                {label}
            </button>
        }
        .into_any();
    }

    let time = slot.time.clone();
    let click_time = slot.time;

    view! {
        <button
            type="button"
            class=move || {
                if selected.get().as_deref() == Some(time.as_str()) {
                    "px-3 py-2 rounded-md text-sm bg-blue-600 text-white border border-blue-600"
                } else {
                    "px-3 py-2 rounded-md text-sm bg-white text-gray-700 border border-gray-300 hover:bg-blue-50"
                }
            }
            on:click=move |_| on_select(click_time.clone())
        >
            {label}
        </button>
    }
    .into_any()
}
