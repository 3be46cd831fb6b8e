use traffy::date::{max_date, min_date, ISO_FORMAT};
use traffy::DatePreset;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    pub value: String,
    pub on_change: Callback<String>,
    pub on_preset: Callback<DatePreset>,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            log::debug!("Target date changed to {}", input.value());
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="form-control">
            <div class="label">
                <span class="label-text font-bold">{"Target Date"}</span>
                <div class="flex gap-1">
                    { for DatePreset::ALL.iter().map(|preset| {
                        let preset = *preset;
                        let on_preset = props.on_preset.clone();
                        html! {
                            <button
                                type="button"
                                class="btn btn-ghost btn-xs"
                                onclick={Callback::from(move |_| on_preset.emit(preset))}
                            >
                                {preset.label()}
                            </button>
                        }
                    }) }
                </div>
            </div>
            <label class="input input-bordered flex items-center gap-2">
                <i class="fas fa-calendar-day opacity-50"></i>
                <input
                    type="date"
                    class="grow"
                    value={props.value.clone()}
                    min={min_date().format(ISO_FORMAT).to_string()}
                    max={max_date().format(ISO_FORMAT).to_string()}
                    {onchange}
                />
            </label>
        </div>
    }
}
