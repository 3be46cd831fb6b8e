use std::rc::Rc;

use traffy::{ComboboxEvent, ComboboxState, Key, LocationCatalog};
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::use_click_outside;

#[derive(Properties, PartialEq)]
pub struct SubdistrictComboboxProps {
    pub catalog: Rc<LocationCatalog>,
    pub state: ComboboxState,
    pub on_event: Callback<ComboboxEvent>,
}

/// Searchable subdistrict picker.
#[function_component(SubdistrictCombobox)]
pub fn subdistrict_combobox(props: &SubdistrictComboboxProps) -> Html {
    let container_ref = use_node_ref();

    {
        let on_event = props.on_event.clone();
        use_click_outside(
            container_ref.clone(),
            Callback::from(move |_| on_event.emit(ComboboxEvent::Dismiss)),
        );
    }

    let oninput = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_event.emit(ComboboxEvent::Input(input.value()));
        })
    };

    let onfocus = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: FocusEvent| on_event.emit(ComboboxEvent::Focus))
    };

    let onkeydown = {
        let on_event = props.on_event.clone();
        let catalog = props.catalog.clone();
        let state = props.state.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = Key::from_dom(&e.key());
            if key == Key::Other {
                return;
            }
            // The default must be suppressed before the handler returns, so
            // run the key against a scratch copy to learn the outcome now.
            let outcome = state.clone().handle_key(key, &catalog);
            if outcome.prevent_default {
                e.prevent_default();
            }
            log::trace!("Combobox key {:?}", key);
            on_event.emit(ComboboxEvent::Key(key));
        })
    };

    let onclear = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(ComboboxEvent::Clear))
    };

    let state = &props.state;
    let view = state.filtered_view(&props.catalog);
    let highlighted = state.highlighted_index(&props.catalog);

    html! {
        <div class="form-control relative" ref={container_ref}>
            <label class="label">
                <span class="label-text font-bold">{"Subdistrict (แขวง)"}</span>
            </label>
            <label class="input input-bordered flex items-center gap-2">
                <i class={classes!("fas", "fa-map-marker-alt", if state.is_open() { "text-primary" } else { "opacity-50" })}></i>
                <input
                    type="text"
                    class="grow"
                    placeholder="Search location..."
                    autocomplete="off"
                    value={state.query().to_string()}
                    {oninput}
                    {onfocus}
                    {onkeydown}
                />
                if !state.query().is_empty() {
                    <button type="button" class="btn btn-ghost btn-xs btn-circle" onclick={onclear}>
                        <i class="fas fa-times"></i>
                    </button>
                }
            </label>

            if state.is_open() {
                <div class="absolute top-full w-full mt-2 bg-base-100 rounded-box shadow-xl border border-base-300 max-h-72 overflow-y-auto z-50">
                    if view.is_empty() {
                        <div class="p-4 text-center text-sm opacity-60">{"No subdistricts found"}</div>
                    } else {
                        <ul class="menu w-full">
                            { for view.iter().enumerate().map(|(index, name)| {
                                let is_highlighted = index == highlighted;
                                let onmouseenter = {
                                    let on_event = props.on_event.clone();
                                    Callback::from(move |_: MouseEvent| on_event.emit(ComboboxEvent::Hover(index)))
                                };
                                let onclick = {
                                    let on_event = props.on_event.clone();
                                    let name = name.to_string();
                                    Callback::from(move |_: MouseEvent| on_event.emit(ComboboxEvent::Pick(name.clone())))
                                };
                                html! {
                                    <li key={*name}>
                                        <a class={classes!(is_highlighted.then_some("active"))} {onmouseenter} {onclick}>
                                            <i class={classes!("fas", "fa-map-marker-alt", if is_highlighted { "text-primary-content" } else { "opacity-30" })}></i>
                                            <span class="font-medium">{*name}</span>
                                        </a>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                </div>
            }
        </div>
    }
}
