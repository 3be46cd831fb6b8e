use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

/// Spinner for a card whose content is on its way.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body flex-row justify-center items-center gap-4">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                if let Some(text) = &props.text {
                    <p class="text-sm opacity-60">{text}</p>
                }
            </div>
        </div>
    }
}
