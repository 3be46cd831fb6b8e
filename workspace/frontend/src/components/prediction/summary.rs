use traffy::Severity;
use yew::prelude::*;

fn severity_style(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Low => ("badge-success", "fa-check-circle"),
        Severity::Moderate => ("badge-warning", "fa-exclamation-triangle"),
        Severity::High => ("badge-error", "fa-chart-line"),
    }
}

#[derive(Properties, PartialEq)]
pub struct SeveritySummaryProps {
    pub total: f64,
    pub severity: Severity,
    pub on_reset: Callback<()>,
}

#[function_component(SeveritySummary)]
pub fn severity_summary(props: &SeveritySummaryProps) -> Html {
    let (badge_class, icon) = severity_style(props.severity);

    let onreset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| {
            log::debug!("User reset the prediction");
            on_reset.emit(());
        })
    };

    let onprint = Callback::from(|_| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                log::error!("Print failed: {:?}", e);
            }
        }
    });

    html! {
        <div class="space-y-4">
            <div class="card bg-base-100 shadow">
                <div class="card-body items-center text-center">
                    <p class="text-sm font-bold uppercase tracking-widest opacity-60">{"Forecasted Volume"}</p>
                    <div class="text-7xl font-black tracking-tighter">{format!("{:.0}", props.total.round())}</div>
                    <p class="opacity-60 mb-4">{"complaints / day"}</p>
                    <div class={classes!("badge", "badge-lg", "gap-2", "py-4", "px-5", badge_class)}>
                        <i class={classes!("fas", icon)}></i>
                        <span class="font-bold">{props.severity.label()}</span>
                    </div>
                </div>
            </div>
            <div class="grid grid-cols-2 gap-3">
                <button type="button" class="btn btn-outline" onclick={onreset}>
                    <i class="fas fa-sync-alt"></i>
                    {" Reset"}
                </button>
                <button type="button" class="btn btn-outline" onclick={onprint}>
                    <i class="fas fa-print"></i>
                    {" Print"}
                </button>
            </div>
        </div>
    }
}
