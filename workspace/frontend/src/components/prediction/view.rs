use traffy::classifier::DEFAULT_TOP_N;
use traffy::PredictionResult;
use yew::prelude::*;

use super::{CategoryBreakdown, SeveritySummary};

#[derive(Properties, PartialEq)]
pub struct PredictionReportProps {
    pub result: PredictionResult,
    pub on_reset: Callback<()>,
}

#[function_component(PredictionReport)]
pub fn prediction_report(props: &PredictionReportProps) -> Html {
    let breakdown = props.result.breakdown(DEFAULT_TOP_N);
    log::trace!(
        "Rendering report for {}: {} bars, {} others",
        props.result.subdistrict,
        breakdown.bars.len(),
        breakdown.others.len()
    );

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between px-2">
                <h2 class="text-2xl font-bold flex items-center gap-2">
                    <i class="fas fa-chart-bar text-primary"></i>
                    {"Prediction Report"}
                </h2>
                <span class="text-sm opacity-60">
                    {format!("{} · {}", props.result.subdistrict, props.result.date)}
                </span>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <SeveritySummary
                    total={breakdown.total}
                    severity={breakdown.severity}
                    on_reset={props.on_reset.clone()}
                />
                <CategoryBreakdown breakdown={breakdown.clone()} />
            </div>
        </div>
    }
}
