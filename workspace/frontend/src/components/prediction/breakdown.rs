use traffy::Breakdown;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryBreakdownProps {
    pub breakdown: Breakdown,
}

/// Top categories as proportional bars, the remainder as pills.
#[function_component(CategoryBreakdown)]
pub fn category_breakdown(props: &CategoryBreakdownProps) -> Html {
    let breakdown = &props.breakdown;

    html! {
        <div class="card bg-base-100 shadow lg:col-span-2">
            <div class="card-body">
                <h3 class="card-title">
                    <i class="fas fa-chart-line text-secondary"></i>
                    {"Category Breakdown"}
                </h3>

                if breakdown.bars.is_empty() {
                    <div class="text-center py-4 opacity-60">{"No categories predicted"}</div>
                }

                <div class="space-y-6">
                    { for breakdown.bars.iter().map(|bar| html! {
                        <div key={bar.name.clone()}>
                            <div class="flex justify-between items-center mb-2">
                                <span class="font-bold flex items-center gap-3">
                                    <span class="badge badge-ghost">{bar.rank}</span>
                                    {&bar.name}
                                </span>
                                <span class="font-bold font-mono">{format!("{:.1}", bar.count)}</span>
                            </div>
                            <progress
                                class="progress progress-primary w-full h-3"
                                value={format!("{:.2}", bar.width_percent())}
                                max="100"
                            />
                        </div>
                    }) }
                </div>

                <div class="divider"></div>
                <p class="text-xs font-bold uppercase tracking-wider opacity-50">{"Other Categories"}</p>
                <div class="flex flex-wrap gap-2">
                    { for breakdown.others.iter().map(|category| html! {
                        <div key={category.name.clone()} class="badge badge-outline gap-2 p-3">
                            <span>{&category.name}</span>
                            <span class="font-bold font-mono text-xs">{format!("{:.1}", category.count)}</span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
