use serde_json::json;
use yew::prelude::*;

use crate::components::charts::{base_layout, PlotlyChart};
use crate::mock_data::{
    complaint_cube, complaint_heatmap, complaint_type_sunburst, generate_daily_series,
    similarity_network, top_subdistricts, COMPLAINT_TYPES, TOP_SUBDISTRICTS,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Overview,
    Trends,
    Network,
    ThreeD,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Overview, Tab::Trends, Tab::Network, Tab::ThreeD];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Trends => "Trends",
            Tab::Network => "Network",
            Tab::ThreeD => "3D View",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Tab::Overview => "fa-chart-bar",
            Tab::Trends => "fa-chart-line",
            Tab::Network => "fa-project-diagram",
            Tab::ThreeD => "fa-cube",
        }
    }
}

#[derive(Properties, PartialEq)]
struct ChartCardProps {
    title: AttrValue,
    children: Children,
}

#[function_component(ChartCard)]
fn chart_card(props: &ChartCardProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{props.title.clone()}</h2>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(OverviewTab)]
fn overview_tab() -> Html {
    let top = top_subdistricts();
    let counts: Vec<f64> = top.iter().map(|s| s.complaints).collect();
    let names: Vec<&str> = top.iter().map(|s| s.name).collect();

    let bars = json!([{
        "type": "bar",
        "orientation": "h",
        "x": counts,
        "y": names,
        "text": counts,
        "textposition": "auto",
        "marker": {
            "color": counts,
            "colorscale": "Reds",
            "showscale": true,
            "colorbar": {"title": "Complaints"}
        }
    }]);
    let bars_layout = base_layout(json!({
        "xaxis": {"title": "Total Complaints"},
        "yaxis": {"title": "Subdistrict", "autorange": "reversed"},
        "margin": {"l": 120, "r": 50, "t": 20, "b": 50}
    }));

    let sunburst = complaint_type_sunburst();
    let types = json!([{
        "type": "sunburst",
        "labels": sunburst.labels,
        "parents": sunburst.parents,
        "values": sunburst.values,
        "textinfo": "label+percent entry",
        "marker": {"colorscale": "RdYlBu", "reversescale": true}
    }]);
    let types_layout = base_layout(json!({"margin": {"l": 0, "r": 0, "t": 20, "b": 0}}));

    html! {
        <div class="space-y-8">
            <ChartCard title="Top 10 Subdistricts by Total Complaints">
                <PlotlyChart id="chart-top-subdistricts" data={bars} layout={bars_layout} />
            </ChartCard>
            <ChartCard title="Complaint Types Distribution">
                <PlotlyChart id="chart-complaint-types" data={types} layout={types_layout} height={600} />
            </ChartCard>
        </div>
    }
}

#[function_component(TrendsTab)]
fn trends_tab() -> Html {
    let series = generate_daily_series();
    let dates: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
    let values: Vec<f64> = series.iter().map(|p| p.complaints).collect();

    let daily = json!([{
        "type": "scatter",
        "mode": "lines",
        "x": dates,
        "y": values,
        "name": "Total Complaints",
        "line": {"color": "#e74c3c", "width": 2}
    }]);
    let daily_layout = base_layout(json!({
        "xaxis": {"title": "Date"},
        "yaxis": {"title": "Number of Complaints"},
        "hovermode": "x unified",
        "margin": {"l": 60, "r": 50, "t": 20, "b": 60}
    }));

    let heatmap = json!([{
        "type": "heatmap",
        "z": complaint_heatmap(),
        "x": COMPLAINT_TYPES,
        "y": TOP_SUBDISTRICTS,
        "colorscale": "YlOrRd",
        "colorbar": {"title": "Complaints"}
    }]);
    let heatmap_layout = base_layout(json!({
        "xaxis": {"title": "Complaint Type", "tickangle": -45},
        "yaxis": {"title": "Subdistrict"},
        "margin": {"l": 120, "r": 50, "t": 20, "b": 100}
    }));

    html! {
        <div class="space-y-8">
            <ChartCard title="Complaints Over Time (Daily)">
                <PlotlyChart id="chart-daily-trend" data={daily} layout={daily_layout} />
            </ChartCard>
            <ChartCard title="Heatmap: Complaint Types by Top Subdistricts">
                <PlotlyChart id="chart-type-heatmap" data={heatmap} layout={heatmap_layout} height={600} />
            </ChartCard>
        </div>
    }
}

#[function_component(NetworkTab)]
fn network_tab() -> Html {
    let network = similarity_network();
    let (edge_x, edge_y) = network.edge_segments();
    let sizes: Vec<f64> = network.nodes.iter().map(|n| n.size).collect();

    let data = json!([
        {
            "type": "scatter",
            "mode": "lines",
            "x": edge_x,
            "y": edge_y,
            "line": {"width": 1, "color": "#888"},
            "hoverinfo": "none"
        },
        {
            "type": "scatter",
            "mode": "markers+text",
            "x": network.nodes.iter().map(|n| n.x).collect::<Vec<_>>(),
            "y": network.nodes.iter().map(|n| n.y).collect::<Vec<_>>(),
            "text": network.nodes.iter().map(|n| n.name).collect::<Vec<_>>(),
            "textposition": "top center",
            "textfont": {"size": 10},
            "hoverinfo": "text",
            "marker": {
                "size": sizes,
                "color": sizes,
                "colorscale": "YlOrRd",
                "showscale": true,
                "colorbar": {"title": "Complaints"},
                "line": {"width": 2, "color": "white"}
            }
        }
    ]);
    let layout = base_layout(json!({
        "showlegend": false,
        "hovermode": "closest",
        "xaxis": {"showgrid": false, "zeroline": false, "showticklabels": false},
        "yaxis": {"showgrid": false, "zeroline": false, "showticklabels": false},
        "margin": {"l": 20, "r": 20, "t": 20, "b": 20}
    }));

    html! {
        <ChartCard title="Subdistrict Similarity Network">
            <PlotlyChart id="chart-similarity-network" {data} {layout} height={700} />
        </ChartCard>
    }
}

#[function_component(ThreeDTab)]
fn three_d_tab() -> Html {
    let cube = complaint_cube();
    let complaints: Vec<f64> = cube.iter().map(|p| p.complaints).collect();

    let data = json!([{
        "type": "scatter3d",
        "mode": "markers",
        "x": cube.iter().map(|p| p.month).collect::<Vec<_>>(),
        "y": cube.iter().map(|p| p.subdistrict).collect::<Vec<_>>(),
        "z": complaints,
        "marker": {
            "size": 5,
            "color": complaints,
            "colorscale": "Viridis",
            "showscale": true,
            "colorbar": {"title": "Complaints"},
            "opacity": 0.8
        }
    }]);
    let layout = base_layout(json!({
        "scene": {
            "xaxis": {"title": "Time (Month Index)"},
            "yaxis": {"title": "Subdistrict Index"},
            "zaxis": {"title": "Total Complaints"}
        },
        "margin": {"l": 0, "r": 0, "t": 20, "b": 0}
    }));

    html! {
        <ChartCard title="3D View: Complaints Over Time and Space">
            <PlotlyChart id="chart-complaint-cube" {data} {layout} height={700} />
        </ChartCard>
    }
}

#[function_component(Visualizations)]
pub fn visualizations() -> Html {
    let active = use_state(|| Tab::Overview);

    html! {
        <>
            <div role="tablist" class="tabs tabs-bordered">
                { for Tab::ALL.iter().map(|tab| {
                    let tab = *tab;
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_| {
                            log::debug!("Switching to {:?} tab", tab);
                            active.set(tab);
                        })
                    };
                    html! {
                        <a role="tab" class={classes!("tab", "gap-2", (*active == tab).then_some("tab-active"))} {onclick}>
                            <i class={classes!("fas", tab.icon())}></i>
                            {tab.label()}
                        </a>
                    }
                }) }
            </div>
            {match *active {
                Tab::Overview => html! { <OverviewTab /> },
                Tab::Trends => html! { <TrendsTab /> },
                Tab::Network => html! { <NetworkTab /> },
                Tab::ThreeD => html! { <ThreeDTab /> },
            }}
        </>
    }
}
