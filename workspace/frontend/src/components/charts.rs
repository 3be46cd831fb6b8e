use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Plotly wants plain objects, not the `Map`s serde-wasm-bindgen emits by default.
fn to_js(value: &Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Layout shared by every chart on the page, merged under the chart's own keys.
pub fn base_layout(overrides: Value) -> Value {
    let mut layout = serde_json::json!({
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "template": "plotly_white",
    });
    if let (Some(base), Value::Object(extra)) = (layout.as_object_mut(), overrides) {
        base.extend(extra);
    }
    layout
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    /// DOM id of the chart container; Plotly addresses it by id
    pub id: AttrValue,
    pub data: Value,
    pub layout: Value,
    #[prop_or(500)]
    pub height: u32,
}

#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.data.clone(), props.layout.clone()),
        move |(chart_ref, data, layout)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let config = serde_json::json!({"responsive": true, "displayModeBar": false});
                let div_id = element.id();
                match (to_js(data), to_js(layout), to_js(&config)) {
                    (Ok(data), Ok(layout), Ok(config)) if !div_id.is_empty() => {
                        log::trace!("Drawing chart {}", div_id);
                        newPlot(&div_id, data, layout, config);
                    }
                    (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                        log::error!("Failed to convert chart {} for Plotly: {}", div_id, e);
                    }
                    _ => log::warn!("Chart container has no id, skipping draw"),
                }
            }
            || ()
        },
    );

    html! {
        <div
            ref={chart_ref}
            id={props.id.clone()}
            class="chart-container"
            style={format!("height: {}px;", props.height)}
        ></div>
    }
}
