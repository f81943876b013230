//! Interactive demo modal.
//!
//! Three inputs (power draw, diver activity, water temperature) and three
//! derived outputs. The arithmetic lives in [`calc`]; this component just
//! re-derives the outputs from the current inputs on every change event.

use std::str::FromStr;

use gloo_console::error;
use gloo_timers::callback::Timeout;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::engine::calc::{self, ActivityLevel, DemoInput};

const MODAL_CSS: &str = r#"
.demo-modal {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(8px);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 9000;
    animation: modalFadeIn 0.3s ease;
}

.demo-modal.closing {
    animation: modalFadeOut 0.3s ease forwards;
}

@keyframes modalFadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes modalFadeOut {
    from { opacity: 1; }
    to { opacity: 0; }
}

.demo-modal-content {
    background: #1c1c1e;
    border: 1px solid rgba(255, 255, 255, 0.12);
    border-radius: 20px;
    padding: 32px;
    width: min(480px, calc(100vw - 48px));
    animation: modalRise 0.3s ease;
}

@keyframes modalRise {
    from { transform: translateY(24px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}

.demo-modal-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 8px;
}

.demo-modal-header h2 {
    font-size: 1.4rem;
    color: #f5f5f7;
}

.demo-modal-close {
    background: none;
    border: none;
    color: #8e8e93;
    font-size: 1.2rem;
    cursor: pointer;
    padding: 4px 8px;
}

.demo-modal-close:hover {
    color: #f5f5f7;
}

.demo-modal-hint {
    color: #8e8e93;
    font-size: 0.9rem;
    margin-bottom: 24px;
}

.demo-controls label {
    display: block;
    color: #f5f5f7;
    font-size: 0.85rem;
    margin: 16px 0 6px;
}

.demo-slider-row {
    display: flex;
    align-items: center;
    gap: 12px;
}

.demo-slider-row input[type="range"] {
    flex: 1;
    accent-color: #007AFF;
}

.demo-reading {
    color: #007AFF;
    font-variant-numeric: tabular-nums;
    min-width: 62px;
    text-align: right;
}

.demo-controls select {
    width: 100%;
    background: #2c2c2e;
    color: #f5f5f7;
    border: 1px solid rgba(255, 255, 255, 0.12);
    border-radius: 8px;
    padding: 8px 10px;
}

.demo-output {
    margin-top: 28px;
    border-top: 1px solid rgba(255, 255, 255, 0.08);
    padding-top: 16px;
}

.output-row {
    display: flex;
    justify-content: space-between;
    padding: 6px 0;
}

.output-label {
    color: #8e8e93;
}

.output-value {
    color: #34C759;
    font-weight: 600;
    font-variant-numeric: tabular-nums;
}
"#;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_close: Callback<()>,
}

#[function_component(DemoModal)]
pub fn demo_modal(props: &Props) -> Html {
    let input = use_state(DemoInput::default);
    let closing = use_state(|| false);

    let outputs = calc::compute_demo_outputs(&input);

    let on_power_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let field: HtmlInputElement = e.target_unchecked_into();
            if let Ok(power_kwh) = field.value().parse::<f64>() {
                input.set(
                    DemoInput {
                        power_kwh,
                        ..*input
                    }
                    .clamped(),
                );
            }
        })
    };

    let on_activity_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let field: HtmlSelectElement = e.target_unchecked_into();
            match ActivityLevel::from_str(&field.value()) {
                Ok(activity) => input.set(DemoInput {
                    activity,
                    ..*input
                }),
                Err(err) => error!(format!("demo modal: {err}")),
            }
        })
    };

    let on_temp_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let field: HtmlInputElement = e.target_unchecked_into();
            if let Ok(water_temp_c) = field.value().parse::<f64>() {
                input.set(
                    DemoInput {
                        water_temp_c,
                        ..*input
                    }
                    .clamped(),
                );
            }
        })
    };

    let close = {
        let closing = closing.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if *closing {
                return;
            }
            closing.set(true);
            let on_close = on_close.clone();
            Timeout::new(config::MODAL_CLOSE_MS, move || on_close.emit(())).forget();
        })
    };

    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
            <style>{ MODAL_CSS }</style>
            <div
                class={classes!("demo-modal", (*closing).then_some("closing"))}
                onclick={close.clone()}
            >
                <div class="demo-modal-content" onclick={swallow_click}>
                    <div class="demo-modal-header">
                        <h2>{"Live System Demo"}</h2>
                        <button class="demo-modal-close" onclick={close}>{"✕"}</button>
                    </div>
                    <p class="demo-modal-hint">
                        {"Adjust the dive profile and watch the life-support outputs respond."}
                    </p>
                    <div class="demo-controls">
                        <label for="demo-power">{"Suit power draw"}</label>
                        <div class="demo-slider-row">
                            <input
                                id="demo-power"
                                type="range"
                                min="1"
                                max="5"
                                step="1"
                                value={input.power_kwh.to_string()}
                                oninput={on_power_input}
                            />
                            <span class="demo-reading">{ format!("{} kWh", input.power_kwh) }</span>
                        </div>
                        <label for="demo-activity">{"Diver activity"}</label>
                        <select id="demo-activity" onchange={on_activity_change}>
                            {
                                ActivityLevel::ALL.iter().map(|level| html! {
                                    <option
                                        value={level.as_str()}
                                        selected={input.activity == *level}
                                    >
                                        { level.label() }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                        <label for="demo-temp">{"Water temperature"}</label>
                        <div class="demo-slider-row">
                            <input
                                id="demo-temp"
                                type="range"
                                min="0"
                                max="30"
                                step="1"
                                value={input.water_temp_c.to_string()}
                                oninput={on_temp_input}
                            />
                            <span class="demo-reading">{ format!("{}°C", input.water_temp_c) }</span>
                        </div>
                    </div>
                    <div class="demo-output">
                        <div class="output-row">
                            <span class="output-label">{"Oxygen production"}</span>
                            <span class="output-value">{ outputs.oxygen_display() }</span>
                        </div>
                        <div class="output-row">
                            <span class="output-label">{"Energy generated"}</span>
                            <span class="output-value">{ outputs.energy_display() }</span>
                        </div>
                        <div class="output-row">
                            <span class="output-label">{"System efficiency"}</span>
                            <span class="output-value">{ outputs.efficiency_display() }</span>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
