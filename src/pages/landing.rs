//! The Nereus landing page.
//!
//! Yew renders the whole page declaratively; the interaction engine is
//! mounted once after the first render and addresses the markup below by
//! class queries. Element-local effects (card lift, ripples, tooltips,
//! press feedback) fire from the callbacks here through [`dispatch`].

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::demo_modal::DemoModal;
use crate::engine::{dispatch, scroll, Engine};

struct Feature {
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    details: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        id: "intake",
        icon: "🌊",
        title: "Seawater Intake",
        blurb: "Micro-filtered ports along the dorsal manifold draw in water with every glide.",
        details: "Twin intake ports feed a self-clearing micro-filter stack rated for silty \
                  harbour water. Flow is regulated against depth pressure, so the electrolysis \
                  cell sees a steady feed from the surface down to sixty metres.",
    },
    Feature {
        id: "electrolysis",
        icon: "⚡",
        title: "Pulse Electrolysis",
        blurb: "The core cell splits seawater into breathable oxygen on demand.",
        details: "A pulsed-current cell strips oxygen from seawater without the membrane \
                  fouling of constant-draw designs. Output follows your breathing rate, \
                  holding 85% efficiency at the 15°C sweet spot.",
    },
    Feature {
        id: "transfer",
        icon: "🫁",
        title: "Closed-Loop Transfer",
        blurb: "Gas routing keeps partial pressures stable between lungs and reservoir.",
        details: "Exhaled gas is scrubbed and blended with fresh oxygen in a closed loop. \
                  The transfer manifold balances partial pressures continuously, so there is \
                  no gulp-and-vent cycle and no bubbles to spook the fish.",
    },
    Feature {
        id: "harvesting",
        icon: "🔋",
        title: "Motion Harvesting",
        blurb: "Piezo fibres woven through the suit recover energy from every fin stroke.",
        details: "The piezo-carbon weave turns flex into charge. A hard-working diver \
                  recovers up to 1.67 kWh per unit of drive power, which the cogeneration \
                  stage feeds straight back into the cell.",
    },
    Feature {
        id: "cogeneration",
        icon: "♻️",
        title: "Thermal Cogeneration",
        blurb: "Waste heat from the cell tempers incoming water before it is split.",
        details: "Electrolysis throws off heat; Nereus routes it through the intake loop to \
                  pre-warm cold water. In a 5°C lake this claws back most of the efficiency \
                  that raw chilled water would cost you.",
    },
    Feature {
        id: "monitoring",
        icon: "📟",
        title: "Dive Monitoring",
        blurb: "The wrist console tracks output rates, depth and cell health in real time.",
        details: "Oxygen production, harvest rate and cell efficiency stream to the wrist \
                  console twice a second. Degraded trends raise a haptic warning long before \
                  any hard limit is reached.",
    },
];

struct SuitComponent {
    class: &'static str,
    label: &'static str,
    tooltip: &'static str,
    details: &'static str,
}

const SUIT_COMPONENTS: &[SuitComponent] = &[
    SuitComponent {
        class: "piezo",
        label: "Piezo weave",
        tooltip: "Harvests energy from motion",
        details: "Thousands of piezo-carbon fibres run shoulder to fin. Flexing them on \
                  every stroke generates the charge that keeps the cell fed between surface \
                  top-ups.",
    },
    SuitComponent {
        class: "thermal",
        label: "Thermal loop",
        tooltip: "Recycles waste heat into the intake",
        details: "A glycol loop carries cell heat forward to the intake manifold, tempering \
                  cold feed water and flattening the efficiency curve in winter conditions.",
    },
    SuitComponent {
        class: "reservoir",
        label: "O₂ reservoir",
        tooltip: "Buffers ninety minutes of breathable gas",
        details: "A conformal reservoir across the back plate buffers output swings and \
                  holds a ninety-minute reserve should the cell ever need to restart at \
                  depth.",
    },
];

struct SpecCategory {
    title: &'static str,
    rows: &'static [(&'static str, &'static str)],
}

const SPEC_CATEGORIES: &[SpecCategory] = &[
    SpecCategory {
        title: "Life Support",
        rows: &[
            ("Oxygen output", "up to 2.4 L/min"),
            ("Operating depth", "0–60 m"),
            ("Water temperature", "0–30°C"),
            ("Cell efficiency", "85% nominal"),
        ],
    },
    SpecCategory {
        title: "Power",
        rows: &[
            ("Drive power", "1–5 kWh"),
            ("Harvest recovery", "1.67 kWh per unit"),
            ("Reserve endurance", "90 min"),
            ("Peak generation", "6.5 kWh"),
        ],
    },
    SpecCategory {
        title: "Suit",
        rows: &[
            ("Mass, trimmed", "14.2 kg"),
            ("Weave", "piezo-carbon composite"),
            ("Console", "wrist-mounted, glove-safe"),
            ("Service interval", "200 dives"),
        ],
    },
];

const BENEFITS: &[(&'static str, &'static str, &'static str)] = &[
    (
        "🤿",
        "Untethered range",
        "No tanks, no umbilical. Your air supply swims with you and recharges as you move.",
    ),
    (
        "🔇",
        "Silent operation",
        "Closed-loop transfer means no exhaust bubbles and no regulator rasp.",
    ),
    (
        "🌡️",
        "Cold-water ready",
        "Thermal cogeneration keeps the cell inside its efficiency band down to freezing.",
    ),
    (
        "🧰",
        "Field serviceable",
        "Filter stack, weave panels and reservoir all swap out dockside without tools.",
    ),
];

const NAV_LINKS: &[(&'static str, &'static str)] = &[
    ("home", "Home"),
    ("features", "Features"),
    ("system", "System"),
    ("specs", "Specs"),
    ("cta", "Get Nereus"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_demo = use_state(|| false);
    let selected_feature = use_state(|| None::<usize>);
    let selected_component = use_state(|| None::<usize>);
    let active_section = use_state(|| "home");

    use_effect_with_deps(
        |_| {
            let engine = Engine::mount();
            move || {
                if let Some(engine) = engine {
                    engine.teardown();
                }
            }
        },
        (),
    );

    let nav_click = {
        let active_section = active_section.clone();
        move |id: &'static str| {
            let active_section = active_section.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                active_section.set(id);
                scroll::smooth_scroll_to(&format!("#{id}"));
            })
        }
    };

    let on_card_enter = Callback::from(|e: MouseEvent| {
        let Some(card) = current_target(&e) else {
            return;
        };
        if let Some(id) = card.get_attribute("data-feature") {
            dispatch::highlight_feature(&id);
        }
        dispatch::card_hover(&card);
    });

    let on_card_leave = Callback::from(|e: MouseEvent| {
        let Some(card) = current_target(&e) else {
            return;
        };
        dispatch::card_leave(&card);
        dispatch::clear_highlights();
    });

    let card_click = {
        let selected_feature = selected_feature.clone();
        move |index: usize| {
            let selected_feature = selected_feature.clone();
            Callback::from(move |e: MouseEvent| {
                if let Some(card) = current_target(&e) {
                    dispatch::spawn_ripple(&card);
                }
                selected_feature.set(Some(index));
            })
        }
    };

    let close_feature_details = {
        let selected_feature = selected_feature.clone();
        Callback::from(move |_: MouseEvent| selected_feature.set(None))
    };

    let component_click = {
        let selected_component = selected_component.clone();
        move |index: usize| {
            let selected_component = selected_component.clone();
            Callback::from(move |e: MouseEvent| {
                if let Some(el) = current_target(&e) {
                    dispatch::pulse_component(&el);
                }
                selected_component.set(Some(index));
            })
        }
    };

    let on_component_enter = Callback::from(|e: MouseEvent| {
        if let Some(el) = current_target(&e) {
            dispatch::show_tooltip(&el);
        }
    });

    let on_component_leave = Callback::from(|_: MouseEvent| dispatch::hide_tooltips());

    let on_explore = Callback::from(|e: MouseEvent| {
        if let Some(button) = current_target(&e) {
            dispatch::press_button(&button);
        }
        scroll::smooth_scroll_to("#features");
    });

    let on_tour = Callback::from(|e: MouseEvent| {
        if let Some(button) = current_target(&e) {
            dispatch::press_button(&button);
        }
        scroll::smooth_scroll_to("#system");
    });

    let on_open_demo = {
        let show_demo = show_demo.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(button) = current_target(&e) {
                dispatch::press_button(&button);
            }
            show_demo.set(true);
        })
    };

    let on_close_demo = {
        let show_demo = show_demo.clone();
        Callback::from(move |_| show_demo.set(false))
    };

    html! {
        <>
            <style>{ LANDING_CSS }</style>

            <nav class="nav">
                <div class="nav-inner">
                    <a href="#home" class="nav-logo" onclick={nav_click("home")}>
                        {"NEREUS"}
                    </a>
                    <div class="nav-links">
                        {
                            NAV_LINKS.iter().map(|&(id, label)| html! {
                                <a
                                    href={format!("#{id}")}
                                    class={classes!(
                                        "nav-link",
                                        (*active_section == id).then_some("active"),
                                    )}
                                    onclick={nav_click(id)}
                                >
                                    { label }
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </nav>

            <header id="home" class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">
                        {"Breathe the water"}<br/>{"you swim in."}
                    </h1>
                    <p class="hero-subtitle">
                        {"Nereus splits breathable oxygen out of seawater as you dive, \
                          powered by nothing but your own motion."}
                    </p>
                    <div class="hero-stats">
                        <div class="hero-stat">
                            <span class="stat-value" data-metric="oxygen">{"100%"}</span>
                            <span class="stat-label">{"oxygen rate"}</span>
                        </div>
                        <div class="hero-stat">
                            <span class="stat-value" data-metric="efficiency">{"85%"}</span>
                            <span class="stat-label">{"cell efficiency"}</span>
                        </div>
                        <div class="hero-stat">
                            <span class="stat-value">{"90 min"}</span>
                            <span class="stat-label">{"reserve"}</span>
                        </div>
                    </div>
                    <div class="hero-actions">
                        <button class="cta-button primary" onclick={on_explore}>
                            {"Explore the system"}
                        </button>
                        <button class="cta-button secondary" onclick={on_open_demo.clone()}>
                            {"Run the live demo"}
                        </button>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="system-preview">
                        <div class="flow-input">
                            <span class="flow-label">{"intake"}</span>
                        </div>
                        <div class="connection"></div>
                        <div class="unit-main">
                            <span class="unit-label">{"electrolysis core"}</span>
                            <div class="indicator-row">
                                <span class="indicator active"></span>
                                <span class="indicator active"></span>
                                <span class="indicator"></span>
                                <span class="indicator"></span>
                            </div>
                            <div class="unit-vents">
                                <span class="vent"></span>
                                <span class="vent"></span>
                                <span class="vent"></span>
                            </div>
                        </div>
                        <div class="connection"></div>
                        <div class="processing-flows">
                            <span class="flow-label">{"transfer loop"}</span>
                        </div>
                        <div class="device-screen">
                            <span class="screen-line"></span>
                            <span class="screen-line"></span>
                            <span class="screen-line"></span>
                        </div>
                    </div>
                </div>
            </header>

            <section id="features" class="features">
                <div class="section-header">
                    <h2>{"One suit, six systems"}</h2>
                    <p>{"Hover a card to see where it lives on the unit."}</p>
                </div>
                <div class="features-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div
                                class="feature-card"
                                data-feature={feature.id}
                                onmouseenter={on_card_enter.clone()}
                                onmouseleave={on_card_leave.clone()}
                                onclick={card_click(index)}
                            >
                                <div class="feature-icon">{ feature.icon }</div>
                                <h3>{ feature.title }</h3>
                                <p>{ feature.blurb }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                {
                    if let Some(feature) = (*selected_feature).and_then(|i| FEATURES.get(i)) {
                        html! {
                            <div class="feature-details">
                                <div class="feature-details-header">
                                    <h3>{ feature.title }</h3>
                                    <button
                                        class="feature-details-close"
                                        onclick={close_feature_details.clone()}
                                    >
                                        {"✕"}
                                    </button>
                                </div>
                                <p>{ feature.details }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </section>

            <section id="system" class="system">
                <div class="section-header">
                    <h2>{"Inside the suit"}</h2>
                    <p>{"Tap a component to pulse it on the diagram."}</p>
                </div>
                <div class="system-visualization">
                    {
                        SUIT_COMPONENTS.iter().enumerate().map(|(index, component)| html! {
                            <div
                                class={classes!("suit-component", component.class)}
                                data-tooltip={component.tooltip}
                                onclick={component_click(index)}
                                onmouseenter={on_component_enter.clone()}
                                onmouseleave={on_component_leave.clone()}
                            >
                                <div class="component-pulse"></div>
                                <span class="component-label">{ component.label }</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                {
                    if let Some(component) =
                        (*selected_component).and_then(|i| SUIT_COMPONENTS.get(i))
                    {
                        html! {
                            <div class="component-details">
                                <h3>{ component.label }</h3>
                                <p>{ component.details }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </section>

            <section id="specs" class="specs">
                <div class="section-header">
                    <h2>{"Specifications"}</h2>
                    <p>{"Numbers from the current production unit."}</p>
                </div>
                <div class="specs-grid">
                    {
                        SPEC_CATEGORIES.iter().map(|category| html! {
                            <div class="spec-category">
                                <h3>{ category.title }</h3>
                                {
                                    category.rows.iter().map(|&(name, value)| html! {
                                        <div class="spec-row">
                                            <span class="spec-name">{ name }</span>
                                            <span class="spec-value">{ value }</span>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="benefits" class="benefits">
                <div class="section-header">
                    <h2>{"Why divers switch"}</h2>
                    <p>{"What a self-sustaining loop changes underwater."}</p>
                </div>
                <div class="benefits-grid">
                    {
                        BENEFITS.iter().map(|&(icon, title, text)| html! {
                            <div class="benefit-item">
                                <div class="benefit-icon">{ icon }</div>
                                <h3>{ title }</h3>
                                <p>{ text }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="cta" class="cta">
                <div class="section-header">
                    <h2>{"Ready to dive longer?"}</h2>
                    <p>{"Jump back to the system tour, or try the interactive demo."}</p>
                </div>
                <div class="cta-actions">
                    <button class="cta-button primary" onclick={on_tour}>
                        {"Revisit the system tour"}
                    </button>
                    <button class="cta-button secondary" onclick={on_open_demo}>
                        {"Run the live demo"}
                    </button>
                </div>
            </section>

            <footer class="footer">
                <span>{"Nereus Marine Systems"}</span>
                <span class="footer-note">{"Type like a dolphin. Something might happen."}</span>
            </footer>

            if *show_demo {
                <DemoModal on_close={on_close_demo} />
            }
        </>
    }
}

/// The element a listener was attached to, as an `HtmlElement`.
fn current_target(e: &MouseEvent) -> Option<HtmlElement> {
    e.current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
}

const LANDING_CSS: &str = r#"
.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    background: rgba(28, 28, 30, 0.72);
    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
    backdrop-filter: blur(20px);
    transition: background 0.3s ease, border-bottom 0.3s ease;
}

.nav-inner {
    max-width: 1100px;
    margin: 0 auto;
    padding: 16px 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    font-weight: 700;
    letter-spacing: 0.25em;
    color: #f5f5f7;
    text-decoration: none;
}

.nav-links {
    display: flex;
    gap: 8px;
}

.nav-link {
    color: #d1d1d6;
    text-decoration: none;
    font-size: 0.9rem;
    padding: 6px 12px;
    border-radius: 8px;
    transition: color 0.2s ease, background 0.2s ease;
}

.nav-link:hover {
    color: #f5f5f7;
}

.nav-link.active {
    color: #007AFF;
    background: rgba(0, 122, 255, 0.1);
}

.hero {
    min-height: 100vh;
    display: grid;
    grid-template-columns: minmax(0, 1.1fr) minmax(0, 0.9fr);
    align-items: center;
    gap: 48px;
    max-width: 1100px;
    margin: 0 auto;
    padding: 140px 24px 80px;
}

.hero-title {
    font-size: clamp(2.4rem, 6vw, 4rem);
    line-height: 1.05;
    letter-spacing: -0.02em;
}

.hero-subtitle {
    margin-top: 20px;
    color: #a1a1a6;
    font-size: 1.15rem;
    max-width: 34rem;
}

.hero-stats {
    display: flex;
    gap: 40px;
    margin-top: 36px;
}

.hero-stat {
    display: flex;
    flex-direction: column;
}

.stat-value {
    font-size: 1.8rem;
    font-weight: 700;
    color: #007AFF;
    font-variant-numeric: tabular-nums;
}

.stat-label {
    color: #8e8e93;
    font-size: 0.85rem;
}

.hero-actions {
    display: flex;
    gap: 16px;
    margin-top: 40px;
}

.cta-button {
    border: none;
    border-radius: 12px;
    padding: 14px 26px;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
    transition: transform 0.15s ease, background 0.2s ease;
}

.cta-button.primary {
    background: #007AFF;
    color: #ffffff;
}

.cta-button.primary:hover {
    background: #0a84ff;
}

.cta-button.secondary {
    background: rgba(255, 255, 255, 0.08);
    color: #f5f5f7;
    border: 1px solid rgba(255, 255, 255, 0.15);
}

.cta-button.secondary:hover {
    background: rgba(255, 255, 255, 0.14);
}

.hero-visual {
    display: flex;
    justify-content: center;
    will-change: transform;
}

.system-preview {
    background: linear-gradient(180deg, #10222e 0%, #0a141c 100%);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 24px;
    padding: 28px;
    width: min(360px, 100%);
    display: flex;
    flex-direction: column;
    align-items: stretch;
    gap: 14px;
    will-change: transform;
}

.flow-input,
.processing-flows {
    border: 1px dashed rgba(0, 122, 255, 0.5);
    border-radius: 12px;
    padding: 12px;
    text-align: center;
}

.flow-label {
    color: #64d2ff;
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
}

.connection {
    height: 18px;
    width: 2px;
    margin: 0 auto;
    background: linear-gradient(180deg, #007AFF, transparent);
    animation: flowPulse 1.6s ease-in-out infinite;
}

.unit-main {
    background: rgba(0, 122, 255, 0.08);
    border: 1px solid rgba(0, 122, 255, 0.4);
    border-radius: 16px;
    padding: 18px;
    text-align: center;
}

.unit-label {
    color: #f5f5f7;
    font-size: 0.8rem;
    letter-spacing: 0.15em;
    text-transform: uppercase;
}

.indicator-row {
    display: flex;
    justify-content: center;
    gap: 8px;
    margin-top: 12px;
}

.indicator {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.15);
    transition: background 0.3s ease, box-shadow 0.3s ease;
}

.indicator.active {
    background: #34C759;
    box-shadow: 0 0 8px rgba(52, 199, 89, 0.8);
}

.unit-vents {
    display: flex;
    justify-content: center;
    gap: 6px;
    margin-top: 12px;
}

.vent {
    width: 22px;
    height: 4px;
    border-radius: 2px;
    background: #34C759;
    transition: background 0.4s ease;
}

.device-screen {
    background: #06121a;
    border: 1px solid rgba(100, 210, 255, 0.3);
    border-radius: 10px;
    padding: 12px;
    display: flex;
    flex-direction: column;
    gap: 6px;
}

.screen-line {
    height: 4px;
    border-radius: 2px;
    background: #64d2ff;
    transition: opacity 0.4s ease;
}

.screen-line:nth-child(2) {
    width: 70%;
}

.screen-line:nth-child(3) {
    width: 45%;
}

section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 100px 24px;
}

.section-header {
    text-align: center;
    margin-bottom: 48px;
}

.section-header h2 {
    font-size: 2.2rem;
    letter-spacing: -0.01em;
}

.section-header p {
    color: #8e8e93;
    margin-top: 10px;
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 24px;
}

.feature-card {
    position: relative;
    overflow: hidden;
    background: #161b22;
    border: 1px solid rgba(255, 255, 255, 0.08);
    border-radius: 18px;
    padding: 28px;
    cursor: pointer;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.feature-icon {
    font-size: 2rem;
    margin-bottom: 16px;
}

.feature-card h3 {
    margin-bottom: 10px;
}

.feature-card p {
    color: #a1a1a6;
    font-size: 0.95rem;
}

.feature-details,
.component-details {
    margin-top: 32px;
    background: rgba(0, 122, 255, 0.06);
    border: 1px solid rgba(0, 122, 255, 0.3);
    border-radius: 16px;
    padding: 24px 28px;
}

.feature-details-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 10px;
}

.feature-details-close {
    background: none;
    border: none;
    color: #8e8e93;
    font-size: 1.1rem;
    cursor: pointer;
}

.feature-details-close:hover {
    color: #f5f5f7;
}

.feature-details p,
.component-details p {
    color: #d1d1d6;
    line-height: 1.6;
}

.component-details h3 {
    margin-bottom: 10px;
}

.system-visualization {
    display: flex;
    justify-content: center;
    gap: 48px;
    flex-wrap: wrap;
}

.suit-component {
    position: relative;
    width: 150px;
    padding: 40px 16px 18px;
    text-align: center;
    background: #161b22;
    border: 1px solid rgba(255, 255, 255, 0.08);
    border-radius: 16px;
    cursor: pointer;
}

.component-pulse {
    position: absolute;
    top: 14px;
    left: 50%;
    margin-left: -9px;
    width: 18px;
    height: 18px;
    border-radius: 50%;
    border: 2px solid rgba(0, 122, 255, 0.7);
    animation: componentPulse 2s ease-in-out infinite;
}

.component-label {
    color: #d1d1d6;
    font-size: 0.9rem;
}

.specs-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 24px;
}

.spec-category {
    background: #161b22;
    border: 1px solid rgba(255, 255, 255, 0.08);
    border-radius: 18px;
    padding: 24px;
}

.spec-category h3 {
    margin-bottom: 14px;
    color: #64d2ff;
}

.spec-row {
    display: flex;
    justify-content: space-between;
    padding: 7px 0;
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    font-size: 0.92rem;
}

.spec-row:last-child {
    border-bottom: none;
}

.spec-name {
    color: #8e8e93;
}

.spec-value {
    color: #f5f5f7;
    text-align: right;
}

.benefits-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 24px;
}

.benefit-item {
    text-align: center;
    padding: 28px 20px;
}

.benefit-icon {
    font-size: 2.2rem;
    margin-bottom: 14px;
}

.benefit-item h3 {
    margin-bottom: 8px;
}

.benefit-item p {
    color: #a1a1a6;
    font-size: 0.95rem;
}

.cta {
    text-align: center;
}

.cta-actions {
    display: flex;
    justify-content: center;
    gap: 16px;
}

.footer {
    border-top: 1px solid rgba(255, 255, 255, 0.08);
    padding: 28px 24px;
    display: flex;
    justify-content: space-between;
    max-width: 1100px;
    margin: 0 auto;
    color: #8e8e93;
    font-size: 0.85rem;
}

.footer-note {
    opacity: 0.6;
}

@media (max-width: 860px) {
    .hero {
        grid-template-columns: 1fr;
        padding-top: 120px;
    }

    .nav-links {
        gap: 0;
    }

    .nav-link {
        padding: 6px 8px;
        font-size: 0.82rem;
    }

    .hero-stats {
        gap: 24px;
    }

    .cta-actions,
    .hero-actions {
        flex-direction: column;
        align-items: stretch;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_feature_card_links_to_a_diagram_element() {
        for feature in FEATURES {
            assert!(
                dispatch::highlight_selector(feature.id).is_some(),
                "feature {} has no diagram selector",
                feature.id
            );
        }
    }

    #[test]
    fn feature_ids_are_unique() {
        for (i, a) in FEATURES.iter().enumerate() {
            for b in &FEATURES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn nav_links_cover_the_page_sections() {
        let ids: Vec<&str> = NAV_LINKS.iter().map(|(id, _)| *id).collect();
        for section in ["home", "features", "system", "specs", "cta"] {
            assert!(ids.contains(&section));
        }
    }
}
