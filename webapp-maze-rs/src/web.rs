// file: web.rs
// desc: maze viewer components

use leptos::*;
use web_sys::Event;

use crate::config::AppConfig;
use crate::params::Field;
use crate::state::MazeState;

#[component]
fn ParamInput(label: &'static str, field: Field, state: RwSignal<MazeState>) -> impl IntoView {
    // Only valid input reaches the signal, so a half-typed value is left alone.
    let on_input = move |ev: Event| {
        let raw = event_target_value(&ev);
        let mut params = state.with_untracked(|s| s.params);
        match params.set(field, &raw) {
            Ok(()) => state.update(|s| s.params = params),
            Err(err) => log::warn!("Keeping previous {}: {}", field, err),
        }
    };

    // Sync from state only when the text no longer reads as the stored
    // value, e.g. after Randomize; "007" stays as typed.
    let input_ref = create_node_ref::<html::Input>();
    let value = create_memo(move |_| state.with(|s| s.params.value(field)));
    create_effect(move |_| {
        let value = value.get();
        if let Some(input) = input_ref.get() {
            if !shows_value(&input.value(), value) {
                input.set_value(&value.to_string());
            }
        }
    });

    let (input_type, min) = match field {
        Field::Seed => ("text", "0"),
        _ => ("number", "1"),
    };

    view! {
        <label class="param">
            <span>{label}</span>
            <input
                type=input_type
                inputmode="numeric"
                min=min
                _ref=input_ref
                value=value.get_untracked().to_string()
                on:input=on_input
            />
        </label>
    }
}

fn shows_value(text: &str, value: u64) -> bool {
    text.trim().parse::<u64>() == Ok(value)
}

#[component]
fn MazeViewer(config: AppConfig) -> impl IntoView {
    let mut initial = MazeState::new(config);
    let seed = initial.randomize_seed(&mut rand::rng());
    log::debug!("Initial seed {}", seed);

    let state = create_rw_signal(initial);
    let svg_url = create_memo(move |_| state.with(MazeState::url));
    let bounds_issue = create_memo(move |_| {
        state.with(|s| s.server_bounds_issue().map(|issue| issue.to_string()))
    });

    let randomize = move |_| {
        state.update(|s| {
            let seed = s.randomize_seed(&mut rand::rng());
            log::debug!("Randomized seed {}", seed);
        });
    };

    view! {
        <div class="maze-viewer">
            <div class="controls">
                <ParamInput label="x" field=Field::Width state=state/>
                <ParamInput label="y" field=Field::Height state=state/>
                <ParamInput label="scale" field=Field::Scale state=state/>
                <ParamInput label="seed" field=Field::Seed state=state/>
                <button on:click=randomize>"Randomize"</button>
            </div>

            <p class="info">
                <code>{move || svg_url.get()}</code>
            </p>
            {move || bounds_issue.get().map(|msg| view! { <p class="warning">{msg}</p> })}

            <div class="maze-container">
                <img class="maze" alt="Generated maze" src=move || svg_url.get()/>
            </div>
        </div>
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    view! {
        <div class="app">
            <style>
                "
                .app {
                    font-family: Arial, sans-serif;
                    margin: 0 auto;
                    padding: 20px;
                }

                .controls {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: end;
                    gap: 10px;
                    margin-bottom: 10px;
                }

                .param {
                    display: flex;
                    flex-direction: column;
                    font-size: 14px;
                }

                .param input {
                    width: 8em;
                }

                .param:last-of-type input {
                    width: 16em;
                }

                .info {
                    color: #666;
                    font-size: 14px;
                }

                .warning {
                    color: #b00020;
                    font-size: 14px;
                }
                "
            </style>

            <h1>"Maze"</h1>
            <p>"Pick a size, scale and seed. The same seed always draws the same maze."</p>
            <MazeViewer config=config/>
        </div>
    }
}
