use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use kazudoru_core::{generate_equation, splitmix32, GameState, Key, MAX_PLAYERS, MIN_PLAYERS};

mod board;
mod countdown;
mod persisted;

use countdown::CountdownPanel;
use persisted::SettingsBlob;

fn time_seed(previous: u32) -> u32 {
    let now = Date::now() as u64;
    splitmix32(now as u32 ^ previous.wrapping_add(0x9E37_79B9))
}

/// Rendering snapshot plus a live copy the persistent keyboard listener
/// can reach; every mutation goes through both.
#[derive(Clone)]
struct GameStore {
    state: UseStateHandle<GameState>,
    live: Rc<RefCell<GameState>>,
}

impl GameStore {
    fn new(state: UseStateHandle<GameState>, live: Rc<RefCell<GameState>>) -> Self {
        Self { state, live }
    }

    fn mutate(&self, apply: impl FnOnce(&mut GameState)) {
        let mut game = self.live.borrow_mut();
        apply(&mut game);
        self.state.set(game.clone());
    }
}

#[function_component(GamePanel)]
fn game_panel() -> Html {
    let seed_slot = use_mut_ref(|| time_seed(0));
    let live = {
        let seed_slot = seed_slot.clone();
        use_mut_ref(move || GameState::new(MIN_PLAYERS, generate_equation(*seed_slot.borrow())))
    };
    let state = {
        let live = live.clone();
        use_state(move || live.borrow().clone())
    };
    let store = GameStore::new(state.clone(), live.clone());

    let next_seed: Rc<dyn Fn() -> u32> = {
        let seed_slot = seed_slot.clone();
        Rc::new(move || {
            let next = time_seed(*seed_slot.borrow());
            *seed_slot.borrow_mut() = next;
            next
        })
    };

    let on_start = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.mutate(|game| game.start());
        })
    };

    let on_reset = {
        let store = store.clone();
        let next_seed = next_seed.clone();
        Callback::from(move |_: MouseEvent| {
            let player_count = store.live.borrow().player_count;
            let seed = next_seed();
            store.mutate(|game| game.reset(player_count, seed));
            gloo::console::log!("game", "reset", player_count);
        })
    };

    let mode_options: Html = (MIN_PLAYERS..=MAX_PLAYERS)
        .map(|mode| {
            let store = store.clone();
            let next_seed = next_seed.clone();
            let onchange = Callback::from(move |event: Event| {
                let input: HtmlInputElement = event.target_unchecked_into();
                if !input.checked() {
                    return;
                }
                let seed = next_seed();
                store.mutate(|game| game.reset(mode, seed));
                gloo::console::log!("game", "mode", mode);
            });
            let label = match mode {
                1 => "1 player",
                2 => "2 players",
                _ => "3 players",
            };
            html! {
                <label class="mode-option">
                    <input
                        type="radio"
                        name="game-mode"
                        value={mode.to_string()}
                        checked={state.player_count == mode}
                        onchange={onchange}
                    />
                    { label }
                </label>
            }
        })
        .collect();

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window available");
            let listener = EventListener::new(&window, "keydown", move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let Some(key) = Key::from_key_name(&event.key()) else {
                    return;
                };
                store.mutate(|game| game.handle_key(key));
            });
            || drop(listener)
        });
    }

    let boards: Html = state
        .players
        .iter()
        .enumerate()
        .map(|(index, player)| board::player_panel(index, player, state.solution.as_str()))
        .collect();

    html! {
        <div class="game">
            <h2>{ "Guess the equation" }</h2>
            <div class="mode-select">{mode_options}</div>
            <div class="game-actions">
                <button onclick={on_start}>{ "Start game" }</button>
                <button onclick={on_reset}>{ "Reset game" }</button>
            </div>
            <div class="game-status">{ state.status.clone() }</div>
            <div class="game-board">{boards}</div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let dark = use_state(|| persisted::load_settings().dark);
    let dark_value = *dark;

    use_effect_with(dark_value, move |dark| {
        persisted::apply_theme(*dark);
        || ()
    });

    let on_theme_toggle = {
        let dark = dark.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let next = input.checked();
            persisted::save_settings(SettingsBlob {
                version: persisted::SETTINGS_VERSION,
                dark: next,
            });
            dark.set(next);
        })
    };

    html! {
        <main class="app">
            <header class="app-header">
                <h1>{ "Kazudoru" }</h1>
                <label class="theme-toggle">
                    <input type="checkbox" checked={dark_value} onchange={on_theme_toggle} />
                    { "Dark mode" }
                </label>
            </header>
            <section class="panel">
                <CountdownPanel />
            </section>
            <section class="panel">
                <GamePanel />
            </section>
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
