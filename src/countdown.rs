use std::rc::Rc;

use gloo::timers::callback::Interval;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use kazudoru_core::{format_mmss, parse_custom_minutes, CountdownState, TICK_INTERVAL_MS};

pub(crate) const PRESET_MINUTES: [u32; 4] = [1, 3, 5, 10];

const INVALID_DURATION_FEEDBACK: &str = "Enter a whole number of minutes greater than zero.";

#[function_component(CountdownPanel)]
pub(crate) fn countdown_panel() -> Html {
    let state = use_state(CountdownState::idle);
    let live = use_mut_ref(CountdownState::idle);
    let interval_handle = use_mut_ref(|| None::<Interval>);
    let feedback = use_state(String::new);
    let custom_ref = use_node_ref();

    // Replacing the handle slot cancels any pending interval, so at most
    // one periodic callback is ever active.
    let start: Rc<dyn Fn(u32)> = {
        let state = state.clone();
        let live = live.clone();
        let interval_handle = interval_handle.clone();
        let feedback = feedback.clone();
        Rc::new(move |duration_seconds: u32| {
            interval_handle.borrow_mut().take();
            feedback.set(String::new());
            let next = CountdownState::start(duration_seconds);
            *live.borrow_mut() = next;
            state.set(next);
            let state = state.clone();
            let live = live.clone();
            let tick_handle = interval_handle.clone();
            let interval = Interval::new(TICK_INTERVAL_MS, move || {
                let mut clock = live.borrow_mut();
                let done = clock.tick();
                state.set(*clock);
                drop(clock);
                if done {
                    tick_handle.borrow_mut().take();
                }
            });
            *interval_handle.borrow_mut() = Some(interval);
        })
    };

    let presets: Html = PRESET_MINUTES
        .iter()
        .map(|minutes| {
            let start = start.clone();
            let minutes = *minutes;
            let onclick = Callback::from(move |_: MouseEvent| start(minutes * 60));
            html! { <button {onclick}>{ format!("{minutes} min") }</button> }
        })
        .collect();

    let on_custom = {
        let start = start.clone();
        let feedback = feedback.clone();
        let custom_ref = custom_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(input) = custom_ref.cast::<HtmlInputElement>() else {
                return;
            };
            match parse_custom_minutes(&input.value()) {
                Some(minutes) => start(minutes.saturating_mul(60)),
                None => feedback.set(INVALID_DURATION_FEEDBACK.to_string()),
            }
        })
    };

    let on_reset = {
        let state = state.clone();
        let live = live.clone();
        let interval_handle = interval_handle.clone();
        let feedback = feedback.clone();
        Callback::from(move |_: MouseEvent| {
            interval_handle.borrow_mut().take();
            *live.borrow_mut() = CountdownState::idle();
            state.set(CountdownState::idle());
            feedback.set(String::new());
        })
    };

    let done_banner = if state.done {
        html! { <div class="timer-done">{ "Time's up!" }</div> }
    } else {
        html! {}
    };
    let feedback_line = if feedback.is_empty() {
        html! {}
    } else {
        html! { <div class="timer-feedback">{ (*feedback).clone() }</div> }
    };

    html! {
        <div class="countdown">
            <h2>{ "Countdown" }</h2>
            <div class="timer-display">{ format_mmss(state.seconds_left) }</div>
            {done_banner}
            <div class="timer-options">
                {presets}
            </div>
            <div class="timer-custom">
                <input ref={custom_ref} type="number" min="1" placeholder="minutes" />
                <button onclick={on_custom}>{ "Start custom" }</button>
            </div>
            {feedback_line}
            <button class="timer-reset" onclick={on_reset}>{ "Reset timer" }</button>
        </div>
    }
}
