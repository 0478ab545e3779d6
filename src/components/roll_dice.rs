use leptos::prelude::*;

/// The "Roll Dice" button. Every press asks for a fresh series; presses
/// are not debounced.
#[component]
pub fn RollDiceButton(on_roll: Callback<()>) -> impl IntoView {
    view! {
        <button class="btn btn-primary roll-dice" on:click=move |_| on_roll.run(())>
            "\u{1F3B2} Roll Dice"
        </button>
    }
}
