use leptos::prelude::*;

use crate::pages::Board;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <Board />
        </main>
    }
}
