use skipcount_core::{
    BASE_POINTS, COMPLETION_BONUS_FLOOR, COMPLETION_BONUS_MAX, SPEED_BONUS, STREAK_MILESTONES,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RulesProps {
    #[prop_or_default]
    pub open: bool,
    pub on_close: Callback<MouseEvent>,
}

fn streak_line() -> String {
    let parts: Vec<_> = STREAK_MILESTONES
        .iter()
        .map(|(streak, bonus)| format!("{bonus} points for {streak} in a row"))
        .collect();
    format!("Streak bonuses: {}.", parts.join(", "))
}

#[function_component]
pub(crate) fn RulesView(props: &RulesProps) -> Html {
    html! {
        <dialog id="rules" open={props.open}>
            <article>
                <h3>{"Game Rules"}</h3>
                <p>
                    <strong>{"Objective: "}</strong>
                    {"Fill in the blank cells with the correct products by skip counting."}
                </p>
                <ul>
                    <li>{format!("{BASE_POINTS} points for each correct answer.")}</li>
                    <li>{format!("Speed bonus of up to {SPEED_BONUS} extra points.")}</li>
                    <li>{streak_line()}</li>
                    <li>{format!(
                        "Completion bonus from {COMPLETION_BONUS_MAX} down to {COMPLETION_BONUS_FLOOR}, \
                         depending on how fast you finish."
                    )}</li>
                </ul>
                <p>
                    <strong>{"Timer: "}</strong>
                    {"Starts when you begin typing and stops when the board is complete."}
                </p>
                <p>
                    <strong>{"Division mode: "}</strong>
                    {"Double-click a product to highlight its two factors in the first row and column."}
                </p>
                <p>
                    <strong>{"Equivalent fraction mode: "}</strong>
                    {"Double-click two cells of one column to compare them as fractions over that \
                      column's number. Left, Right and Tab move both together."}
                </p>
                <footer>
                    <button onclick={props.on_close.clone()}>{"Close"}</button>
                </footer>
            </article>
        </dialog>
    }
}
