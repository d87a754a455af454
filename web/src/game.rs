use crate::rules::RulesView;
use crate::utils::*;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Interval;
use ndarray::Array2;
use skipcount_core as game;
use game::{CellBorder, CellFill, CellView, KeyOutcome, LearningMode, ToNdIndex};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

const TICK_MILLIS: u32 = 1000;
const DONATE_URL: &str = "https://venmo.com/u/ToddParks";

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CellMsg {
    Edit(String),
    Select,
    DoubleActivate,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellEvent(game::Coord2, CellMsg),
    KeyHandled(KeyOutcome),
    ToggleMode(LearningMode),
    ClockTick,
    CelebrationTick,
    ToggleRules,
}

fn fill_class(fill: CellFill) -> Option<&'static str> {
    use CellFill::*;
    match fill {
        Celebration(_) => Some("celebrate"),
        FactorHighlight => Some("factor"),
        RowHighlight => Some("row-factor"),
        Correct => Some("correct"),
        Incorrect => Some("incorrect"),
        Plain => None,
    }
}

fn border_class(border: CellBorder) -> Option<&'static str> {
    use CellBorder::*;
    match border {
        FractionSelected => Some("fraction"),
        Selected => Some("selected"),
        Plain => None,
    }
}

fn cell_classes(view: &CellView) -> Classes {
    classes!(
        "cell",
        view.is_read_only().then_some("header"),
        fill_class(view.fill),
        border_class(view.border),
    )
}

fn cell_style(view: &CellView) -> Option<String> {
    match view.fill {
        CellFill::Celebration(color) => Some(format!("background-color: {color}")),
        _ => None,
    }
}

fn mode_button_class(active: Option<LearningMode>, mode: LearningMode) -> Classes {
    classes!("mode", (active == Some(mode)).then_some("active"))
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    coords: game::Coord2,
    view: CellView,
    input_ref: NodeRef,
    callback: Callback<(game::Coord2, CellMsg)>,
}

#[function_component(CellInput)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        coords,
        view,
        input_ref,
        callback,
    } = props.clone();

    let oninput = {
        let callback = callback.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit((coords, CellMsg::Edit(input.value())));
        })
    };

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("{:?} click", coords);
            callback.emit((coords, CellMsg::Select));
        })
    };

    let ondblclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("{:?} double click", coords);
            callback.emit((coords, CellMsg::DoubleActivate));
        })
    };

    html! {
        <input
            ref={input_ref}
            class={cell_classes(&view)}
            style={cell_style(&view)}
            value={view.cell.to_string()}
            readonly={view.is_read_only()}
            inputmode="numeric"
            {oninput}
            {onclick}
            {ondblclick}
        />
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GridProps {
    /// Force a celebration seed instead of random
    pub seed: Option<u64>,
}

pub(crate) struct GridView {
    engine: Rc<RefCell<game::PlayEngine>>,
    cell_refs: Array2<NodeRef>,
    pending_focus: Option<game::Coord2>,
    rules_open: bool,
    clock_interval: Option<Interval>,
    celebration_interval: Option<Interval>,
    _key_listener: EventListener,
}

impl GridView {
    /// Window keydown handler; it shares the engine so it can decide on `preventDefault` in place.
    fn create_key_listener(ctx: &Context<Self>, engine: Rc<RefCell<game::PlayEngine>>) -> EventListener {
        let link = ctx.link().clone();
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(&gloo::utils::window(), "keydown", options, move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Ok(mut state) = engine.try_borrow_mut() else {
                log::warn!("key {:?} dropped, engine busy", event.key());
                return;
            };
            let outcome = state.handle_key_name(&event.key());
            drop(state);

            if outcome.prevents_default() {
                event.prevent_default();
            }
            if outcome.has_update() {
                link.send_message(Msg::KeyHandled(outcome));
            }
        })
    }

    fn create_interval(ctx: &Context<Self>, msg: Msg) -> Interval {
        let link = ctx.link().clone();
        Interval::new(TICK_MILLIS, move || link.send_message(msg.clone()))
    }

    /// Keeps one interval per running engine clock and drops the idle ones.
    fn sync_timers(&mut self, ctx: &Context<Self>) {
        match (self.engine.borrow().is_clock_running(), self.clock_interval.is_some()) {
            (true, false) => {
                log::debug!("clock interval scheduled");
                self.clock_interval = Some(Self::create_interval(ctx, Msg::ClockTick));
            }
            (false, true) => {
                log::debug!("clock interval cancelled");
                self.clock_interval = None;
            }
            _ => {}
        }

        match (self.engine.borrow().is_celebrating(), self.celebration_interval.is_some()) {
            (true, false) => {
                self.celebration_interval = Some(Self::create_interval(ctx, Msg::CelebrationTick));
            }
            (false, true) => {
                self.celebration_interval = None;
            }
            _ => {}
        }
    }

    fn input_at(&self, coords: game::Coord2) -> Option<HtmlInputElement> {
        self.cell_refs[coords.to_nd_index()].cast::<HtmlInputElement>()
    }

    fn handle_cell(&mut self, coords: game::Coord2, msg: CellMsg) -> bool {
        match msg {
            CellMsg::Edit(text) => {
                let outcome = self.engine.borrow_mut().edit_cell(coords, &text);
                log::debug!("edit {:?} {:?}: {:?}", coords, text, outcome);
                if !outcome.has_update() {
                    // the DOM already shows the rejected text, put the stored one back
                    if let Some(input) = self.input_at(coords) {
                        input.set_value(&self.engine.borrow().cell_at(coords).to_string());
                    }
                }
                outcome.has_update()
            }
            CellMsg::Select => self.engine.borrow_mut().select(coords),
            CellMsg::DoubleActivate => self.engine.borrow_mut().double_activate(coords),
        }
    }
}

impl Component for GridView {
    type Message = Msg;
    type Properties = GridProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        let engine = Rc::new(RefCell::new(game::PlayEngine::new(seed)));
        Self {
            _key_listener: GridView::create_key_listener(ctx, Rc::clone(&engine)),
            engine,
            cell_refs: Array2::default(game::SIZE.to_nd_index()),
            pending_focus: Some(game::START_SELECTION),
            rules_open: false,
            clock_interval: None,
            celebration_interval: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            CellEvent(coords, cell_msg) => self.handle_cell(coords, cell_msg),
            KeyHandled(outcome) => {
                if let Some(coords) = outcome.focus_target() {
                    self.pending_focus = Some(coords);
                }
                outcome.has_update()
            }
            ToggleMode(mode) => {
                self.engine.borrow_mut().toggle_mode(mode);
                true
            }
            ClockTick => self.engine.borrow_mut().tick_clock(),
            CelebrationTick => self.engine.borrow_mut().tick_celebration().has_update(),
            ToggleRules => {
                self.rules_open = !self.rules_open;
                true
            }
        };

        self.sync_timers(ctx);
        updated
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        let Some(coords) = self.pending_focus.take() else {
            return;
        };
        if let Some(input) = self.input_at(coords) {
            if let Err(err) = input.focus() {
                log::error!("failed to focus {:?}: {:?}", coords, err);
            }
            input.select();
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        log::debug!("grid torn down, cancelling timers");
        self.clock_interval.take();
        self.celebration_interval.take();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let engine = self.engine.borrow();
        let (rows, cols) = game::SIZE;
        let active_mode = engine.mode();
        let elapsed_time = engine.elapsed_time().to_string();
        let score = engine.score();

        let cb_division = ctx.link().callback(|_: MouseEvent| ToggleMode(LearningMode::Division));
        let cb_fraction = ctx.link().callback(|_: MouseEvent| ToggleMode(LearningMode::Fraction));
        let cb_rules = ctx.link().callback(|_: MouseEvent| ToggleRules);
        let cell_callback = ctx
            .link()
            .callback(|(coords, cell_msg): (game::Coord2, CellMsg)| CellEvent(coords, cell_msg));

        html! {
            <div class={classes!("skipcount", engine.is_celebrating().then_some("celebrating"))}>
                <h1>{"Skip Counting Game"}</h1>
                <nav>
                    <aside><strong>{"Timer: "}</strong>{elapsed_time}</aside>
                    <aside><strong>{"Score: "}</strong>{score}</aside>
                    <aside><strong>{"Streak: "}</strong>{engine.streak()}</aside>
                </nav>
                <menu>
                    <button
                        class={mode_button_class(active_mode, LearningMode::Division)}
                        onclick={cb_division}
                    >{"Division"}</button>
                    <button
                        class={mode_button_class(active_mode, LearningMode::Fraction)}
                        onclick={cb_fraction}
                    >{"Equivalent Fractions"}</button>
                </menu>
                <div class="grid">
                    {
                        for (0..rows).flat_map(|row| (0..cols).map(move |col| (row, col))).map(|coords| {
                            let view = engine.cell_view(coords);
                            let input_ref = self.cell_refs[coords.to_nd_index()].clone();
                            let callback = cell_callback.clone();
                            html! {
                                <CellInput key={format!("{}-{}", coords.0, coords.1)} {coords} {view} {input_ref} {callback}/>
                            }
                        })
                    }
                </div>
                <footer>{"a Parks 🌳 & 💻 Education creation"}</footer>
                <a class="donate" href={DONATE_URL} target="_blank" rel="noopener">
                    {"Donate to Parks and Education"}
                </a>
                <button class="rules-toggle" onclick={cb_rules.clone()}>{"Rules"}</button>
                <RulesView open={self.rules_open} on_close={cb_rules}/>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with_fraction_pair() -> game::PlayEngine {
        let mut engine = game::PlayEngine::new(0);
        engine.toggle_mode(LearningMode::Fraction);
        engine.double_activate((2, 3));
        engine.double_activate((5, 3));
        engine
    }

    #[test]
    fn header_cells_get_the_header_class() {
        let engine = game::PlayEngine::new(0);

        assert_eq!(cell_classes(&engine.cell_view((4, 0))), classes!("cell", "header"));
        assert_eq!(cell_classes(&engine.cell_view((0, 1))), classes!("cell", "selected"));
        assert_eq!(cell_classes(&engine.cell_view((4, 4))), classes!("cell"));
    }

    #[test]
    fn answers_are_classified_for_styling() {
        let mut engine = game::PlayEngine::new(0);
        engine.edit_cell((4, 4), "25");
        engine.edit_cell((4, 5), "7");

        assert_eq!(cell_classes(&engine.cell_view((4, 4))), classes!("cell", "correct"));
        assert_eq!(cell_classes(&engine.cell_view((4, 5))), classes!("cell", "incorrect"));
        assert_eq!(cell_style(&engine.cell_view((4, 5))), None);
    }

    #[test]
    fn fraction_selection_outranks_plain_selection() {
        let engine = engine_with_fraction_pair();

        assert_eq!(
            cell_classes(&engine.cell_view((5, 3))),
            classes!("cell", "fraction")
        );
        assert_eq!(
            cell_classes(&engine.cell_view((5, 0))),
            classes!("cell", "header", "row-factor")
        );
    }

    #[test]
    fn celebration_colour_becomes_inline_style() {
        let view = CellView {
            cell: game::BoardCell::Header(1),
            status: game::CellStatus::Header,
            fill: CellFill::Celebration(game::Rgb(0x12, 0xab, 0x00)),
            border: CellBorder::Plain,
        };

        assert_eq!(cell_style(&view).as_deref(), Some("background-color: #12AB00"));
        assert_eq!(cell_classes(&view), classes!("cell", "header", "celebrate"));
    }

    #[test]
    fn only_the_active_mode_button_is_highlighted() {
        let active = Some(LearningMode::Division);

        assert_eq!(
            mode_button_class(active, LearningMode::Division),
            classes!("mode", "active")
        );
        assert_eq!(mode_button_class(active, LearningMode::Fraction), classes!("mode"));
        assert_eq!(mode_button_class(None, LearningMode::Division), classes!("mode"));
    }
}
