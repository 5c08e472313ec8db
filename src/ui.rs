pub(crate) mod widgets;

use crate::{
    graphics::Vector2f,
    simulation::{
        chain,
        logic::{bit_digit, Gate},
    },
    theme,
    view::{id::ViewIdMaker, lens, ViewWithoutLayout},
    App, GateLab,
};
use widgets::{
    button::{self, ButtonState},
    flow::{self, BoxedChild},
    label::label,
    min_size::min_size,
    pad::pad,
    text_field::{self, TextFieldState},
    toggle::toggle,
};

pub(crate) struct UI {
    pub(crate) sequence_field: TextFieldState,
    pub(crate) initial_inputs_field: TextFieldState,
    pub(crate) run_button: ButtonState,
    pub(crate) theme_button: ButtonState,
}

impl UI {
    pub(crate) fn new() -> UI {
        UI { sequence_field: TextFieldState::new(), initial_inputs_field: TextFieldState::new(), run_button: ButtonState::new(), theme_button: ButtonState::new() }
    }
}

fn boxed<Data: 'static>(view: impl ViewWithoutLayout<Data> + 'static) -> BoxedChild<Data> {
    Box::new(view)
}

// the whole window is rebuilt from the data every frame, so everything on screen
// (gate outputs, the step trace, theme colors) reflects the current state with no invalidation logic
pub(crate) fn view(app: &App, data: &GateLab) -> impl ViewWithoutLayout<GateLab> {
    let mut id_maker = ViewIdMaker::new();
    let spacing = app.theme.padding;

    flow::vertical_flow(vec![
        boxed(pad(spacing, label(&app.font, "Logic Gate Playground".to_string(), app.theme.heading_font_size, app.theme.heading_color))),
        boxed(pad(spacing, truth_table(app))),
        boxed(pad(spacing, visualizer(&mut id_maker, app, data))),
        boxed(pad(spacing, builder(&mut id_maker, app, data))),
        boxed(pad(spacing, theme_switcher(&mut id_maker, app, data))),
    ])
}

fn cell(app: &App, text: String, color: crate::graphics::Color) -> impl ViewWithoutLayout<GateLab> {
    min_size(Vector2f::new(app.theme.table_cell_width, 0.0), label(&app.font, text, app.theme.body_font_size, color))
}

fn truth_table(app: &App) -> impl ViewWithoutLayout<GateLab> {
    let theme = app.theme;

    let header = flow::horizontal_flow(
        ["A", "B"]
            .into_iter()
            .chain(Gate::TWO_INPUT.iter().map(|gate| gate.name()))
            .map(|name| boxed(cell(app, name.to_string(), theme.muted_text_color)))
            .collect(),
    );

    let mut rows: Vec<BoxedChild<GateLab>> = vec![boxed(label(&app.font, "Truth Table".to_string(), theme.body_font_size + 2, theme.heading_color)), boxed(header)];
    for (a, b) in crate::simulation::logic::input_combinations() {
        let digits = [bit_digit(a), bit_digit(b)].into_iter().chain(Gate::TWO_INPUT.iter().map(|gate| bit_digit(gate.evaluate(a, b))));
        rows.push(boxed(flow::horizontal_flow(digits.map(|digit| boxed(cell(app, digit.to_string(), theme.text_color))).collect())));
    }

    flow::vertical_flow(rows)
}

fn visualizer(id_maker: &mut ViewIdMaker, app: &App, data: &GateLab) -> impl ViewWithoutLayout<GateLab> {
    let theme = app.theme;

    let toggles = flow::horizontal_flow(vec![
        boxed(pad(2.0, toggle(id_maker, &app.font, "A", lens::from_closures(|data: &GateLab| &data.input_a, |data: &mut GateLab| &mut data.input_a), data))),
        boxed(pad(2.0, toggle(id_maker, &app.font, "B", lens::from_closures(|data: &GateLab| &data.input_b, |data: &mut GateLab| &mut data.input_b), data))),
    ]);

    let mut children: Vec<BoxedChild<GateLab>> = vec![boxed(label(&app.font, "Live Inputs".to_string(), theme.body_font_size + 2, theme.heading_color)), boxed(toggles)];
    for gate in Gate::ALL {
        // NOT only looks at A; evaluate ignores its second argument for it
        let output = gate.evaluate(data.input_a, data.input_b);
        children.push(boxed(flow::horizontal_flow(vec![
            boxed(min_size(Vector2f::new(90.0, 0.0), label(&app.font, format!("{} = {}", gate.name(), bit_digit(output)), theme.body_font_size, theme.text_color))),
            boxed(label(&app.font, gate.describe().to_string(), theme.small_font_size, theme.muted_text_color)),
        ])));
    }

    flow::vertical_flow(children)
}

fn builder(id_maker: &mut ViewIdMaker, app: &App, data: &GateLab) -> impl ViewWithoutLayout<GateLab> {
    let theme = app.theme;

    let sequence_field = text_field::text_field(
        id_maker,
        &app.font,
        theme.field_width,
        lens::from_closures(|data: &GateLab| &data.ui.sequence_field, |data: &mut GateLab| &mut data.ui.sequence_field),
        lens::from_closures(|data: &GateLab| &data.sequence_text, |data: &mut GateLab| &mut data.sequence_text),
        |_: &App, data: &mut GateLab| data.run_chain(),
        data,
    );
    let initial_inputs_field = text_field::text_field(
        id_maker,
        &app.font,
        theme.field_width,
        lens::from_closures(|data: &GateLab| &data.ui.initial_inputs_field, |data: &mut GateLab| &mut data.ui.initial_inputs_field),
        lens::from_closures(|data: &GateLab| &data.initial_inputs_text, |data: &mut GateLab| &mut data.initial_inputs_text),
        |_: &App, data: &mut GateLab| data.run_chain(),
        data,
    );
    let run_button = button::button(
        id_maker,
        &app.font,
        "Build Chain".to_string(),
        theme.body_font_size,
        lens::from_closures(|data: &GateLab| &data.ui.run_button, |data: &mut GateLab| &mut data.ui.run_button),
        |_: &App, data: &mut GateLab| data.run_chain(),
        data,
    );

    let (output_text, output_color) = match &data.trace {
        None => ("Enter a comma-separated gate sequence (e.g. AND, NOT, XOR) and press Build Chain.".to_string(), theme.muted_text_color),
        Some(Ok(steps)) => (chain::format_trace(steps), theme.text_color),
        Some(Err(error)) => (error.to_string(), theme.error_text_color),
    };

    flow::vertical_flow(vec![
        boxed(label(&app.font, "Gate Chain Builder".to_string(), theme.body_font_size + 2, theme.heading_color)),
        boxed(flow::horizontal_flow(vec![
            boxed(pad(2.0, min_size(Vector2f::new(110.0, 0.0), label(&app.font, "Gate sequence".to_string(), theme.body_font_size, theme.text_color)))),
            boxed(pad(2.0, sequence_field)),
        ])),
        boxed(flow::horizontal_flow(vec![
            boxed(pad(2.0, min_size(Vector2f::new(110.0, 0.0), label(&app.font, "Initial inputs".to_string(), theme.body_font_size, theme.text_color)))),
            boxed(pad(2.0, initial_inputs_field)),
        ])),
        boxed(pad(2.0, run_button)),
        boxed(pad(2.0, label(&app.font, output_text, theme.body_font_size, output_color))),
    ])
}

fn theme_switcher(id_maker: &mut ViewIdMaker, app: &App, data: &GateLab) -> impl ViewWithoutLayout<GateLab> {
    let text = match data.theme {
        theme::Variant::Light => "Switch to dark theme",
        theme::Variant::Dark => "Switch to light theme",
    };
    button::button(
        id_maker,
        &app.font,
        text.to_string(),
        app.theme.body_font_size,
        lens::from_closures(|data: &GateLab| &data.ui.theme_button, |data: &mut GateLab| &mut data.ui.theme_button),
        |_: &App, data: &mut GateLab| data.toggle_theme(),
        data,
    )
}
