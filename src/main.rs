#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::type_complexity)]

pub(crate) mod graphics;
pub(crate) mod prefs;
pub(crate) mod simulation;
pub(crate) mod theme;
pub(crate) mod ui;
pub(crate) mod view;

use std::rc::Rc;

use sfml::window::{ContextSettings, Event, Style, VideoMode};

use crate::{
    graphics::{FloatRect, Font, RenderTarget, RenderWindow},
    simulation::chain,
    theme::Theme,
};

pub(crate) struct App {
    pub(crate) font: Rc<sfml::SfBox<Font>>,
    pub(crate) theme: &'static Theme,
}

pub(crate) struct GateLab {
    pub(crate) input_a: bool,
    pub(crate) input_b: bool,

    pub(crate) sequence_text: String,
    pub(crate) initial_inputs_text: String,
    pub(crate) trace: Option<Result<Vec<chain::Step>, chain::ChainError>>,

    pub(crate) theme: theme::Variant,

    pub(crate) ui: ui::UI,
}

impl GateLab {
    fn new() -> GateLab {
        let theme = prefs::load_theme().unwrap_or_else(|| if prefs::system_prefers_dark() { theme::Variant::Dark } else { theme::Variant::Light });
        GateLab { input_a: false, input_b: false, sequence_text: String::new(), initial_inputs_text: String::new(), trace: None, theme, ui: ui::UI::new() }
    }

    pub(crate) fn run_chain(&mut self) {
        self.trace = Some(chain::simulate_chain(&self.sequence_text, &self.initial_inputs_text));
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(error) = prefs::store_theme(self.theme) {
            eprintln!("could not save theme preference: {}", error);
        }
    }
}

fn main() {
    let font = graphics::load_system_font().expect("could not load a system font");

    let mut window = RenderWindow::new(VideoMode::new(900, 720, 32), "gatelab", Style::DEFAULT, &ContextSettings::default());
    window.set_framerate_limit(60);

    let mut data = GateLab::new();
    let mut app = App { font, theme: data.theme.theme() };

    while window.is_open() {
        while let Some(event) = window.poll_event() {
            match event {
                Event::Closed => window.close(),
                // keep window coordinates equal to pixel coordinates so hit testing stays valid
                Event::Resized { width, height } => window.set_view(&sfml::graphics::View::from_rect(FloatRect::new(0.0, 0.0, width as f32, height as f32))),
                event => view::event(&app, &window, &mut data, event),
            }
        }

        app.theme = data.theme.theme();
        window.clear(app.theme.window_bg);
        view::render(&app, &mut window, &data);
        window.display();
    }
}
