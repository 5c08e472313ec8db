pub(crate) mod id;
pub(crate) mod lens;

use crate::graphics::{RenderTarget, RenderWindow, Vector2f};

#[derive(Copy, Clone)]
pub(crate) enum TargetedEvent {
    LeftMouseDown(Vector2f),
    RightMouseDown(Vector2f),
}
#[derive(Copy, Clone)]
pub(crate) enum GeneralEvent {
    MouseMoved(Vector2f),
    LeftMouseUp,
    TextEntered(char),
}

#[derive(Copy, Clone)]
pub(crate) struct SizeConstraints {
    pub(crate) min: Vector2f,
    pub(crate) max: Vector2f,
}

impl SizeConstraints {
    pub(crate) fn exact(size: Vector2f) -> SizeConstraints {
        SizeConstraints { min: size, max: size }
    }

    pub(crate) fn with_no_min(self) -> SizeConstraints {
        SizeConstraints { min: Vector2f::new(0.0, 0.0), max: self.max }
    }

    pub(crate) fn shrunk_by(self, amount: Vector2f) -> SizeConstraints {
        SizeConstraints { min: Vector2f::new(0.0, 0.0), max: Vector2f::new((self.max.x - amount.x).max(0.0), (self.max.y - amount.y).max(0.0)) }
    }

    pub(crate) fn clamp_size(&self, size: Vector2f) -> Vector2f {
        Vector2f::new(size.x.clamp(self.min.x, self.max.x), size.y.clamp(self.min.y, self.max.y))
    }
}

// view system heavily inspired by xilem
// (https://raphlinus.github.io/rust/gui/2022/05/07/ui-architecture.html)
// a ViewWithoutLayout is built fresh from the application data every frame and owns copies of
// whatever it displays, so dispatching events into it can take the data mutably; layout() turns
// it into a View with concrete sizes for drawing, hit testing, and event dispatch
pub(crate) trait ViewWithoutLayout<Data> {
    type WithLayout<'without_layout>: View<Data>
    where
        Self: 'without_layout;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_>;
}

pub(crate) trait View<Data> {
    fn draw(&self, app: &crate::App, target: &mut dyn RenderTarget, top_left: Vector2f, hover: Option<id::ViewId>) {
        self.draw_inner(app, target, top_left, hover);
    }
    fn draw_inner(&self, app: &crate::App, target: &mut dyn RenderTarget, top_left: Vector2f, hover: Option<id::ViewId>);

    fn find_hover(&self, top_left: Vector2f, mouse: Vector2f) -> Option<id::ViewId>;
    fn size(&self) -> Vector2f;

    fn send_targeted_event(&self, app: &crate::App, data: &mut Data, target: id::ViewId, event: TargetedEvent);
    fn targeted_event(&self, app: &crate::App, data: &mut Data, event: TargetedEvent);
    fn general_event(&self, app: &crate::App, data: &mut Data, event: GeneralEvent);
}

fn window_constraints(window: &RenderWindow) -> SizeConstraints {
    let size = window.size();
    SizeConstraints::exact(Vector2f::new(size.x as f32, size.y as f32))
}

fn mouse_position(window: &RenderWindow) -> Vector2f {
    let mouse = window.mouse_position();
    Vector2f::new(mouse.x as f32, mouse.y as f32)
}

pub(crate) fn render(app: &crate::App, window: &mut RenderWindow, data: &crate::GateLab) {
    let view = crate::ui::view(app, data);
    let view = view.layout(window_constraints(window));
    let hover = view.find_hover(Vector2f::new(0.0, 0.0), mouse_position(window));
    view.draw(app, window, Vector2f::new(0.0, 0.0), hover);
}

pub(crate) fn event(app: &crate::App, window: &RenderWindow, data: &mut crate::GateLab, event: sfml::window::Event) {
    use sfml::window::{mouse, Event};

    let view = crate::ui::view(app, data);
    let view = view.layout(window_constraints(window));

    match event {
        Event::MouseButtonPressed { button: mouse::Button::Left, x, y } => {
            let mouse = Vector2f::new(x as f32, y as f32);
            if let Some(hovered) = view.find_hover(Vector2f::new(0.0, 0.0), mouse) {
                view.send_targeted_event(app, data, hovered, TargetedEvent::LeftMouseDown(mouse));
            }
        }
        Event::MouseButtonPressed { button: mouse::Button::Right, x, y } => {
            let mouse = Vector2f::new(x as f32, y as f32);
            if let Some(hovered) = view.find_hover(Vector2f::new(0.0, 0.0), mouse) {
                view.send_targeted_event(app, data, hovered, TargetedEvent::RightMouseDown(mouse));
            }
        }

        Event::MouseMoved { x, y } => view.general_event(app, data, GeneralEvent::MouseMoved(Vector2f::new(x as f32, y as f32))),
        Event::MouseButtonReleased { button: mouse::Button::Left, .. } => view.general_event(app, data, GeneralEvent::LeftMouseUp),
        Event::TextEntered { unicode } => view.general_event(app, data, GeneralEvent::TextEntered(unicode)),

        _ => {}
    }
}
