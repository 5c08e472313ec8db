use std::{marker::PhantomData, rc::Rc};

use sfml::graphics::{Shape, Transformable};

use crate::{
    graphics::{self, CenterText, RectCenter},
    view::{
        id::{ViewId, ViewIdMaker},
        lens::Lens,
        GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout,
    },
};

pub(crate) struct ButtonState {
    pressed: bool,
}

impl ButtonState {
    pub(crate) fn new() -> ButtonState {
        ButtonState { pressed: false }
    }
}

struct ButtonView<Data, StateLens: Lens<Data, ButtonState>, Callback: Fn(&crate::App, &mut Data)> {
    id: ViewId,

    text: String,
    character_size: u32,
    pressed: bool,

    state_lens: StateLens,
    callback: Callback,

    font: Rc<sfml::SfBox<graphics::Font>>,

    _phantom: PhantomData<fn(&Data) -> &ButtonState>,
}
struct ButtonLayout<'button, Data, StateLens: Lens<Data, ButtonState>, Callback: Fn(&crate::App, &mut Data)> {
    button: &'button ButtonView<Data, StateLens, Callback>,
    size: graphics::Vector2f,
}

pub(crate) fn button<Data>(
    id_maker: &mut ViewIdMaker,
    font: &Rc<sfml::SfBox<graphics::Font>>,
    text: String,
    character_size: u32,
    state_lens: impl Lens<Data, ButtonState>,
    callback: impl Fn(&crate::App, &mut Data),
    data: &Data,
) -> impl ViewWithoutLayout<Data> {
    let pressed = state_lens.with(data, |button_state| button_state.pressed);
    ButtonView { id: id_maker.next_id(), text, character_size, pressed, state_lens, callback, font: font.clone(), _phantom: PhantomData }
}

impl<Data, StateLens: Lens<Data, ButtonState>, Callback: Fn(&crate::App, &mut Data)> ViewWithoutLayout<Data> for ButtonView<Data, StateLens, Callback> {
    type WithLayout<'without_layout> = ButtonLayout<'without_layout, Data, StateLens, Callback> where Self: 'without_layout;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        let text = graphics::Text::new(&self.text, &self.font, self.character_size);
        let bounds = text.local_bounds();
        ButtonLayout { button: self, size: sc.clamp_size(graphics::Vector2f::new(bounds.left + bounds.width + 16.0, bounds.top + bounds.height + 10.0)) }
    }
}

impl<Data, StateLens: Lens<Data, ButtonState>, Callback: Fn(&crate::App, &mut Data)> View<Data> for ButtonLayout<'_, Data, StateLens, Callback> {
    fn draw_inner(&self, app: &crate::App, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, hover: Option<ViewId>) {
        let rect = graphics::FloatRect::from_vecs(top_left, self.size);

        let mut background_rect = graphics::RectangleShape::from_rect(rect);
        let mut text = graphics::Text::new(&self.button.text, &self.button.font, self.button.character_size);

        text.center();
        text.set_position(rect.center());

        if self.button.pressed {
            background_rect.set_fill_color(app.theme.button_pressed_bg);
            text.set_fill_color(app.theme.button_pressed_fg);
        } else if Some(self.button.id) == hover {
            background_rect.set_fill_color(app.theme.button_hover_bg);
            text.set_fill_color(app.theme.button_hover_fg);
        } else {
            background_rect.set_fill_color(app.theme.button_normal_bg);
            text.set_fill_color(app.theme.button_normal_fg);
        }

        target.draw(&background_rect);
        target.draw(&text);
    }

    fn find_hover(&self, top_left: graphics::Vector2f, mouse: graphics::Vector2f) -> Option<ViewId> {
        if graphics::FloatRect::from_vecs(top_left, self.size).contains(mouse) {
            Some(self.button.id)
        } else {
            None
        }
    }

    fn size(&self) -> graphics::Vector2f {
        self.size
    }

    fn send_targeted_event(&self, app: &crate::App, data: &mut Data, target: ViewId, event: TargetedEvent) {
        if target == self.button.id {
            self.targeted_event(app, data, event);
        }
    }

    fn targeted_event(&self, _: &crate::App, data: &mut Data, event: TargetedEvent) {
        match event {
            TargetedEvent::LeftMouseDown(_) => self.button.state_lens.with_mut(data, |button_state| button_state.pressed = true),
            TargetedEvent::RightMouseDown(_) => {}
        }
    }

    fn general_event(&self, app: &crate::App, data: &mut Data, event: GeneralEvent) {
        if self.button.pressed {
            match event {
                GeneralEvent::LeftMouseUp => {
                    self.button.state_lens.with_mut(data, |button_state| {
                        if button_state.pressed {
                            button_state.pressed = false;
                        }
                    });
                    (self.button.callback)(app, data);
                }
                GeneralEvent::MouseMoved(_) | GeneralEvent::TextEntered(_) => {}
            }
        }
    }
}
