use std::{marker::PhantomData, rc::Rc};

use sfml::graphics::{Shape, Transformable};

use crate::{
    graphics::{self, TopLeftText},
    view::{
        id::{ViewId, ViewIdMaker},
        lens::Lens,
        GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout,
    },
};

const BACKSPACE: char = '\u{8}';

pub(crate) struct TextFieldState {
    focused: bool,
}

impl TextFieldState {
    pub(crate) fn new() -> TextFieldState {
        TextFieldState { focused: false }
    }
}

// single-line text entry; clicking focuses it, clicking any other widget unfocuses it,
// and while focused it consumes TextEntered events (Enter fires the submit callback)
struct TextFieldView<Data, StateLens: Lens<Data, TextFieldState>, TextLens: Lens<Data, String>, OnSubmit: Fn(&crate::App, &mut Data)> {
    id: ViewId,

    contents: String,
    focused: bool,
    width: f32,

    state_lens: StateLens,
    text_lens: TextLens,
    on_submit: OnSubmit,

    font: Rc<sfml::SfBox<graphics::Font>>,

    _phantom: PhantomData<(fn(&Data) -> &TextFieldState, fn(&Data) -> &String)>,
}
struct TextFieldLayout<'text_field, Data, StateLens: Lens<Data, TextFieldState>, TextLens: Lens<Data, String>, OnSubmit: Fn(&crate::App, &mut Data)> {
    text_field: &'text_field TextFieldView<Data, StateLens, TextLens, OnSubmit>,
    size: graphics::Vector2f,
}

pub(crate) fn text_field<Data>(
    id_maker: &mut ViewIdMaker,
    font: &Rc<sfml::SfBox<graphics::Font>>,
    width: f32,
    state_lens: impl Lens<Data, TextFieldState>,
    text_lens: impl Lens<Data, String>,
    on_submit: impl Fn(&crate::App, &mut Data),
    data: &Data,
) -> impl ViewWithoutLayout<Data> {
    let focused = state_lens.with(data, |field_state| field_state.focused);
    let contents = text_lens.with(data, Clone::clone);
    TextFieldView { id: id_maker.next_id(), contents, focused, width, state_lens, text_lens, on_submit, font: font.clone(), _phantom: PhantomData }
}

impl<Data, StateLens: Lens<Data, TextFieldState>, TextLens: Lens<Data, String>, OnSubmit: Fn(&crate::App, &mut Data)> ViewWithoutLayout<Data> for TextFieldView<Data, StateLens, TextLens, OnSubmit> {
    type WithLayout<'without_layout> = TextFieldLayout<'without_layout, Data, StateLens, TextLens, OnSubmit> where Self: 'without_layout;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        TextFieldLayout { text_field: self, size: sc.clamp_size(graphics::Vector2f::new(self.width, 26.0)) }
    }
}

impl<Data, StateLens: Lens<Data, TextFieldState>, TextLens: Lens<Data, String>, OnSubmit: Fn(&crate::App, &mut Data)> View<Data> for TextFieldLayout<'_, Data, StateLens, TextLens, OnSubmit> {
    fn draw_inner(&self, app: &crate::App, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, _: Option<ViewId>) {
        let rect = graphics::FloatRect::from_vecs(top_left, self.size);

        let mut background_rect = graphics::RectangleShape::from_rect(rect);
        background_rect.set_fill_color(app.theme.field_bg);
        if self.text_field.focused {
            background_rect.set_outline_color(app.theme.field_focused_outline);
            background_rect.set_outline_thickness(2.0);
        } else {
            background_rect.set_outline_color(app.theme.field_outline);
            background_rect.set_outline_thickness(1.0);
        }

        // a trailing underscore stands in for a caret
        let shown = if self.text_field.focused { format!("{}_", self.text_field.contents) } else { self.text_field.contents.clone() };
        let mut text = graphics::Text::new(&shown, &self.text_field.font, app.theme.body_font_size);
        text.set_fill_color(app.theme.field_fg);
        text.anchor_top_left();
        text.set_position(top_left + graphics::Vector2f::new(6.0, 6.0));

        target.draw(&background_rect);
        target.draw(&text);
    }

    fn find_hover(&self, top_left: graphics::Vector2f, mouse: graphics::Vector2f) -> Option<ViewId> {
        if graphics::FloatRect::from_vecs(top_left, self.size).contains(mouse) {
            Some(self.text_field.id)
        } else {
            None
        }
    }

    fn size(&self) -> graphics::Vector2f {
        self.size
    }

    fn send_targeted_event(&self, app: &crate::App, data: &mut Data, target: ViewId, event: TargetedEvent) {
        if target == self.text_field.id {
            self.targeted_event(app, data, event);
        } else if let TargetedEvent::LeftMouseDown(_) = event {
            // a click that landed on some other widget takes the focus away
            self.text_field.state_lens.with_mut(data, |field_state| field_state.focused = false);
        }
    }

    fn targeted_event(&self, _: &crate::App, data: &mut Data, event: TargetedEvent) {
        match event {
            TargetedEvent::LeftMouseDown(_) => self.text_field.state_lens.with_mut(data, |field_state| field_state.focused = true),
            TargetedEvent::RightMouseDown(_) => {}
        }
    }

    fn general_event(&self, app: &crate::App, data: &mut Data, event: GeneralEvent) {
        if !self.text_field.focused {
            return;
        }
        match event {
            GeneralEvent::TextEntered(BACKSPACE) => {
                self.text_field.text_lens.with_mut(data, |text| {
                    text.pop();
                });
            }
            GeneralEvent::TextEntered('\r' | '\n') => (self.text_field.on_submit)(app, data),
            GeneralEvent::TextEntered(c) if !c.is_control() => self.text_field.text_lens.with_mut(data, |text| text.push(c)),
            GeneralEvent::TextEntered(_) | GeneralEvent::MouseMoved(_) | GeneralEvent::LeftMouseUp => {}
        }
    }
}
