use std::{marker::PhantomData, rc::Rc};

use sfml::graphics::{Shape, Transformable};

use crate::{
    graphics::{self, CenterText, RectCenter},
    simulation::logic::bit_digit,
    view::{
        id::{ViewId, ViewIdMaker},
        lens::Lens,
        GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout,
    },
};

// a two-state switch showing its caption and current bit; clicking it flips the bit
struct ToggleView<Data, ValueLens: Lens<Data, bool>> {
    id: ViewId,

    caption: String,
    value: bool,

    value_lens: ValueLens,

    font: Rc<sfml::SfBox<graphics::Font>>,

    _phantom: PhantomData<fn(&Data) -> &bool>,
}
struct ToggleLayout<'toggle, Data, ValueLens: Lens<Data, bool>> {
    toggle: &'toggle ToggleView<Data, ValueLens>,
    size: graphics::Vector2f,
}

pub(crate) fn toggle<Data>(id_maker: &mut ViewIdMaker, font: &Rc<sfml::SfBox<graphics::Font>>, caption: &str, value_lens: impl Lens<Data, bool>, data: &Data) -> impl ViewWithoutLayout<Data> {
    let value = value_lens.with(data, |value| *value);
    ToggleView { id: id_maker.next_id(), caption: caption.to_string(), value, value_lens, font: font.clone(), _phantom: PhantomData }
}

impl<Data, ValueLens: Lens<Data, bool>> ViewWithoutLayout<Data> for ToggleView<Data, ValueLens> {
    type WithLayout<'without_layout> = ToggleLayout<'without_layout, Data, ValueLens> where Self: 'without_layout;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        ToggleLayout { toggle: self, size: sc.clamp_size(graphics::Vector2f::new(70.0, 28.0)) }
    }
}

impl<Data, ValueLens: Lens<Data, bool>> View<Data> for ToggleLayout<'_, Data, ValueLens> {
    fn draw_inner(&self, app: &crate::App, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, _: Option<ViewId>) {
        let rect = graphics::FloatRect::from_vecs(top_left, self.size);

        let mut background_rect = graphics::RectangleShape::from_rect(rect);
        background_rect.set_fill_color(if self.toggle.value { app.theme.on_color } else { app.theme.off_color });

        let caption = format!("{} = {}", self.toggle.caption, bit_digit(self.toggle.value));
        let mut text = graphics::Text::new(&caption, &self.toggle.font, app.theme.body_font_size);
        text.set_fill_color(app.theme.toggle_fg);
        text.center();
        text.set_position(rect.center());

        target.draw(&background_rect);
        target.draw(&text);
    }

    fn find_hover(&self, top_left: graphics::Vector2f, mouse: graphics::Vector2f) -> Option<ViewId> {
        if graphics::FloatRect::from_vecs(top_left, self.size).contains(mouse) {
            Some(self.toggle.id)
        } else {
            None
        }
    }

    fn size(&self) -> graphics::Vector2f {
        self.size
    }

    fn send_targeted_event(&self, app: &crate::App, data: &mut Data, target: ViewId, event: TargetedEvent) {
        if target == self.toggle.id {
            self.targeted_event(app, data, event);
        }
    }

    fn targeted_event(&self, _: &crate::App, data: &mut Data, event: TargetedEvent) {
        match event {
            TargetedEvent::LeftMouseDown(_) => self.toggle.value_lens.with_mut(data, |value| *value = !*value),
            TargetedEvent::RightMouseDown(_) => {}
        }
    }

    fn general_event(&self, _: &crate::App, _: &mut Data, _: GeneralEvent) {}
}
