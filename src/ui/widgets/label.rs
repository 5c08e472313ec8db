use std::rc::Rc;

use sfml::graphics::Transformable;

use crate::{
    graphics::{self, TopLeftText},
    view::{id::ViewId, GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout},
};

pub(crate) struct LabelView {
    text: String,
    character_size: u32,
    color: graphics::Color,
    font: Rc<sfml::SfBox<graphics::Font>>,
}
pub(crate) struct LabelLayout<'label> {
    label: &'label LabelView,
    size: graphics::Vector2f,
}

// labels are inert, so unlike the interactive widgets they do not consume a view id
pub(crate) fn label(font: &Rc<sfml::SfBox<graphics::Font>>, text: String, character_size: u32, color: graphics::Color) -> LabelView {
    LabelView { text, character_size, color, font: font.clone() }
}

impl<Data> ViewWithoutLayout<Data> for LabelView {
    type WithLayout<'without_layout> = LabelLayout<'without_layout> where Self: 'without_layout;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        let text = graphics::Text::new(&self.text, &self.font, self.character_size);
        let bounds = text.local_bounds();
        // local bounds exclude the offset between the text origin and the first glyph, so add it back in
        LabelLayout { label: self, size: sc.clamp_size(graphics::Vector2f::new(bounds.left + bounds.width, bounds.top + bounds.height)) }
    }
}

impl<Data> View<Data> for LabelLayout<'_> {
    fn draw_inner(&self, _: &crate::App, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, _: Option<ViewId>) {
        let mut text = graphics::Text::new(&self.label.text, &self.label.font, self.label.character_size);
        text.set_fill_color(self.label.color);
        text.anchor_top_left();
        text.set_position(top_left);
        target.draw(&text);
    }

    fn find_hover(&self, _: graphics::Vector2f, _: graphics::Vector2f) -> Option<ViewId> {
        None
    }

    fn size(&self) -> graphics::Vector2f {
        self.size
    }

    fn send_targeted_event(&self, _: &crate::App, _: &mut Data, _: ViewId, _: TargetedEvent) {}
    fn targeted_event(&self, _: &crate::App, _: &mut Data, _: TargetedEvent) {}
    fn general_event(&self, _: &crate::App, _: &mut Data, _: GeneralEvent) {}
}
