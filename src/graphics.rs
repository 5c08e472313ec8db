// graphics utilities

use std::rc::Rc;

use font_kit::{family_name::FamilyName, handle::Handle, properties::Properties, source::SystemSource};
use sfml::graphics::Transformable;

pub(crate) use sfml::graphics::{Color, FloatRect, Font, RectangleShape, RenderTarget, RenderWindow, Text};
pub(crate) use sfml::system::Vector2f;

pub(crate) trait RectCenter<T> {
    fn center(&self) -> sfml::system::Vector2<T>;
}
impl<T: std::ops::Div + std::ops::Add<<T as std::ops::Div>::Output, Output = T> + From<i8> + Copy> RectCenter<T> for sfml::graphics::Rect<T> {
    fn center(&self) -> sfml::system::Vector2<T> {
        sfml::system::Vector2::new(self.left + self.width / 2.into(), self.top + self.height / 2.into())
    }
}

pub(crate) trait CenterText {
    fn center(&mut self);
}
impl CenterText for Text<'_> {
    fn center(&mut self) {
        let bounds = self.local_bounds();
        self.set_origin((bounds.left + bounds.width / 2.0, bounds.top + bounds.height / 2.0));
    }
}

// sfml text positions are offset by the font ascent; anchoring at the local bounds origin
// makes set_position place the visible glyphs at the requested point
pub(crate) trait TopLeftText {
    fn anchor_top_left(&mut self);
}
impl TopLeftText for Text<'_> {
    fn anchor_top_left(&mut self) {
        let bounds = self.local_bounds();
        self.set_origin((bounds.left, bounds.top));
    }
}

// sfml cannot enumerate system fonts on its own, so font discovery goes through font-kit
pub(crate) fn load_system_font() -> Result<Rc<sfml::SfBox<Font>>, Box<dyn std::error::Error>> {
    let handle = SystemSource::new().select_best_match(&[FamilyName::SansSerif], &Properties::new())?;
    let font = match handle {
        Handle::Path { path, .. } => Font::from_file(path.to_str().ok_or("font path is not valid utf-8")?),
        Handle::Memory { bytes, .. } => {
            // sfml fonts must outlive every Text made from them; this loads once at startup, so leaking is fine
            let bytes: &'static [u8] = Box::leak(bytes.to_vec().into_boxed_slice());
            unsafe { Font::from_memory(bytes) }
        }
    };
    Ok(Rc::new(font.ok_or("sfml could not load the selected font")?))
}
