use std::marker::PhantomData;

use crate::{
    graphics::Vector2f,
    view::{id::ViewId, GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout},
};

struct PadView<Data, Child: ViewWithoutLayout<Data>> {
    amount: f32,
    child: Child,

    _phantom: PhantomData<fn(&Data)>,
}
struct PadLayout<'pad, Data, Child: ViewWithoutLayout<Data> + 'pad> {
    amount: f32,
    own_size: Vector2f,
    child: Child::WithLayout<'pad>,
}

// uniform padding on all four sides
pub(crate) fn pad<Data>(amount: f32, child: impl ViewWithoutLayout<Data>) -> impl ViewWithoutLayout<Data> {
    PadView { amount, child, _phantom: PhantomData }
}

impl<Data, Child: ViewWithoutLayout<Data>> ViewWithoutLayout<Data> for PadView<Data, Child> {
    type WithLayout<'without_layout> = PadLayout<'without_layout, Data, Child> where Self: 'without_layout;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        let child = self.child.layout(sc.shrunk_by(Vector2f::new(self.amount * 2.0, self.amount * 2.0)));
        let own_size = sc.clamp_size(child.size() + Vector2f::new(self.amount * 2.0, self.amount * 2.0));
        PadLayout { amount: self.amount, own_size, child }
    }
}

impl<Data, Child: ViewWithoutLayout<Data>> View<Data> for PadLayout<'_, Data, Child> {
    fn draw_inner(&self, app: &crate::App, target: &mut dyn crate::graphics::RenderTarget, top_left: Vector2f, hover: Option<ViewId>) {
        self.child.draw(app, target, top_left + Vector2f::new(self.amount, self.amount), hover);
    }

    fn find_hover(&self, top_left: Vector2f, mouse: Vector2f) -> Option<ViewId> {
        self.child.find_hover(top_left + Vector2f::new(self.amount, self.amount), mouse)
    }

    fn size(&self) -> Vector2f {
        self.own_size
    }

    fn send_targeted_event(&self, app: &crate::App, data: &mut Data, target: ViewId, event: TargetedEvent) {
        self.child.send_targeted_event(app, data, target, event);
    }

    fn targeted_event(&self, _: &crate::App, _: &mut Data, _: TargetedEvent) {}
    fn general_event(&self, app: &crate::App, data: &mut Data, event: GeneralEvent) {
        self.child.general_event(app, data, event);
    }
}
