use std::marker::PhantomData;

use crate::{
    graphics::Vector2f,
    view::{id::ViewId, GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout},
};

struct MinSizeView<Data, Child: ViewWithoutLayout<Data>> {
    min: Vector2f,
    child: Child,

    _phantom: PhantomData<fn(&Data)>,
}
struct MinSizeLayout<'min_size, Data, Child: ViewWithoutLayout<Data> + 'min_size> {
    own_size: Vector2f,
    child: Child::WithLayout<'min_size>,
}

// reserves at least the given size; used to give table cells a uniform width
pub(crate) fn min_size<Data>(min: Vector2f, child: impl ViewWithoutLayout<Data>) -> impl ViewWithoutLayout<Data> {
    MinSizeView { min, child, _phantom: PhantomData }
}

impl<Data, Child: ViewWithoutLayout<Data>> ViewWithoutLayout<Data> for MinSizeView<Data, Child> {
    type WithLayout<'without_layout> = MinSizeLayout<'without_layout, Data, Child> where Self: 'without_layout;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        let child = self.child.layout(sc.with_no_min());
        let child_size = child.size();
        let own_size = sc.clamp_size(Vector2f::new(child_size.x.max(self.min.x), child_size.y.max(self.min.y)));
        MinSizeLayout { own_size, child }
    }
}

impl<Data, Child: ViewWithoutLayout<Data>> View<Data> for MinSizeLayout<'_, Data, Child> {
    fn draw_inner(&self, app: &crate::App, target: &mut dyn crate::graphics::RenderTarget, top_left: Vector2f, hover: Option<ViewId>) {
        self.child.draw(app, target, top_left, hover);
    }

    fn find_hover(&self, top_left: Vector2f, mouse: Vector2f) -> Option<ViewId> {
        self.child.find_hover(top_left, mouse)
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
