use crate::{
    graphics::Vector2f,
    view::{id::ViewId, GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout},
};

#[derive(Copy, Clone)]
pub(crate) enum Direction {
    Horizontal,
    Vertical,
}

// ViewWithoutLayout cannot be used as a trait object directly because of the WithLayout
// associated type, so flow children go through this object-safe shim instead
pub(crate) trait ViewLayoutIntoBoxView<'s, Data> {
    fn layout(&'s self, sc: SizeConstraints) -> Box<dyn View<Data> + 's>;
}
impl<'s, T: ViewWithoutLayout<Data>, Data: 's> ViewLayoutIntoBoxView<'s, Data> for T {
    fn layout(&'s self, sc: SizeConstraints) -> Box<dyn View<Data> + 's> {
        Box::new(self.layout(sc)) as Box<dyn View<_>>
    }
}

pub(crate) type BoxedChild<Data> = Box<dyn for<'s> ViewLayoutIntoBoxView<'s, Data>>;

struct FlowView<Data> {
    direction: Direction,
    children: Vec<BoxedChild<Data>>,
}
struct FlowLayout<'original, Data> {
    own_size: Vector2f,
    children: Vec<(Vector2f, Box<dyn View<Data> + 'original>)>,
}

pub(crate) fn horizontal_flow<Data>(children: Vec<BoxedChild<Data>>) -> impl ViewWithoutLayout<Data> {
    FlowView { direction: Direction::Horizontal, children }
}
pub(crate) fn vertical_flow<Data>(children: Vec<BoxedChild<Data>>) -> impl ViewWithoutLayout<Data> {
    FlowView { direction: Direction::Vertical, children }
}

impl<Data> ViewWithoutLayout<Data> for FlowView<Data> {
    type WithLayout<'without_layout> = FlowLayout<'without_layout, Data> where Self: 'without_layout;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        let children: Vec<_> = self.children.iter().map(|child| child.layout(sc.with_no_min())).collect();

        // along the flow axis child sizes add up; across it the largest child wins
        let mut main_axis = 0.0;
        let mut cross_axis: f32 = 0.0;
        let mut placed = Vec::with_capacity(children.len());
        for child in children {
            let offset = match self.direction {
                Direction::Horizontal => Vector2f::new(main_axis, 0.0),
                Direction::Vertical => Vector2f::new(0.0, main_axis),
            };
            let child_size = child.size();
            match self.direction {
                Direction::Horizontal => {
                    main_axis += child_size.x;
                    cross_axis = cross_axis.max(child_size.y);
                }
                Direction::Vertical => {
                    main_axis += child_size.y;
                    cross_axis = cross_axis.max(child_size.x);
                }
            }
            placed.push((offset, child));
        }

        let own_size = sc.clamp_size(match self.direction {
            Direction::Horizontal => Vector2f::new(main_axis, cross_axis),
            Direction::Vertical => Vector2f::new(cross_axis, main_axis),
        });

        FlowLayout { own_size, children: placed }
    }
}

impl<Data> View<Data> for FlowLayout<'_, Data> {
    fn draw_inner(&self, app: &crate::App, target: &mut dyn crate::graphics::RenderTarget, top_left: Vector2f, hover: Option<ViewId>) {
        for (child_offset, child) in &self.children {
            child.draw(app, target, top_left + *child_offset, hover);
        }
    }

    fn find_hover(&self, top_left: Vector2f, mouse: Vector2f) -> Option<ViewId> {
        self.children.iter().find_map(|(child_offset, child)| child.find_hover(top_left + *child_offset, mouse))
    }

    fn size(&self) -> Vector2f {
        self.own_size
    }

    fn send_targeted_event(&self, app: &crate::App, data: &mut Data, target: ViewId, event: TargetedEvent) {
        for (_, child) in &self.children {
            child.send_targeted_event(app, data, target, event);
        }
    }

    fn targeted_event(&self, _: &crate::App, _: &mut Data, _: TargetedEvent) {}
    fn general_event(&self, app: &crate::App, data: &mut Data, event: GeneralEvent) {
        for (_, child) in &self.children {
            child.general_event(app, data, event);
        }
    }
}
