// view ids are handed out in tree construction order, so they are stable within a frame
// but must never be held across frames
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct ViewId(u64);

pub(crate) struct ViewIdMaker(u64);
impl ViewIdMaker {
    pub(crate) fn new() -> ViewIdMaker {
        ViewIdMaker(0)
    }
    pub(crate) fn next_id(&mut self) -> ViewId {
        let id = ViewId(self.0);
        self.0 += 1;
        id
    }
}
