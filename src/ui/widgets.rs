pub(crate) mod button;
pub(crate) mod flow;
pub(crate) mod label;
pub(crate) mod min_size;
pub(crate) mod pad;
pub(crate) mod text_field;
pub(crate) mod toggle;
