pub(crate) mod constants;
mod layout;
pub(crate) mod render;
