pub(crate) mod canvas;
pub(crate) mod pipeline;
pub(crate) mod session;
pub(crate) mod settings;
