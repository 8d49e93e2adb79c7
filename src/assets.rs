pub(crate) mod decode;
pub(crate) mod source;
pub(crate) mod text;
pub(crate) mod timestamp;
