pub(crate) mod grid;
