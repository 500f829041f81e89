//! FerrisTip library: tip arithmetic, rating bands, theme persistence and the
//! FLTK screen that ties them together.

pub mod app;
pub mod ui;
