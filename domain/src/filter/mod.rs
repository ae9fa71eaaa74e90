//! Category filter
//!
//! - [`selection::FilterSelection`] - the remembered filter ("all" or one category)
//! - [`view::FilterView`] - the quotes visible through a filter

pub mod selection;
pub mod view;
