//! Reusable UI components

mod back_to_top;

pub use back_to_top::{back_to_top_area, render_back_to_top};
