//! DOM-free view logic shared by the Yew components and native tests.

pub mod display;
pub mod form;
pub mod page;
pub mod theme;
