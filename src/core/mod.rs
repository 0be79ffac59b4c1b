pub mod engine;
pub mod fragments;
pub mod markup;
pub mod menu;
pub mod renderer;

pub use crate::domain::model::{CartSnapshot, FragmentEntry, FragmentResponse, FragmentSet};
pub use crate::domain::ports::{CartSource, ConfigProvider, FragmentRenderer};
pub use crate::utils::error::Result;
