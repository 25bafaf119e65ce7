pub mod fragment;
pub mod preview;
pub mod tags;
