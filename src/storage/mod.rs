pub mod motors;
