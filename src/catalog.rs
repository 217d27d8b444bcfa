pub mod command;
pub mod console;
pub mod controller;
pub mod drivers;
pub mod domain;
pub mod factory;
