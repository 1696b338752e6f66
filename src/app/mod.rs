//! Core application logic: state management, event handling, and action dispatch.

pub mod action;
pub mod event;
pub mod form;
pub mod handler;
pub mod input;
pub mod menu;
pub mod route;
pub mod state;
pub mod toast;
