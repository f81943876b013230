pub mod demo_modal;
