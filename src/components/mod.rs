// UI components
pub mod buttons;
pub mod cards;
pub mod forms;
pub mod layout;
pub mod modals;
pub mod notifications;
pub mod pagination;
pub mod tables;
