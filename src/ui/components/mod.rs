//! Reusable UI components

pub mod add_button;
pub mod todo_input;
pub mod todo_list_component;

// Component exports
pub use add_button::AddButton;
pub use todo_input::TodoInputComponent;
pub use todo_list_component::TodoListComponent;
