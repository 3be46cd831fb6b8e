pub mod charts;
pub mod combobox;
pub mod date_picker;
pub mod layout;
pub mod prediction;
