pub mod keybinds;
pub mod settings;
