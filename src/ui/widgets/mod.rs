pub mod card;
pub mod form;
pub mod pagination;
pub mod popup;
pub mod searchbar;
pub mod statusbar;
pub mod table;
