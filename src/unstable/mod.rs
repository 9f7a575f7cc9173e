pub mod quicksort;
pub mod selection;
pub mod shell;
