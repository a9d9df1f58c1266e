pub mod comb;
pub mod heap;
pub mod quick;
pub mod selection;
pub mod shell;
pub mod stooge;
