pub mod diff;
pub mod encode;
pub mod inspect_tx;
