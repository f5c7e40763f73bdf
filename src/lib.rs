pub mod aggregate;
pub mod dataset;
pub mod export;
pub mod form;
pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod roster;
pub mod validate;
