pub mod pipeline;

pub use pipeline::recompute_armor_class;
