pub mod substitution;

pub use substitution::SubstitutionRenderer;
