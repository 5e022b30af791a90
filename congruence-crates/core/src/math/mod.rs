pub(crate) mod num_ext;
pub(crate) mod number_theory;
