mod linear_equal;

pub(crate) use linear_equal::*;
