pub mod one_pass;
pub mod quadratic;
pub mod two_pass;
