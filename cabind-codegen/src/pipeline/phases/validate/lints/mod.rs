//! Built-in lints for binding validation.

mod const_static;
mod non_trivial_return;
mod reserved_param;

pub use const_static::ConstStaticLint;
pub use non_trivial_return::NonTrivialReturnLint;
pub use reserved_param::{RECEIVER_NAME, ReservedParamLint};
