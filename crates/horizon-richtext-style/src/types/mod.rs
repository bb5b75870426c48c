//! Style value types.

mod value;

pub use value::{
    BaselineShift, FontStyle, FontWeight, Shadow, TextAlign, TextDecoration, TextIndent,
};
