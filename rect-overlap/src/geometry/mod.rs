mod transformation;

pub mod geo_enums;
pub mod geo_traits;
pub mod primitives;
pub mod sat;

#[doc(inline)]
pub use transformation::Transformation;
