pub mod point;
pub mod selection;
pub mod series;
pub mod tier;
pub mod zone;
